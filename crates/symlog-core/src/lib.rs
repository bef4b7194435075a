//! Derived statistics, journal session state, and export forms

mod export;
mod session;
mod stats;
mod trend;

pub use export::{to_csv, to_json, ExportDocument, ExportError};
pub use session::{JournalSession, Tab};
pub use stats::{
    most_common_symptom, streak, streak_message, symptom_days, symptom_free_days,
    symptom_frequency,
};
pub use trend::{last_7_days, wellness_percent, DayPoint};
