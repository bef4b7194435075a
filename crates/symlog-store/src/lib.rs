//! Entry data model and persistence for the symptom journal

mod backend;
mod error;
mod paths;
mod store;
mod types;

pub use backend::{JsonFileBackend, MemoryBackend, StorageBackend};
pub use error::StoreError;
pub use paths::Paths;
pub use store::EntryStore;
pub use types::{intensity_label, Mood, Symptom, SymptomEntry, SymptomScores, MAX_INTENSITY};
