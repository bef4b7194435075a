//! 7-day trend window and wellness scoring

use chrono::{Duration, NaiveDate};
use symlog_store::{Mood, SymptomEntry, SymptomScores};

/// Wellness baseline: a day's intensity sum is subtracted from this before
/// flooring at 0, so severity beyond 12 cannot push the score negative.
const WELLNESS_BASELINE: i32 = 12;

/// One day of the trend window. Days without an entry carry all-zero
/// intensities and no mood.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPoint {
    pub date: NaiveDate,
    pub scores: SymptomScores,
    pub mood: Option<Mood>,
}

/// The window `today-6 ..= today`, always exactly 7 points regardless of how
/// many entries exist.
pub fn last_7_days(entries: &[SymptomEntry], today: NaiveDate) -> Vec<DayPoint> {
    (0..7)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            match entries.iter().find(|e| e.date == date) {
                Some(entry) => DayPoint {
                    date,
                    scores: entry.symptoms,
                    mood: entry.mood,
                },
                None => DayPoint {
                    date,
                    scores: SymptomScores::default(),
                    mood: None,
                },
            }
        })
        .collect()
}

/// Wellness for a day as a rounded 0..=100 percentage, inversely
/// proportional to the intensity sum.
pub fn wellness_percent(point: &DayPoint) -> u32 {
    let wellness = (WELLNESS_BASELINE - i32::from(point.scores.total())).max(0);
    (wellness as f64 / WELLNESS_BASELINE as f64 * 100.0).round() as u32
}
