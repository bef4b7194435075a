//! Journal record types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest recordable intensity (0=none, 1=mild, 2=moderate, 3=severe).
pub const MAX_INTENSITY: u8 = 3;

/// The fixed set of tracked symptoms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symptom {
    Fever,
    Headache,
    Fatigue,
    Nausea,
    Cough,
    SoreThroat,
}

impl Symptom {
    /// All symptoms in canonical order. Frequency ties break toward the
    /// earlier entry of this array.
    pub const ALL: [Symptom; 6] = [
        Symptom::Fever,
        Symptom::Headache,
        Symptom::Fatigue,
        Symptom::Nausea,
        Symptom::Cough,
        Symptom::SoreThroat,
    ];

    /// Serialized key, as stored in the journal file.
    pub fn key(&self) -> &'static str {
        match self {
            Symptom::Fever => "fever",
            Symptom::Headache => "headache",
            Symptom::Fatigue => "fatigue",
            Symptom::Nausea => "nausea",
            Symptom::Cough => "cough",
            Symptom::SoreThroat => "sorethroat",
        }
    }

    /// Human-readable label, as used in CSV headers and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            Symptom::Fever => "Fever",
            Symptom::Headache => "Headache",
            Symptom::Fatigue => "Fatigue",
            Symptom::Nausea => "Nausea",
            Symptom::Cough => "Cough",
            Symptom::SoreThroat => "Sore Throat",
        }
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Daily mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
}

impl Mood {
    pub fn key(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Sad => "sad",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Neutral => "😐",
            Mood::Sad => "😢",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "happy" => Ok(Mood::Happy),
            "neutral" => Ok(Mood::Neutral),
            "sad" => Ok(Mood::Sad),
            other => Err(format!("unknown mood '{other}' (happy|neutral|sad)")),
        }
    }
}

/// Label for an intensity level
pub fn intensity_label(level: u8) -> &'static str {
    match level {
        0 => "none",
        1 => "mild",
        2 => "moderate",
        _ => "severe",
    }
}

/// Per-day intensity of each tracked symptom, 0..=3 each
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomScores {
    pub fever: u8,
    pub headache: u8,
    pub fatigue: u8,
    pub nausea: u8,
    pub cough: u8,
    pub sorethroat: u8,
}

impl SymptomScores {
    pub fn get(&self, symptom: Symptom) -> u8 {
        match symptom {
            Symptom::Fever => self.fever,
            Symptom::Headache => self.headache,
            Symptom::Fatigue => self.fatigue,
            Symptom::Nausea => self.nausea,
            Symptom::Cough => self.cough,
            Symptom::SoreThroat => self.sorethroat,
        }
    }

    /// Set an intensity, clamping into 0..=3. Out-of-range input from
    /// library callers must never corrupt the stored range.
    pub fn set(&mut self, symptom: Symptom, level: u8) {
        let level = level.min(MAX_INTENSITY);
        match symptom {
            Symptom::Fever => self.fever = level,
            Symptom::Headache => self.headache = level,
            Symptom::Fatigue => self.fatigue = level,
            Symptom::Nausea => self.nausea = level,
            Symptom::Cough => self.cough = level,
            Symptom::SoreThroat => self.sorethroat = level,
        }
    }

    /// Sum of all six intensities (0..=18).
    pub fn total(&self) -> u8 {
        Symptom::ALL.iter().map(|&s| self.get(s)).sum()
    }

    /// True when every intensity is exactly 0.
    pub fn is_clear(&self) -> bool {
        self.total() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symptom, u8)> + '_ {
        Symptom::ALL.iter().map(move |&s| (s, self.get(s)))
    }
}

/// One day's journal record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub id: String,
    pub date: NaiveDate,
    pub symptoms: SymptomScores,
    pub mood: Option<Mood>,
    pub notes: String,
    pub timestamp: i64,
}

impl SymptomEntry {
    /// Create an empty entry for a date. The id is opaque and stable for the
    /// record's lifetime; nothing parses it back apart.
    pub fn new(date: NaiveDate, timestamp_millis: i64) -> Self {
        Self {
            id: format!("{date}-{timestamp_millis}"),
            date,
            symptoms: SymptomScores::default(),
            mood: None,
            notes: String::new(),
            timestamp: timestamp_millis,
        }
    }

    /// Refresh the last-modified instant. Last write wins on repeated
    /// updates to the same date.
    pub fn touch(&mut self, timestamp_millis: i64) {
        self.timestamp = timestamp_millis;
    }
}
