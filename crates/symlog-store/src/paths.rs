//! Path resolution for journal files

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::StoreError;

/// Resolves standard paths for journal files
#[derive(Debug, Clone)]
pub struct Paths {
    pub data_dir: PathBuf,
}

impl Paths {
    pub fn new() -> Result<Self, StoreError> {
        let home = dirs::home_dir().ok_or(StoreError::NoHome)?;
        Ok(Self {
            data_dir: home.join(".symlog"),
        })
    }

    /// The single journal file holding the full entry collection
    pub fn entries_file(&self) -> PathBuf {
        self.data_dir.join("entries.json")
    }

    /// Default export filename for a given day, e.g.
    /// `symptom-journal-2024-01-01.csv`
    pub fn export_file_name(date: NaiveDate, extension: &str) -> String {
        format!("symptom-journal-{date}.{extension}")
    }
}
