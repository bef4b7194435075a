//! CSV and JSON export forms
//!
//! Both forms refuse an empty collection; the caller surfaces that as an
//! informational message rather than an error exit.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use symlog_store::SymptomEntry;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no entries to export")]
    Empty,

    #[error("export serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The JSON export wrapper: export metadata plus the collection verbatim.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub export_date: String,
    pub total_entries: usize,
    pub entries: Vec<SymptomEntry>,
}

/// Tabular export: fixed header, one row per entry in collection order.
/// Notes are always quoted with internal quotes doubled; timestamps render
/// as RFC 3339 UTC with millisecond precision.
pub fn to_csv(entries: &[SymptomEntry]) -> Result<String, ExportError> {
    if entries.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(
        "Date,Fever,Headache,Fatigue,Nausea,Cough,Sore Throat,Mood,Notes,Timestamp".to_string(),
    );

    for entry in entries {
        let s = &entry.symptoms;
        lines.push(format!(
            "{},{},{},{},{},{},{},{},\"{}\",{}",
            entry.date,
            s.fever,
            s.headache,
            s.fatigue,
            s.nausea,
            s.cough,
            s.sorethroat,
            entry.mood.map(|m| m.key()).unwrap_or(""),
            entry.notes.replace('"', "\"\""),
            format_timestamp(entry.timestamp),
        ));
    }

    Ok(lines.join("\n"))
}

/// Structured export: `{ exportDate, totalEntries, entries }`, pretty-printed.
pub fn to_json(
    entries: &[SymptomEntry],
    exported_at: DateTime<Utc>,
) -> Result<String, ExportError> {
    if entries.is_empty() {
        return Err(ExportError::Empty);
    }

    let document = ExportDocument {
        export_date: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        total_entries: entries.len(),
        entries: entries.to_vec(),
    };

    Ok(serde_json::to_string_pretty(&document)?)
}

fn format_timestamp(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}
