//! The entry collection and its mutation entry points

use chrono::NaiveDate;
use tracing::debug;

use crate::backend::StorageBackend;
use crate::error::StoreError;
use crate::types::SymptomEntry;

/// Owns the journal's entry collection.
///
/// At most one entry exists per calendar date. All mutations go through
/// `upsert`/`clear`, and each successful mutation persists the whole
/// collection through the backend before returning.
pub struct EntryStore {
    entries: Vec<SymptomEntry>,
    backend: Box<dyn StorageBackend>,
}

impl EntryStore {
    /// Load the collection from the backend. An absent or unreadable payload
    /// starts the store empty.
    pub fn open(mut backend: Box<dyn StorageBackend>) -> Result<Self, StoreError> {
        let entries = backend.load()?.unwrap_or_default();
        debug!(count = entries.len(), "journal loaded");
        Ok(Self { entries, backend })
    }

    /// Full collection, insertion order. Never implicitly sorted.
    pub fn all(&self) -> &[SymptomEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry for a date, if one exists.
    pub fn entry_for(&self, date: NaiveDate) -> Option<&SymptomEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// Replace the entry with the same date in place, or append. One scan,
    /// one decision; duplicate dates cannot be created.
    pub fn upsert(&mut self, entry: SymptomEntry) -> Result<(), StoreError> {
        match self.entries.iter().position(|e| e.date == entry.date) {
            Some(index) => self.entries[index] = entry,
            None => self.entries.push(entry),
        }
        self.backend.save(&self.entries)
    }

    /// Remove every entry. Irreversible; the caller owns the confirmation
    /// policy.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        self.backend.save(&self.entries)
    }
}
