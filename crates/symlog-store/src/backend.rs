//! Storage backends for the entry collection
//!
//! The journal is one serialized array, rewritten in full on every change and
//! read in full once at startup. Backends only move that array in and out of
//! durable storage; the one-entry-per-date invariant lives in `EntryStore`.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::StoreError;
use crate::types::SymptomEntry;

/// Durable storage for the full entry collection.
///
/// `load` returns `Ok(None)` when no usable payload exists, so a fresh (or
/// damaged) journal starts empty rather than failing.
pub trait StorageBackend {
    fn load(&mut self) -> Result<Option<Vec<SymptomEntry>>, StoreError>;
    fn save(&mut self, entries: &[SymptomEntry]) -> Result<(), StoreError>;
}

/// JSON file backend, the default for the CLI.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonFileBackend {
    fn load(&mut self) -> Result<Option<Vec<SymptomEntry>>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(entries) => Ok(Some(entries)),
            Err(err) => {
                // Fail closed: a damaged journal reads as empty. The broken
                // file is overwritten on the next save.
                warn!(path = %self.path.display(), %err, "malformed journal file, starting empty");
                Ok(None)
            }
        }
    }

    fn save(&mut self, entries: &[SymptomEntry]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(entries)?;
        atomic_write(&self.path, json.as_bytes())?;
        Ok(())
    }
}

/// Write data atomically using temp file + rename
fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}

/// In-memory backend for tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    snapshot: Option<Vec<SymptomEntry>>,
    pub save_count: usize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<SymptomEntry>) -> Self {
        Self {
            snapshot: Some(entries),
            save_count: 0,
        }
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&mut self) -> Result<Option<Vec<SymptomEntry>>, StoreError> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, entries: &[SymptomEntry]) -> Result<(), StoreError> {
        self.snapshot = Some(entries.to_vec());
        self.save_count += 1;
        Ok(())
    }
}
