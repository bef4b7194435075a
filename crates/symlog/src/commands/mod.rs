pub mod clear;
pub mod export;
pub mod history;
pub mod log;
pub mod status;
pub mod trends;
pub mod version;

use std::path::{Path, PathBuf};

use symlog_store::{EntryStore, JsonFileBackend, Paths};

/// Resolve the journal file: explicit override first, else the default under
/// the home directory.
pub fn resolve_journal(journal: Option<&Path>) -> anyhow::Result<PathBuf> {
    match journal {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Paths::new()?.entries_file()),
    }
}

pub fn open_store(journal: Option<&Path>) -> anyhow::Result<EntryStore> {
    let path = resolve_journal(journal)?;
    let store = EntryStore::open(Box::new(JsonFileBackend::new(path)))?;
    Ok(store)
}
