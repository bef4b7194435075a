use std::path::{Path, PathBuf};

use chrono::{Local, Utc};
use tracing::info;

use symlog_core::{to_csv, to_json, ExportError};
use symlog_store::Paths;

use crate::cli::ExportFormat;
use crate::commands::open_store;

pub fn run(
    journal: Option<&Path>,
    format: ExportFormat,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let store = open_store(journal)?;
    let today = Local::now().date_naive();

    let rendered = match format {
        ExportFormat::Csv => to_csv(store.all()),
        ExportFormat::Json => to_json(store.all(), Utc::now()),
    };

    let content = match rendered {
        Ok(content) => content,
        Err(ExportError::Empty) => {
            // Informational, not an error: nothing is written
            println!("No data to export");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(Paths::export_file_name(today, extension(format))),
    };
    std::fs::write(&path, content)?;

    info!(path = %path.display(), entries = store.len(), "journal exported");
    println!("Exported {} entries to {}", store.len(), path.display());
    Ok(())
}

fn extension(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Csv => "csv",
        ExportFormat::Json => "json",
    }
}
