use std::path::Path;

use crate::commands::open_store;

pub fn run(journal: Option<&Path>, yes: bool) -> anyhow::Result<()> {
    let mut store = open_store(journal)?;

    if store.is_empty() {
        println!("No data to clear");
        return Ok(());
    }

    if !yes {
        println!(
            "This permanently deletes all {} entries. Re-run with --yes to confirm.",
            store.len()
        );
        return Ok(());
    }

    store.clear()?;
    println!("All data cleared");
    Ok(())
}
