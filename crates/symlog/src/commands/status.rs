use std::path::Path;

use chrono::{Local, NaiveDate};
use symlog_core::{most_common_symptom, streak, streak_message, symptom_free_days};
use symlog_store::SymptomEntry;

use crate::commands::open_store;

pub fn run(journal: Option<&Path>) -> anyhow::Result<()> {
    let store = open_store(journal)?;
    let today = Local::now().date_naive();
    println!("{}", build_summary(store.all(), today));
    Ok(())
}

fn build_summary(entries: &[SymptomEntry], today: NaiveDate) -> String {
    let mut lines = vec![
        "Health Summary".to_string(),
        "==============".to_string(),
        format!("Total entries: {}", entries.len()),
        format!("Symptom-free days: {}", symptom_free_days(entries)),
    ];

    if let Some((symptom, count)) = most_common_symptom(entries) {
        let plural = if count == 1 { "time" } else { "times" };
        lines.push(format!("Most common: {symptom} ({count} {plural})"));
    }

    let current = streak(entries, today);
    lines.push(format!(
        "Streak: {} day{} — {}",
        current,
        if current == 1 { "" } else { "s" },
        streak_message(current)
    ));

    lines.join("\n")
}
