use std::path::Path;

use symlog_core::{most_common_symptom, symptom_days, symptom_free_days};
use symlog_store::SymptomEntry;

use crate::commands::open_store;

const DISPLAY_LIMIT: usize = 20;

pub fn run(journal: Option<&Path>, stats: bool) -> anyhow::Result<()> {
    let store = open_store(journal)?;
    let entries = store.all();

    if entries.is_empty() {
        println!("No journal history");
        return Ok(());
    }

    if stats {
        println!("{}", compute_stats(entries));
        return Ok(());
    }

    let recent: Vec<&SymptomEntry> = entries.iter().rev().take(DISPLAY_LIMIT).collect();

    println!("Recent Entries (last {})", recent.len());
    println!("========================");
    for entry in recent {
        println!("{}", format_entry_line(entry));
    }
    Ok(())
}

fn format_entry_line(entry: &SymptomEntry) -> String {
    let mood = entry.mood.map(|m| m.key()).unwrap_or("-");
    let notes = if entry.notes.is_empty() {
        String::new()
    } else {
        format!(" | {}", truncate(&entry.notes, 40))
    };
    format!(
        "  {} | intensity:{:>2} mood:{}{}",
        entry.date,
        entry.symptoms.total(),
        mood,
        notes
    )
}

fn compute_stats(entries: &[SymptomEntry]) -> String {
    let total = entries.len();
    let avg_intensity =
        entries.iter().map(|e| e.symptoms.total() as f64).sum::<f64>() / total as f64;
    let most_common = match most_common_symptom(entries) {
        Some((symptom, count)) => format!("{symptom} ({count})"),
        None => "none".to_string(),
    };

    format!(
        "Total entries: {}\n\
         Symptom days: {}\n\
         Symptom-free days: {}\n\
         Avg daily intensity: {:.1}\n\
         Most common symptom: {}",
        total,
        symptom_days(entries),
        symptom_free_days(entries),
        avg_intensity,
        most_common
    )
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}…")
}

#[cfg(test)]
mod tests {
    use super::*;
    use symlog_store::{Mood, Symptom};

    fn sample_entries() -> Vec<SymptomEntry> {
        let mut a = SymptomEntry::new("2024-01-01".parse().unwrap(), 1);
        a.symptoms.set(Symptom::Fatigue, 2);
        a.mood = Some(Mood::Neutral);
        a.notes = "tired after travel".to_string();

        let mut b = SymptomEntry::new("2024-01-02".parse().unwrap(), 2);
        b.mood = Some(Mood::Happy);

        vec![a, b]
    }

    #[test]
    fn test_entry_line_format() {
        let entries = sample_entries();
        let line = format_entry_line(&entries[0]);
        assert!(line.contains("2024-01-01"));
        assert!(line.contains("intensity: 2"));
        assert!(line.contains("mood:neutral"));
        assert!(line.contains("tired after travel"));
    }

    #[test]
    fn test_stats_output() {
        let stats = compute_stats(&sample_entries());
        assert!(stats.contains("Total entries: 2"));
        assert!(stats.contains("Symptom days: 1"));
        assert!(stats.contains("Symptom-free days: 1"));
        assert!(stats.contains("Avg daily intensity: 1.0"));
        assert!(stats.contains("Most common symptom: Fatigue (1)"));
    }

    #[test]
    fn test_truncate_long_notes() {
        let long = "x".repeat(60);
        let short = truncate(&long, 40);
        assert_eq!(short.chars().count(), 41);
        assert!(short.ends_with('…'));
    }
}
