use std::path::Path;

use chrono::Local;
use symlog_core::JournalSession;
use symlog_store::{intensity_label, Symptom, SymptomEntry};

use crate::cli::LogArgs;
use crate::commands::open_store;

pub fn run(journal: Option<&Path>, args: &LogArgs) -> anyhow::Result<()> {
    let store = open_store(journal)?;
    let today = Local::now().date_naive();
    let date = args.date.unwrap_or(today);

    if date > today {
        anyhow::bail!("cannot log a future date ({date})");
    }

    let mut session = JournalSession::new(store, today);
    session.select_date(date);

    let mut changed = false;

    if args.good {
        session.quick_log()?;
        changed = true;
    }

    let intensities = [
        (Symptom::Fever, args.fever),
        (Symptom::Headache, args.headache),
        (Symptom::Fatigue, args.fatigue),
        (Symptom::Nausea, args.nausea),
        (Symptom::Cough, args.cough),
        (Symptom::SoreThroat, args.sore_throat),
    ];
    for (symptom, level) in intensities {
        if let Some(level) = level {
            session.set_intensity(symptom, level)?;
            changed = true;
        }
    }

    if let Some(mood) = args.mood {
        session.set_mood(mood)?;
        changed = true;
    }

    if let Some(notes) = args.notes.as_deref() {
        session.set_notes(notes)?;
        changed = true;
    }

    match session.selected_entry() {
        Some(entry) => {
            if changed {
                println!("Logged {date}");
            }
            print_entry(entry);
        }
        None => println!("No entry for {date}. Pass --good or a symptom flag to record one."),
    }

    Ok(())
}

fn print_entry(entry: &SymptomEntry) {
    for (symptom, level) in entry.symptoms.iter() {
        if level > 0 {
            println!("  {}: {} ({})", symptom, level, intensity_label(level));
        }
    }
    if entry.symptoms.is_clear() {
        println!("  No symptoms");
    }
    if let Some(mood) = entry.mood {
        println!("  Mood: {} {}", mood, mood.emoji());
    }
    if !entry.notes.is_empty() {
        println!("  Notes: {}", entry.notes);
    }
}
