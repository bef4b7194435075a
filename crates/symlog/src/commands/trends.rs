use std::path::Path;

use chrono::{Local, NaiveDate};
use symlog_core::{last_7_days, wellness_percent};
use symlog_store::{intensity_label, SymptomEntry};

use crate::commands::open_store;

const BAR_WIDTH: u32 = 10;

pub fn run(journal: Option<&Path>) -> anyhow::Result<()> {
    let store = open_store(journal)?;
    let today = Local::now().date_naive();
    println!("{}", build_trends(store.all(), today));
    Ok(())
}

fn build_trends(entries: &[SymptomEntry], today: NaiveDate) -> String {
    let mut lines = vec![
        "7-Day Symptom Trends".to_string(),
        "====================".to_string(),
        "Date    Fe Hd Fa Na Co St Mood  Wellness".to_string(),
    ];

    for point in last_7_days(entries, today) {
        let s = &point.scores;
        let percent = wellness_percent(&point);
        lines.push(format!(
            "{}  {}  {}  {}  {}  {}  {}  {}    {} {percent:>3}%",
            point.date.format("%b %d"),
            s.fever,
            s.headache,
            s.fatigue,
            s.nausea,
            s.cough,
            s.sorethroat,
            point.mood.map(|m| m.emoji()).unwrap_or("· "),
            wellness_bar(percent),
        ));
    }

    lines.push(String::new());
    lines.push(
        (0..=3)
            .map(|level| format!("{level}={}", intensity_label(level)))
            .collect::<Vec<_>>()
            .join("  "),
    );

    lines.join("\n")
}

fn wellness_bar(percent: u32) -> String {
    let filled = (percent * BAR_WIDTH).div_ceil(100).min(BAR_WIDTH);
    let mut bar = String::with_capacity(BAR_WIDTH as usize);
    for i in 0..BAR_WIDTH {
        bar.push(if i < filled { '#' } else { '-' });
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use symlog_store::{Mood, Symptom};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_trends_has_seven_day_rows() {
        let output = build_trends(&[], date("2024-01-10"));
        // Header (3 lines) + 7 day rows + blank + legend
        assert_eq!(output.lines().count(), 12);
        assert!(output.contains("Jan 04"));
        assert!(output.contains("Jan 10"));
    }

    #[test]
    fn test_trends_shows_entry_intensities_and_mood() {
        let mut entry = SymptomEntry::new(date("2024-01-10"), 0);
        entry.symptoms.set(Symptom::Fever, 3);
        entry.mood = Some(Mood::Sad);

        let output = build_trends(&[entry], date("2024-01-10"));
        let row = output.lines().find(|l| l.starts_with("Jan 10")).unwrap();
        assert!(row.contains('3'));
        assert!(row.contains("😢"));
        assert!(row.contains("75%"));
    }

    #[test]
    fn test_trends_legend() {
        let output = build_trends(&[], date("2024-01-10"));
        assert!(output.contains("0=none  1=mild  2=moderate  3=severe"));
    }

    #[test]
    fn test_wellness_bar_bounds() {
        assert_eq!(wellness_bar(100), "##########");
        assert_eq!(wellness_bar(0), "----------");
        assert_eq!(wellness_bar(83), "#########-");
    }
}
