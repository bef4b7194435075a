//! Pure aggregation over the entry collection
//!
//! Every function here takes a borrowed snapshot and treats an empty
//! collection as a valid zero-valued input, never an error.

use chrono::{Duration, NaiveDate};
use symlog_store::{Symptom, SymptomEntry};

/// A day counts toward the streak when its six intensities sum to at most
/// this value.
const GOOD_DAY_MAX_TOTAL: u8 = 2;

/// Streak scan bound: days checked backward from today.
const STREAK_LOOKBACK_DAYS: i64 = 30;

/// Consecutive good days ending today, capped at the 30-day scan bound.
///
/// A day with an entry is good when its intensity sum is <= 2; a worse entry
/// stops the walk. A missing entry for today yields 0, while missing entries
/// for past days are skipped leniently without breaking the walk. That
/// asymmetry is the shipped behavior, preserved deliberately (see DESIGN.md).
pub fn streak(entries: &[SymptomEntry], today: NaiveDate) -> u32 {
    let mut count = 0;

    for offset in 0..STREAK_LOOKBACK_DAYS {
        let day = today - Duration::days(offset);
        match entries.iter().find(|e| e.date == day) {
            Some(entry) => {
                if entry.symptoms.total() <= GOOD_DAY_MAX_TOTAL {
                    count += 1;
                } else {
                    break;
                }
            }
            None => {
                if day == today {
                    break;
                }
                // Past gap: lenient, keep walking without counting the day
            }
        }
    }

    count
}

/// Encouragement banner for a streak length.
pub fn streak_message(streak: u32) -> &'static str {
    match streak {
        0 => "Start your wellness journey!",
        1 => "Great start!",
        2..=6 => "Building momentum!",
        7..=13 => "You're on a roll!",
        14..=29 => "Fantastic streak!",
        _ => "Incredible dedication!",
    }
}

/// Per-symptom count of entries where that symptom's intensity is above 0,
/// in canonical symptom order. All six symptoms are always present.
pub fn symptom_frequency(entries: &[SymptomEntry]) -> Vec<(Symptom, usize)> {
    Symptom::ALL
        .iter()
        .map(|&symptom| {
            let count = entries
                .iter()
                .filter(|e| e.symptoms.get(symptom) > 0)
                .count();
            (symptom, count)
        })
        .collect()
}

/// The most frequently recorded symptom, or `None` when every frequency is 0.
/// Ties break toward the earlier symptom in canonical order.
pub fn most_common_symptom(entries: &[SymptomEntry]) -> Option<(Symptom, usize)> {
    let mut best: Option<(Symptom, usize)> = None;

    for (symptom, count) in symptom_frequency(entries) {
        let better = match best {
            Some((_, best_count)) => count > best_count,
            None => true,
        };
        if better {
            best = Some((symptom, count));
        }
    }

    best.filter(|&(_, count)| count > 0)
}

/// Entries where every symptom intensity is exactly 0.
pub fn symptom_free_days(entries: &[SymptomEntry]) -> usize {
    entries.iter().filter(|e| e.symptoms.is_clear()).count()
}

/// Entries with at least one symptom above 0.
pub fn symptom_days(entries: &[SymptomEntry]) -> usize {
    entries.len() - symptom_free_days(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use symlog_store::SymptomEntry;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn entry_with_total(date_str: &str, total: u8) -> SymptomEntry {
        let mut entry = SymptomEntry::new(date(date_str), 0);
        // Spread the total over fever then headache; max here is 6
        entry.symptoms.set(Symptom::Fever, total.min(3));
        entry
            .symptoms
            .set(Symptom::Headache, total.saturating_sub(3));
        entry
    }

    #[test]
    fn test_streak_zero_without_today_entry() {
        let entries = vec![
            entry_with_total("2024-01-08", 0),
            entry_with_total("2024-01-09", 1),
        ];
        assert_eq!(streak(&entries, date("2024-01-10")), 0);
    }

    #[test]
    fn test_streak_counts_consecutive_good_days() {
        let entries = vec![
            entry_with_total("2024-01-07", 1),
            entry_with_total("2024-01-08", 2),
            entry_with_total("2024-01-09", 0),
            entry_with_total("2024-01-10", 2),
        ];
        assert_eq!(streak(&entries, date("2024-01-10")), 4);
    }

    #[test]
    fn test_streak_broken_by_bad_day() {
        let entries = vec![
            entry_with_total("2024-01-07", 0),
            entry_with_total("2024-01-08", 3),
            entry_with_total("2024-01-09", 1),
            entry_with_total("2024-01-10", 0),
        ];
        // Walk stops at the 8th; the 9th and 10th still count
        assert_eq!(streak(&entries, date("2024-01-10")), 2);
    }

    #[test]
    fn test_streak_lenient_for_past_gaps() {
        let entries = vec![
            entry_with_total("2024-01-05", 0),
            entry_with_total("2024-01-10", 1),
        ];
        // Gap days between the two entries are walked through but not
        // counted; only the recorded good days contribute
        assert_eq!(streak(&entries, date("2024-01-10")), 2);
    }

    #[test]
    fn test_streak_capped_at_thirty() {
        let entries: Vec<SymptomEntry> = (1..=31)
            .map(|day| entry_with_total(&format!("2024-01-{day:02}"), 0))
            .collect();
        assert_eq!(streak(&entries, date("2024-01-31")), 30);
    }

    #[test]
    fn test_streak_empty_collection() {
        assert_eq!(streak(&[], date("2024-01-10")), 0);
    }

    #[test]
    fn test_streak_message_bands() {
        assert_eq!(streak_message(0), "Start your wellness journey!");
        assert_eq!(streak_message(1), "Great start!");
        assert_eq!(streak_message(6), "Building momentum!");
        assert_eq!(streak_message(7), "You're on a roll!");
        assert_eq!(streak_message(29), "Fantastic streak!");
        assert_eq!(streak_message(30), "Incredible dedication!");
    }

    #[test]
    fn test_frequency_empty_collection_has_all_keys() {
        let freq = symptom_frequency(&[]);
        assert_eq!(freq.len(), 6);
        assert!(freq.iter().all(|&(_, count)| count == 0));
    }

    #[test]
    fn test_frequency_counts_days_not_intensity() {
        let mut a = SymptomEntry::new(date("2024-01-01"), 0);
        a.symptoms.set(Symptom::Cough, 3);
        let mut b = SymptomEntry::new(date("2024-01-02"), 0);
        b.symptoms.set(Symptom::Cough, 1);
        b.symptoms.set(Symptom::Fever, 2);

        let freq = symptom_frequency(&[a, b]);
        let get = |s: Symptom| freq.iter().find(|&&(k, _)| k == s).unwrap().1;
        assert_eq!(get(Symptom::Cough), 2);
        assert_eq!(get(Symptom::Fever), 1);
        assert_eq!(get(Symptom::Nausea), 0);
    }

    #[test]
    fn test_most_common_none_when_all_zero() {
        let entries = vec![SymptomEntry::new(date("2024-01-01"), 0)];
        assert_eq!(most_common_symptom(&entries), None);
        assert_eq!(most_common_symptom(&[]), None);
    }

    #[test]
    fn test_most_common_ties_break_by_order() {
        let mut a = SymptomEntry::new(date("2024-01-01"), 0);
        a.symptoms.set(Symptom::Headache, 1);
        a.symptoms.set(Symptom::Cough, 1);

        // Headache precedes Cough in canonical order
        assert_eq!(most_common_symptom(&[a]), Some((Symptom::Headache, 1)));
    }

    #[test]
    fn test_symptom_free_days() {
        let clear = SymptomEntry::new(date("2024-01-01"), 0);
        let mut sick = SymptomEntry::new(date("2024-01-02"), 0);
        sick.symptoms.set(Symptom::Fatigue, 1);

        let entries = vec![clear, sick];
        assert_eq!(symptom_free_days(&entries), 1);
        assert_eq!(symptom_days(&entries), 1);
    }
}
