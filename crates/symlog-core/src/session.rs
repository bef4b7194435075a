//! Journal session: selected date, active tab, and mutation routing
//!
//! The session is the single writer. It owns the store, builds or updates
//! the selected date's entry on each mutation, and hands aggregation
//! functions a borrowed snapshot via `entries()`.

use chrono::{Duration, NaiveDate, Utc};
use tracing::debug;

use symlog_store::{EntryStore, Mood, StoreError, Symptom, SymptomEntry};

/// Active view tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Log,
    Trends,
    Export,
}

pub struct JournalSession {
    store: EntryStore,
    today: NaiveDate,
    selected: NaiveDate,
    tab: Tab,
}

impl JournalSession {
    pub fn new(store: EntryStore, today: NaiveDate) -> Self {
        Self {
            store,
            today,
            selected: today,
            tab: Tab::default(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Jump to an arbitrary date.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected = date;
    }

    pub fn prev_day(&mut self) {
        self.selected -= Duration::days(1);
    }

    /// Move forward one day. Refuses to move past today and reports whether
    /// the move happened.
    pub fn next_day(&mut self) -> bool {
        if self.selected >= self.today {
            return false;
        }
        self.selected += Duration::days(1);
        true
    }

    pub fn entries(&self) -> &[SymptomEntry] {
        self.store.all()
    }

    pub fn selected_entry(&self) -> Option<&SymptomEntry> {
        self.store.entry_for(self.selected)
    }

    /// Record one symptom's intensity for the selected date. Levels are
    /// clamped into 0..=3 by the scores setter.
    pub fn set_intensity(&mut self, symptom: Symptom, level: u8) -> Result<(), StoreError> {
        let mut entry = self.working_entry();
        entry.symptoms.set(symptom, level);
        self.commit(entry)
    }

    pub fn set_mood(&mut self, mood: Mood) -> Result<(), StoreError> {
        let mut entry = self.working_entry();
        entry.mood = Some(mood);
        self.commit(entry)
    }

    pub fn set_notes(&mut self, notes: &str) -> Result<(), StoreError> {
        let mut entry = self.working_entry();
        entry.notes = notes.to_string();
        self.commit(entry)
    }

    /// One-tap "feeling good" entry: all intensities zero, happy mood,
    /// canned note.
    pub fn quick_log(&mut self) -> Result<(), StoreError> {
        let mut entry = self.working_entry();
        entry.symptoms = Default::default();
        entry.mood = Some(Mood::Happy);
        entry.notes = "Feeling good today! 🌟".to_string();
        self.commit(entry)
    }

    /// Drop every entry. Confirmation is the caller's job.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.clear()
    }

    fn working_entry(&self) -> SymptomEntry {
        match self.selected_entry() {
            Some(entry) => entry.clone(),
            None => SymptomEntry::new(self.selected, now_millis()),
        }
    }

    fn commit(&mut self, mut entry: SymptomEntry) -> Result<(), StoreError> {
        entry.touch(now_millis());
        debug!(date = %entry.date, "recording entry");
        self.store.upsert(entry)
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
