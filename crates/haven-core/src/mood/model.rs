//! Mood entry and the capped mood log.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::Clock;
use crate::error::{HavenError, Result};

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

/// Label shown next to each score on the check-in scale.
pub fn score_label(score: u8) -> &'static str {
    match score {
        1 => "Rough",
        2 => "Low",
        3 => "Okay",
        4 => "Good",
        5 => "Great",
        _ => "Unknown",
    }
}

/// One daily check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: String,
    pub score: u8,
    #[serde(default)]
    pub note: String,
    pub recorded_at: DateTime<Utc>,
}

impl MoodEntry {
    /// Creates an entry, rejecting scores outside `1..=5`.
    pub fn new(score: u8, note: impl Into<String>, recorded_at: DateTime<Utc>) -> Result<Self> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(HavenError::invalid_input(format!(
                "mood score must be between {MIN_SCORE} and {MAX_SCORE}, got {score}"
            )));
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            score,
            note: note.into().trim().to_string(),
            recorded_at,
        })
    }
}

/// The persisted list of mood entries, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoodLog {
    pub entries: Vec<MoodEntry>,
}

impl MoodLog {
    pub fn new(entries: Vec<MoodEntry>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The entry recorded on `day`, if any.
    pub fn entry_on(&self, day: NaiveDate, clock: &dyn Clock) -> Option<&MoodEntry> {
        self.entries
            .iter()
            .find(|e| clock.day_of(&e.recorded_at) == day)
    }

    pub fn has_logged_today(&self, clock: &dyn Clock) -> bool {
        self.entry_on(clock.today(), clock).is_some()
    }

    /// Appends an entry and drops the oldest ones beyond `max_entries`.
    ///
    /// Fails with `AlreadyCheckedIn` when the entry's day already has one.
    pub fn record(&mut self, entry: MoodEntry, max_entries: usize, clock: &dyn Clock) -> Result<()> {
        let day = clock.day_of(&entry.recorded_at);
        if self.entry_on(day, clock).is_some() {
            return Err(HavenError::AlreadyCheckedIn { date: day });
        }

        self.entries.push(entry);
        if self.entries.len() > max_entries {
            let excess = self.entries.len() - max_entries;
            self.entries.drain(..excess);
        }
        Ok(())
    }
}
