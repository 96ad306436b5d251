//! Mood log DTOs and migrations.
//!
//! ## Version History
//! - **1.0.0**: Entries carry a `date` string written in local time,
//!   sometimes without an offset
//! - **1.1.0**: Entries carry `recordedAt` as a UTC instant

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, MigratesTo, Migrator, Versioned};

use haven_core::mood::{MoodEntry, MoodLog};

use crate::storage::DocumentSchema;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntryV1_0_0 {
    pub id: String,
    pub score: u8,
    #[serde(default)]
    pub note: String,
    pub date: String,
}

/// Mood log DTO V1.0.0
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct MoodLogV1_0_0 {
    #[serde(default)]
    pub entries: Vec<MoodEntryV1_0_0>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntryV1_1_0 {
    pub id: String,
    pub score: u8,
    #[serde(default)]
    pub note: String,
    pub recorded_at: DateTime<Utc>,
}

/// Mood log DTO V1.1.0
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.1.0")]
pub struct MoodLogV1_1_0 {
    #[serde(default)]
    pub entries: Vec<MoodEntryV1_1_0>,
}

fn parse_legacy_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Migration from MoodLogV1_0_0 to MoodLogV1_1_0.
/// Entries whose date cannot be read are dropped, since the day gate depends on it.
impl MigratesTo<MoodLogV1_1_0> for MoodLogV1_0_0 {
    fn migrate(self) -> MoodLogV1_1_0 {
        let entries = self
            .entries
            .into_iter()
            .filter_map(|entry| match parse_legacy_date(&entry.date) {
                Some(recorded_at) => Some(MoodEntryV1_1_0 {
                    id: entry.id,
                    score: entry.score,
                    note: entry.note,
                    recorded_at,
                }),
                None => {
                    tracing::warn!("dropping mood entry {} with unreadable date", entry.id);
                    None
                }
            })
            .collect();
        MoodLogV1_1_0 { entries }
    }
}

impl IntoDomain<MoodLog> for MoodLogV1_1_0 {
    fn into_domain(self) -> MoodLog {
        MoodLog::new(
            self.entries
                .into_iter()
                .map(|e| MoodEntry {
                    id: e.id,
                    score: e.score.clamp(1, 5),
                    note: e.note,
                    recorded_at: e.recorded_at,
                })
                .collect(),
        )
    }
}

impl FromDomain<MoodLog> for MoodLogV1_1_0 {
    fn from_domain(log: MoodLog) -> Self {
        MoodLogV1_1_0 {
            entries: log
                .entries
                .into_iter()
                .map(|e| MoodEntryV1_1_0 {
                    id: e.id,
                    score: e.score,
                    note: e.note,
                    recorded_at: e.recorded_at,
                })
                .collect(),
        }
    }
}

/// Creates the Migrator for the mood log.
///
/// # Migration Path
///
/// - V1.0.0 → V1.1.0: Local `date` strings become UTC `recordedAt`
/// - V1.1.0 → MoodLog
pub fn create_mood_log_migrator() -> Migrator {
    let mut migrator = Migrator::builder().build();
    let path = Migrator::define(MoodLogSchema::ENTITY)
        .from::<MoodLogV1_0_0>()
        .step::<MoodLogV1_1_0>()
        .into_with_save::<MoodLog>();
    migrator
        .register(path)
        .expect("Failed to register mood_entries migration path");
    migrator
}

pub struct MoodLogSchema;

impl DocumentSchema for MoodLogSchema {
    type Domain = MoodLog;
    const ENTITY: &'static str = "mood_entries";

    fn migrator() -> Migrator {
        create_mood_log_migrator()
    }
}
