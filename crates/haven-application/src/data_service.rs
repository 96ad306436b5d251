//! Personal data export and reset.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use haven_core::Clock;
use haven_core::chat::{ChatHistoryRepository, ChatMessage};
use haven_core::error::Result;
use haven_core::journal::JournalRepository;
use haven_core::mood::{MoodEntry, MoodRepository};
use serde::Serialize;

/// Everything the user wrote, in one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupBundle {
    pub date: DateTime<Utc>,
    pub chat_history: Vec<ChatMessage>,
    pub mood_entries: Vec<MoodEntry>,
    pub journal_draft: String,
}

impl BackupBundle {
    /// UTC calendar date used in the backup file name.
    pub fn file_date(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

pub struct DataService {
    chat_repository: Arc<dyn ChatHistoryRepository>,
    mood_repository: Arc<dyn MoodRepository>,
    journal_repository: Arc<dyn JournalRepository>,
    clock: Arc<dyn Clock>,
}

impl DataService {
    pub fn new(
        chat_repository: Arc<dyn ChatHistoryRepository>,
        mood_repository: Arc<dyn MoodRepository>,
        journal_repository: Arc<dyn JournalRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            chat_repository,
            mood_repository,
            journal_repository,
            clock,
        }
    }

    /// Collects the chat history, mood entries and journal draft.
    ///
    /// An unreadable store is exported as empty so the rest still gets out.
    pub async fn export(&self) -> Result<BackupBundle> {
        let chat = readable_or_empty("chat history", self.chat_repository.load().await)?;
        let mood = readable_or_empty("mood entries", self.mood_repository.load().await)?;
        let journal = readable_or_empty("journal draft", self.journal_repository.load().await)?;

        Ok(BackupBundle {
            date: self.clock.now(),
            chat_history: chat.messages,
            mood_entries: mood.entries,
            journal_draft: journal.map(|draft| draft.text).unwrap_or_default(),
        })
    }

    /// Deletes chat history, mood entries and the journal draft.
    ///
    /// Settings and the subscription are kept.
    pub async fn reset(&self) -> Result<()> {
        self.chat_repository.clear().await?;
        self.mood_repository.clear().await?;
        self.journal_repository.clear().await?;
        tracing::warn!("personal data reset");
        Ok(())
    }
}

fn readable_or_empty<T: Default>(store: &str, loaded: Result<T>) -> Result<T> {
    match loaded {
        Err(e) if e.is_corrupt_data() => {
            tracing::warn!("{} unreadable, exporting it empty: {}", store, e);
            Ok(T::default())
        }
        other => other,
    }
}
