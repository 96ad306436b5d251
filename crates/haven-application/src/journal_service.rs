//! Journal draft use case.

use std::sync::Arc;

use haven_core::Clock;
use haven_core::error::Result;
use haven_core::journal::{JournalDraft, JournalRepository};
use haven_core::library::random_journal_prompt;

pub struct JournalService {
    repository: Arc<dyn JournalRepository>,
    clock: Arc<dyn Clock>,
}

impl JournalService {
    pub fn new(repository: Arc<dyn JournalRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// The stored draft, or an empty one.
    pub async fn show(&self) -> Result<JournalDraft> {
        Ok(self.repository.load().await?.unwrap_or_default())
    }

    /// Replaces the draft. Blank text clears it instead.
    pub async fn write(&self, text: &str) -> Result<JournalDraft> {
        let draft = JournalDraft::new(text, self.clock.now());
        if draft.is_empty() {
            self.repository.clear().await?;
            return Ok(JournalDraft::default());
        }
        self.repository.save(&draft).await?;
        tracing::debug!("journal draft saved ({} words)", draft.word_count());
        Ok(draft)
    }

    pub async fn clear(&self) -> Result<()> {
        self.repository.clear().await
    }

    /// A random writing prompt.
    pub fn prompt(&self) -> &'static str {
        random_journal_prompt(&mut rand::thread_rng())
    }
}
