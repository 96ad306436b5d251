//! Journal draft domain module.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The single free-text journal draft.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalDraft {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl JournalDraft {
    pub fn new(text: impl Into<String>, updated_at: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            updated_at: Some(updated_at),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

#[async_trait]
pub trait JournalRepository: Send + Sync {
    /// Returns the stored draft, or `None` when there is none.
    async fn load(&self) -> Result<Option<JournalDraft>>;

    async fn save(&self, draft: &JournalDraft) -> Result<()>;

    async fn clear(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        let draft = JournalDraft::new("  grateful for\nthe rain  ", Utc::now());
        assert_eq!(draft.word_count(), 4);
        assert!(!draft.is_empty());
        assert!(JournalDraft::default().is_empty());
    }
}
