//! Journal draft repository implementation.
//!
//! File location: `{data_dir}/journal_draft.json`

use async_trait::async_trait;
use std::path::PathBuf;

use haven_core::HavenError;
use haven_core::error::Result;
use haven_core::journal::{JournalDraft, JournalRepository};

use crate::dto::JournalDraftSchema;
use crate::paths::{HavenPaths, ServiceType};
use crate::storage::VersionedDocument;

pub struct FileJournalRepository {
    document: VersionedDocument<JournalDraftSchema>,
}

impl FileJournalRepository {
    pub fn new(paths: &HavenPaths) -> Result<Self> {
        let path = paths
            .get_path(ServiceType::JournalDraft)
            .map_err(|e| HavenError::config(e.to_string()))?;
        Ok(Self::with_path(path.into_path_buf()))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            document: VersionedDocument::new(path),
        }
    }
}

#[async_trait]
impl JournalRepository for FileJournalRepository {
    async fn load(&self) -> Result<Option<JournalDraft>> {
        self.document.load().await
    }

    async fn save(&self, draft: &JournalDraft) -> Result<()> {
        self.document.save(draft).await
    }

    async fn clear(&self) -> Result<()> {
        self.document.remove().await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_draft_lifecycle() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileJournalRepository::with_path(temp_dir.path().join("journal_draft.json"));
        assert!(repo.load().await.unwrap().is_none());

        let draft = JournalDraft::new("Dear diary", Utc::now());
        repo.save(&draft).await.unwrap();
        assert_eq!(repo.load().await.unwrap(), Some(draft));

        repo.clear().await.unwrap();
        assert!(repo.load().await.unwrap().is_none());
    }
}
