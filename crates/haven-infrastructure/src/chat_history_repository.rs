//! Chat history repository implementation.
//!
//! File location: `{data_dir}/chat_history.json`

use async_trait::async_trait;
use std::path::PathBuf;

use haven_core::HavenError;
use haven_core::chat::{ChatHistory, ChatHistoryRepository};
use haven_core::error::Result;

use crate::dto::ChatHistorySchema;
use crate::paths::{HavenPaths, ServiceType};
use crate::storage::VersionedDocument;

pub struct FileChatHistoryRepository {
    document: VersionedDocument<ChatHistorySchema>,
}

impl FileChatHistoryRepository {
    pub fn new(paths: &HavenPaths) -> Result<Self> {
        let path = paths
            .get_path(ServiceType::ChatHistory)
            .map_err(|e| HavenError::config(e.to_string()))?;
        Ok(Self::with_path(path.into_path_buf()))
    }

    /// Creates a repository at an explicit path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            document: VersionedDocument::new(path),
        }
    }
}

#[async_trait]
impl ChatHistoryRepository for FileChatHistoryRepository {
    async fn load(&self) -> Result<ChatHistory> {
        Ok(self.document.load().await?.unwrap_or_default())
    }

    async fn save(&self, history: &ChatHistory) -> Result<()> {
        self.document.save(history).await
    }

    async fn clear(&self) -> Result<()> {
        self.document.remove().await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use haven_core::chat::ChatMessage;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_empty_when_not_exists() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileChatHistoryRepository::with_path(temp_dir.path().join("chat_history.json"));
        assert!(repo.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_load_and_clear() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileChatHistoryRepository::with_path(temp_dir.path().join("chat_history.json"));

        let mut history = ChatHistory::with_greeting(ChatMessage::greeting("hello", Utc::now()));
        history.push(ChatMessage::user("hi", Utc::now()));
        history.push(ChatMessage::error("offline", Utc::now()));
        repo.save(&history).await.unwrap();

        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded.len(), 3);
        assert!(loaded.messages[0].is_greeting());
        assert!(loaded.messages[2].is_error);

        repo.clear().await.unwrap();
        assert!(repo.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("chat_history.json");
        std::fs::write(&path, "{not json").unwrap();

        let repo = FileChatHistoryRepository::with_path(path);
        assert!(repo.load().await.unwrap_err().is_corrupt_data());
    }
}
