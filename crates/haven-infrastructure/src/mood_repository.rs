//! Mood log repository implementation.
//!
//! File location: `{data_dir}/mood_entries.json`

use async_trait::async_trait;
use std::path::PathBuf;

use haven_core::HavenError;
use haven_core::error::Result;
use haven_core::mood::{MoodLog, MoodRepository};

use crate::dto::MoodLogSchema;
use crate::paths::{HavenPaths, ServiceType};
use crate::storage::VersionedDocument;

pub struct FileMoodRepository {
    document: VersionedDocument<MoodLogSchema>,
}

impl FileMoodRepository {
    pub fn new(paths: &HavenPaths) -> Result<Self> {
        let path = paths
            .get_path(ServiceType::MoodEntries)
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
impl MoodRepository for FileMoodRepository {
    async fn load(&self) -> Result<MoodLog> {
        Ok(self.document.load().await?.unwrap_or_default())
    }

    async fn save(&self, log: &MoodLog) -> Result<()> {
        self.document.save(log).await
    }

    async fn clear(&self) -> Result<()> {
        self.document.remove().await.map(|_| ())
    }
}
