//! Mood log repository trait.

use async_trait::async_trait;

use super::model::MoodLog;
use crate::error::Result;

#[async_trait]
pub trait MoodRepository: Send + Sync {
    /// Loads all stored entries, oldest first. Empty when nothing is stored.
    async fn load(&self) -> Result<MoodLog>;

    async fn save(&self, log: &MoodLog) -> Result<()>;

    async fn clear(&self) -> Result<()>;
}
