//! Chat history repository trait.

use async_trait::async_trait;

use super::message::ChatHistory;
use crate::error::Result;

/// Persistence for the single conversation.
#[async_trait]
pub trait ChatHistoryRepository: Send + Sync {
    /// Loads the stored history. An absent store yields an empty history.
    async fn load(&self) -> Result<ChatHistory>;

    /// Replaces the stored history as a whole.
    async fn save(&self, history: &ChatHistory) -> Result<()>;

    /// Removes the stored history.
    async fn clear(&self) -> Result<()>;
}
