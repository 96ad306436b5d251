//! Settings repository trait.

use async_trait::async_trait;

use super::model::UserSettings;
use crate::error::Result;

/// Repository for the user settings singleton.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Loads the settings. Returns defaults if none are stored.
    async fn load(&self) -> Result<UserSettings>;

    /// Replaces the stored settings.
    async fn save(&self, settings: &UserSettings) -> Result<()>;
}
