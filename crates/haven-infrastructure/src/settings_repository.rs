//! Settings repository implementation.
//!
//! File location: `{data_dir}/user_settings.json`

use async_trait::async_trait;
use std::path::PathBuf;

use haven_core::HavenError;
use haven_core::error::Result;
use haven_core::settings::{SettingsRepository, UserSettings};

use crate::dto::UserSettingsSchema;
use crate::paths::{HavenPaths, ServiceType};
use crate::storage::VersionedDocument;

pub struct FileSettingsRepository {
    document: VersionedDocument<UserSettingsSchema>,
}

impl FileSettingsRepository {
    pub fn new(paths: &HavenPaths) -> Result<Self> {
        let path = paths
            .get_path(ServiceType::Settings)
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
impl SettingsRepository for FileSettingsRepository {
    /// Missing or unreadable settings yield the defaults.
    async fn load(&self) -> Result<UserSettings> {
        match self.document.load().await {
            Ok(settings) => Ok(settings.unwrap_or_default()),
            Err(e) if e.is_corrupt_data() => {
                tracing::warn!("settings unreadable, using defaults: {}", e);
                Ok(UserSettings::default())
            }
            Err(e) => Err(e),
        }
    }

    async fn save(&self, settings: &UserSettings) -> Result<()> {
        self.document.save(settings).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haven_core::settings::{Currency, Language, Region};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_defaults_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSettingsRepository::with_path(temp_dir.path().join("user_settings.json"));
        assert_eq!(repo.load().await.unwrap(), UserSettings::default());
    }

    #[tokio::test]
    async fn test_round_trip_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSettingsRepository::with_path(temp_dir.path().join("user_settings.json"));

        for settings in [
            UserSettings::default(),
            UserSettings::default().with_region(Region::Au).with_language(Language::De),
            UserSettings::default()
                .with_region(Region::In)
                .with_currency(Currency::Eur)
                .with_sound_toggled(),
        ] {
            repo.save(&settings).await.unwrap();
            assert_eq!(repo.load().await.unwrap(), settings);
        }
    }

    #[tokio::test]
    async fn test_garbage_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("user_settings.json");
        std::fs::write(&path, "region = IN").unwrap();

        let repo = FileSettingsRepository::with_path(path);
        assert_eq!(repo.load().await.unwrap(), UserSettings::default());
    }
}
