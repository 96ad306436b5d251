//! Settings use case.

use std::sync::Arc;

use haven_core::error::Result;
use haven_core::settings::{Currency, Language, Region, SettingsRepository, UserSettings};

/// Reads and updates the user settings singleton.
///
/// Every change loads the current settings, applies one field and saves the
/// whole document back.
pub struct SettingsService {
    repository: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    /// Current settings. Unreadable storage yields defaults.
    pub async fn get(&self) -> UserSettings {
        self.repository.load().await.unwrap_or_else(|e| {
            tracing::warn!("using default settings: {}", e);
            UserSettings::default()
        })
    }

    /// Changes the region and snaps the currency to it.
    pub async fn set_region(&self, region: Region) -> Result<UserSettings> {
        self.update(|s| s.with_region(region)).await
    }

    pub async fn set_currency(&self, currency: Currency) -> Result<UserSettings> {
        self.update(|s| s.with_currency(currency)).await
    }

    pub async fn set_language(&self, language: Language) -> Result<UserSettings> {
        self.update(|s| s.with_language(language)).await
    }

    pub async fn toggle_sound(&self) -> Result<UserSettings> {
        self.update(UserSettings::with_sound_toggled).await
    }

    async fn update<F>(&self, change: F) -> Result<UserSettings>
    where
        F: FnOnce(UserSettings) -> UserSettings + Send,
    {
        let updated = change(self.get().await);
        self.repository.save(&updated).await?;
        tracing::info!(
            "settings updated: region={} currency={} language={} sound={}",
            updated.region,
            updated.currency,
            updated.language,
            updated.sound_enabled
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemorySettings;

    #[tokio::test]
    async fn test_region_switch_sets_currency_then_override() {
        let repository = Arc::new(MemorySettings::default());
        let service = SettingsService::new(repository.clone());

        let settings = service.set_region(Region::Au).await.unwrap();
        assert_eq!(settings.currency, Currency::Aud);

        service.set_currency(Currency::Eur).await.unwrap();
        let stored = repository.load().await.unwrap();
        assert_eq!(stored.region, Region::Au);
        assert_eq!(stored.currency, Currency::Eur);
    }

    #[tokio::test]
    async fn test_language_and_sound() {
        let service = SettingsService::new(Arc::new(MemorySettings::default()));
        assert!(service.get().await.sound_enabled);

        service.set_language(Language::Fr).await.unwrap();
        let settings = service.toggle_sound().await.unwrap();
        assert_eq!(settings.language, Language::Fr);
        assert!(!settings.sound_enabled);
    }
}
