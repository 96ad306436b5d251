//! User settings DTOs and migrations.
//!
//! ## Version History
//! - **1.0.0**: region, currency, language
//! - **1.1.0**: Added `soundEnabled`

use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, MigratesTo, Migrator, Versioned};

use haven_core::settings::UserSettings;

use crate::storage::DocumentSchema;

/// Settings DTO V1.0.0
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct UserSettingsV1_0_0 {
    pub region: String,
    pub currency: String,
    pub language: String,
}

/// Settings DTO V1.1.0
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.1.0")]
#[serde(rename_all = "camelCase")]
pub struct UserSettingsV1_1_0 {
    pub region: String,
    pub currency: String,
    pub language: String,
    #[serde(default = "default_sound_enabled")]
    pub sound_enabled: bool,
}

fn default_sound_enabled() -> bool {
    true
}

/// Migration from V1.0.0 to V1.1.0. Sound starts enabled.
impl MigratesTo<UserSettingsV1_1_0> for UserSettingsV1_0_0 {
    fn migrate(self) -> UserSettingsV1_1_0 {
        UserSettingsV1_1_0 {
            region: self.region,
            currency: self.currency,
            language: self.language,
            sound_enabled: default_sound_enabled(),
        }
    }
}

/// Unknown codes fall back to the default for that field.
impl IntoDomain<UserSettings> for UserSettingsV1_1_0 {
    fn into_domain(self) -> UserSettings {
        let defaults = UserSettings::default();
        UserSettings {
            region: self.region.parse().unwrap_or(defaults.region),
            currency: self.currency.parse().unwrap_or(defaults.currency),
            language: self.language.parse().unwrap_or(defaults.language),
            sound_enabled: self.sound_enabled,
        }
    }
}

impl FromDomain<UserSettings> for UserSettingsV1_1_0 {
    fn from_domain(settings: UserSettings) -> Self {
        UserSettingsV1_1_0 {
            region: settings.region.to_string(),
            currency: settings.currency.to_string(),
            language: settings.language.to_string(),
            sound_enabled: settings.sound_enabled,
        }
    }
}

/// Creates the Migrator for user settings.
///
/// # Migration Path
///
/// - V1.0.0 → V1.1.0: Adds `soundEnabled`, on by default
/// - V1.1.0 → UserSettings
pub fn create_user_settings_migrator() -> Migrator {
    let mut migrator = Migrator::builder().build();
    let path = Migrator::define(UserSettingsSchema::ENTITY)
        .from::<UserSettingsV1_0_0>()
        .step::<UserSettingsV1_1_0>()
        .into_with_save::<UserSettings>();
    migrator
        .register(path)
        .expect("Failed to register user_settings migration path");
    migrator
}

pub struct UserSettingsSchema;

impl DocumentSchema for UserSettingsSchema {
    type Domain = UserSettings;
    const ENTITY: &'static str = "user_settings";

    fn migrator() -> Migrator {
        create_user_settings_migrator()
    }
}
