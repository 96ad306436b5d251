//! User settings domain model.
//!
//! Region, currency and language are closed sets. They serialize with the
//! short codes used in persisted documents (`"IN"`, `"INR"`, `"hi"`).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Region the user lives in. Drives helplines and the default currency.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Region {
    Global,
    In,
    Us,
    Uk,
    Ca,
    Au,
}

impl Region {
    /// Human readable region name.
    pub fn label(&self) -> &'static str {
        match self {
            Region::Global => "Global / Other",
            Region::In => "India",
            Region::Us => "United States",
            Region::Uk => "United Kingdom",
            Region::Ca => "Canada",
            Region::Au => "Australia",
        }
    }

    /// Currency that goes with this region by default.
    pub fn currency(&self) -> Currency {
        match self {
            Region::Global | Region::Us => Currency::Usd,
            Region::In => Currency::Inr,
            Region::Uk => Currency::Gbp,
            Region::Ca => Currency::Cad,
            Region::Au => Currency::Aud,
        }
    }

    /// All regions in display order. `Global` comes first.
    pub fn all() -> impl Iterator<Item = Region> {
        Region::iter()
    }
}

/// Display currency for subscription prices.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Currency {
    Usd,
    Inr,
    Gbp,
    Eur,
    Cad,
    Aud,
}

impl Currency {
    /// Symbol shown in front of amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Inr => "₹",
            Currency::Gbp => "£",
            Currency::Eur => "€",
            Currency::Cad => "CA$",
            Currency::Aud => "A$",
        }
    }
}

/// Conversation language for the companion and canned texts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    En,
    Hi,
    Es,
    Fr,
    De,
}

impl Language {
    /// Native name of the language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिन्दी",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::De => "Deutsch",
        }
    }

    /// English name, used when instructing the model.
    pub fn english_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Es => "Spanish",
            Language::Fr => "French",
            Language::De => "German",
        }
    }
}

/// Singleton user preferences, overwritten wholesale on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub region: Region,
    pub currency: Currency,
    pub language: Language,
    #[serde(default = "default_sound_enabled")]
    pub sound_enabled: bool,
}

fn default_sound_enabled() -> bool {
    true
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            region: Region::Global,
            currency: Currency::Usd,
            language: Language::En,
            sound_enabled: default_sound_enabled(),
        }
    }
}

impl UserSettings {
    /// Switches region and snaps the currency to the region's currency.
    ///
    /// The user may override the currency afterwards.
    pub fn with_region(self, region: Region) -> Self {
        Self {
            region,
            currency: region.currency(),
            ..self
        }
    }

    pub fn with_currency(self, currency: Currency) -> Self {
        Self { currency, ..self }
    }

    pub fn with_language(self, language: Language) -> Self {
        Self { language, ..self }
    }

    pub fn with_sound_toggled(self) -> Self {
        Self {
            sound_enabled: !self.sound_enabled,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_region_change_updates_currency() {
        let settings = UserSettings::default().with_region(Region::In);
        assert_eq!(settings.region, Region::In);
        assert_eq!(settings.currency, Currency::Inr);
        assert_eq!(settings.language, Language::En);
    }

    #[test]
    fn test_currency_override_after_region() {
        let settings = UserSettings::default()
            .with_region(Region::Uk)
            .with_currency(Currency::Eur);
        assert_eq!(settings.region, Region::Uk);
        assert_eq!(settings.currency, Currency::Eur);
    }

    #[test]
    fn test_codes_parse_case_insensitively() {
        assert_eq!(Region::from_str("in").unwrap(), Region::In);
        assert_eq!(Currency::from_str("eur").unwrap(), Currency::Eur);
        assert_eq!(Language::from_str("DE").unwrap(), Language::De);
        assert_eq!(Region::Global.to_string(), "GLOBAL");
        assert_eq!(Language::Hi.to_string(), "hi");
    }

    #[test]
    fn test_settings_json_shape() {
        let json = serde_json::to_value(UserSettings::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "region": "GLOBAL",
                "currency": "USD",
                "language": "en",
                "soundEnabled": true
            })
        );
    }

    #[test]
    fn test_missing_sound_flag_defaults_on() {
        let settings: UserSettings =
            serde_json::from_str(r#"{"region":"US","currency":"USD","language":"es"}"#).unwrap();
        assert!(settings.sound_enabled);
        assert_eq!(settings.language, Language::Es);
    }
}
