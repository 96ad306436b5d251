//! Application configuration (`config.toml`).

use serde::{Deserialize, Serialize};

/// Default Gemini model for chat.
pub const DEFAULT_CHAT_MODEL: &str = "gemini-2.5-flash";

/// Environment variable that overrides `chat.api_key`.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub mood: MoodConfig,
    #[serde(default)]
    pub audio: AudioConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ChatConfig {
    /// Messages a free user may send per calendar day.
    #[serde(default = "default_free_daily_limit")]
    pub free_daily_limit: u32,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_free_daily_limit() -> u32 {
    5
}

fn default_model() -> String {
    DEFAULT_CHAT_MODEL.to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    300
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            free_daily_limit: default_free_daily_limit(),
            model: default_model(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            api_key: None,
        }
    }
}

impl ChatConfig {
    /// Resolves the API key, preferring the environment over the file.
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|key| !key.trim().is_empty()))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MoodConfig {
    /// Most recent entries kept; older ones are dropped.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    #[serde(default = "default_insight_window_days")]
    pub insight_window_days: u32,
    #[serde(default = "default_min_entries_for_insight")]
    pub min_entries_for_insight: usize,
}

fn default_max_entries() -> usize {
    14
}

fn default_insight_window_days() -> u32 {
    7
}

fn default_min_entries_for_insight() -> usize {
    2
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            insight_window_days: default_insight_window_days(),
            min_entries_for_insight: default_min_entries_for_insight(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AudioConfig {
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Master volume in `[0, 1]`.
    #[serde(default = "default_volume")]
    pub volume: f32,
}

fn default_sample_rate() -> u32 {
    44_100
}

fn default_volume() -> f32 {
    0.8
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            volume: default_volume(),
        }
    }
}
