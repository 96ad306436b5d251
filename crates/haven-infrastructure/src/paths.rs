//! Unified path management for Haven files.
//!
//! Every file location is resolved here so the CLI's `--data-dir` override
//! and tests can relocate the whole tree at once.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/haven/              # Config directory
//! └── config.toml               # Application configuration
//!
//! ~/.local/share/haven/         # Data directory
//! ├── chat_history.json
//! ├── mood_entries.json
//! ├── journal_draft.json
//! ├── user_settings.json
//! ├── subscription.json
//! └── logs/
//!     └── haven.log.YYYY-MM-DD
//! ```
//!
//! With a base override, config and data both live directly under the base.

use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "haven";

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Cannot find home directory")]
    HomeDirNotFound,
}

/// Files and directories managed by Haven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    Config,
    ChatHistory,
    MoodEntries,
    JournalDraft,
    Settings,
    Subscription,
    Logs,
}

impl ServiceType {
    fn file_name(&self) -> Option<&'static str> {
        match self {
            ServiceType::Config => Some("config.toml"),
            ServiceType::ChatHistory => Some("chat_history.json"),
            ServiceType::MoodEntries => Some("mood_entries.json"),
            ServiceType::JournalDraft => Some("journal_draft.json"),
            ServiceType::Settings => Some("user_settings.json"),
            ServiceType::Subscription => Some("subscription.json"),
            ServiceType::Logs => None,
        }
    }
}

/// A resolved location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathType {
    File(PathBuf),
    Dir(PathBuf),
}

impl PathType {
    pub fn into_path_buf(self) -> PathBuf {
        match self {
            PathType::File(p) | PathType::Dir(p) => p,
        }
    }

    pub fn as_path(&self) -> &Path {
        match self {
            PathType::File(p) | PathType::Dir(p) => p,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HavenPaths {
    base: Option<PathBuf>,
}

impl HavenPaths {
    /// Creates a resolver. `Some(base)` places everything under `base`.
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("logs"))
    }

    pub fn get_path(&self, service: ServiceType) -> Result<PathType, PathError> {
        match (service, service.file_name()) {
            (ServiceType::Logs, _) | (_, None) => Ok(PathType::Dir(self.logs_dir()?)),
            (ServiceType::Config, Some(name)) => Ok(PathType::File(self.config_dir()?.join(name))),
            (_, Some(name)) => Ok(PathType::File(self.data_dir()?.join(name))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_override_places_everything_under_base() {
        let paths = HavenPaths::new(Some(Path::new("/tmp/haven-test")));
        assert_eq!(
            paths.get_path(ServiceType::Config).unwrap(),
            PathType::File(PathBuf::from("/tmp/haven-test/config.toml"))
        );
        assert_eq!(
            paths.get_path(ServiceType::MoodEntries).unwrap().into_path_buf(),
            PathBuf::from("/tmp/haven-test/mood_entries.json")
        );
        assert_eq!(
            paths.get_path(ServiceType::Logs).unwrap(),
            PathType::Dir(PathBuf::from("/tmp/haven-test/logs"))
        );
    }

    #[test]
    fn test_default_dirs_end_with_app_name() {
        let paths = HavenPaths::new(None);
        if let Ok(dir) = paths.data_dir() {
            assert!(dir.ends_with("haven"));
        }
    }
}
