pub mod backup;
pub mod chat_history_repository;
pub mod config_service;
pub mod dto;
pub mod journal_repository;
pub mod mood_repository;
pub mod paths;
pub mod settings_repository;
pub mod storage;
pub mod subscription_repository;

pub use crate::backup::{BackupWriter, backup_file_name};
pub use crate::chat_history_repository::FileChatHistoryRepository;
pub use crate::config_service::ConfigService;
pub use crate::journal_repository::FileJournalRepository;
pub use crate::mood_repository::FileMoodRepository;
pub use crate::paths::{HavenPaths, PathError, PathType, ServiceType};
pub use crate::settings_repository::FileSettingsRepository;
pub use crate::subscription_repository::FileSubscriptionRepository;
