//! Use cases that orchestrate the Haven domain over its repositories and
//! outbound collaborators.
//!
//! Every service takes its dependencies as `Arc<dyn Trait>` so the CLI can
//! wire file-backed stores while tests wire in-memory ones.

pub mod chat_service;
pub mod data_service;
pub mod journal_service;
pub mod mood_service;
pub mod settings_service;
pub mod subscription_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use chat_service::{ChatOutcome, ChatService};
pub use data_service::{BackupBundle, DataService};
pub use journal_service::JournalService;
pub use mood_service::{InsightView, MoodService};
pub use settings_service::SettingsService;
pub use subscription_service::{PremiumStatus, SubscriptionService};
