//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs represent the versioned schema of every stored document. They
//! are private to the infrastructure layer and absorb the evolution of the
//! storage format over time.
//!
//! ## Schema Versioning (Semantic Versioning)
//!
//! - **MAJOR (X.0.0)**: Breaking changes (field removal, type changes)
//! - **MINOR (1.X.0)**: Backward-compatible additions (new fields with defaults)
//!
//! Per-entity version histories live at the top of each module, next to
//! the `create_*_migrator` factory that registers the migration path.

mod chat_history;
mod journal;
mod mood_log;
mod settings;
mod subscription;

pub use chat_history::{
    ChatHistorySchema, ChatHistoryV1_0_0, ChatMessageV1_0_0, create_chat_history_migrator,
};
pub use journal::{JournalDraftSchema, JournalDraftV1_0_0, create_journal_draft_migrator};
pub use mood_log::{
    MoodEntryV1_0_0, MoodEntryV1_1_0, MoodLogSchema, MoodLogV1_0_0, MoodLogV1_1_0,
    create_mood_log_migrator,
};
pub use settings::{
    UserSettingsSchema, UserSettingsV1_0_0, UserSettingsV1_1_0, create_user_settings_migrator,
};
pub use subscription::{SubscriptionSchema, SubscriptionV1_0_0, create_subscription_migrator};
