//! User settings domain module.
//!
//! - `model`: Region, currency, language and the `UserSettings` singleton
//! - `repository`: Persistence trait for settings

mod model;
mod repository;

pub use model::{Currency, Language, Region, UserSettings};
pub use repository::SettingsRepository;
