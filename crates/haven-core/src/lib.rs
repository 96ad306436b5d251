pub mod chat;
pub mod clock;
pub mod config;
pub mod error;
pub mod exercise;
pub mod journal;
pub mod library;
pub mod mood;
pub mod pricing;
pub mod settings;
pub mod subscription;
pub mod view;

// Re-export common error type
pub use error::HavenError;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::AppConfig;
