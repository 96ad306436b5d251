pub mod chat;
pub mod context;
pub mod data;
pub mod journal;
pub mod mood;
pub mod premium;
pub mod pricing;
pub mod settings;
pub mod sound;
pub mod tools;
