//! Chat domain module.
//!
//! # Module Structure
//!
//! - `message`: `ChatMessage`, `ChatRole`, `ChatHistory`
//! - `quota`: Free-tier daily message accounting
//! - `crisis`: Crisis language screening and the safety reply
//! - `smart_action`: Tool shortcuts suggested under model replies
//! - `locale`: Greetings, quick replies and the system instruction
//! - `client`: The chat completion collaborator trait
//! - `repository`: Persistence trait for the conversation

mod client;
mod crisis;
mod locale;
mod message;
mod quota;
mod repository;
mod smart_action;

pub use client::{ChatClient, ChatClientError, ChatRequest, ChatTurn};
pub use crisis::{is_crisis_message, safety_reply};
pub use locale::{
    CONNECTION_ERROR_MESSAGE, ChatLocale, EMPTY_REPLY_MESSAGE, SAFETY_MESSAGE,
    SETUP_REQUIRED_MESSAGE, chat_locale, system_instruction,
};
pub use message::{ChatHistory, ChatMessage, ChatRole, GREETING_ID};
pub use quota::QuotaStatus;
pub use repository::ChatHistoryRepository;
pub use smart_action::{SmartAction, smart_action_for};
