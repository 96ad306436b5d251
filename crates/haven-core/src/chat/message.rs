//! Chat message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id of the seeded greeting message.
pub const GREETING_ID: &str = "init";

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Message typed by the user.
    User,
    /// Reply from the companion (model output or canned text).
    Model,
}

/// A single message in the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Marks replies that stand in for a failed model call.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::new(ChatRole::User, text, timestamp)
    }

    pub fn model(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::new(ChatRole::Model, text, timestamp)
    }

    /// A model-side message reporting a failure to the user.
    pub fn error(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            is_error: true,
            ..Self::new(ChatRole::Model, text, timestamp)
        }
    }

    /// The seeded greeting that opens every conversation.
    pub fn greeting(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: GREETING_ID.to_string(),
            ..Self::new(ChatRole::Model, text, timestamp)
        }
    }

    fn new(role: ChatRole, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            timestamp,
            is_error: false,
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }

    pub fn is_greeting(&self) -> bool {
        self.id == GREETING_ID
    }
}

/// The persisted conversation. Saved as a whole on every mutation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChatHistory {
    pub messages: Vec<ChatMessage>,
}

impl ChatHistory {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }

    /// A fresh conversation holding only the greeting.
    pub fn with_greeting(greeting: ChatMessage) -> Self {
        Self {
            messages: vec![greeting],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// True when nothing but the greeting has been exchanged.
    pub fn is_only_greeting(&self) -> bool {
        self.messages.len() == 1 && self.messages[0].is_greeting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_ids_are_unique() {
        let now = Utc::now();
        let a = ChatMessage::user("hi", now);
        let b = ChatMessage::user("hi", now);
        assert_ne!(a.id, b.id);
        assert!(a.is_user());
        assert!(!a.is_error);
    }

    #[test]
    fn test_error_flag_serialization() {
        let now = Utc::now();
        let ok = serde_json::to_value(ChatMessage::model("fine", now)).unwrap();
        assert!(ok.get("isError").is_none());

        let failed = serde_json::to_value(ChatMessage::error("offline", now)).unwrap();
        assert_eq!(failed["isError"], serde_json::json!(true));
        assert_eq!(failed["role"], serde_json::json!("model"));
    }

    #[test]
    fn test_only_greeting() {
        let now = Utc::now();
        let mut history = ChatHistory::with_greeting(ChatMessage::greeting("Hello", now));
        assert!(history.is_only_greeting());

        history.push(ChatMessage::user("hey", now));
        assert!(!history.is_only_greeting());
    }
}
