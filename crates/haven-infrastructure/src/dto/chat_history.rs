//! Chat history DTOs.
//!
//! ## Version History
//! - **1.0.0**: Initial schema, timestamps stored as RFC 3339 strings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Migrator, Versioned};

use haven_core::chat::{ChatHistory, ChatMessage, ChatRole};

use crate::storage::DocumentSchema;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageV1_0_0 {
    pub id: String,
    pub role: String,
    pub text: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl From<ChatMessageV1_0_0> for ChatMessage {
    fn from(dto: ChatMessageV1_0_0) -> Self {
        let timestamp = DateTime::parse_from_rfc3339(&dto.timestamp)
            .map(|ts| ts.with_timezone(&Utc))
            .unwrap_or_else(|_| {
                tracing::warn!(
                    "chat message {} has unreadable timestamp '{}', using now",
                    dto.id,
                    dto.timestamp
                );
                Utc::now()
            });
        let role = if dto.role.eq_ignore_ascii_case("user") {
            ChatRole::User
        } else {
            ChatRole::Model
        };

        ChatMessage {
            id: dto.id,
            role,
            text: dto.text,
            timestamp,
            is_error: dto.is_error,
        }
    }
}

impl From<&ChatMessage> for ChatMessageV1_0_0 {
    fn from(message: &ChatMessage) -> Self {
        ChatMessageV1_0_0 {
            id: message.id.clone(),
            role: match message.role {
                ChatRole::User => "user".to_string(),
                ChatRole::Model => "model".to_string(),
            },
            text: message.text.clone(),
            timestamp: message.timestamp.to_rfc3339(),
            is_error: message.is_error,
        }
    }
}

/// Chat history DTO V1.0.0
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct ChatHistoryV1_0_0 {
    #[serde(default)]
    pub messages: Vec<ChatMessageV1_0_0>,
}

impl IntoDomain<ChatHistory> for ChatHistoryV1_0_0 {
    fn into_domain(self) -> ChatHistory {
        ChatHistory::new(self.messages.into_iter().map(Into::into).collect())
    }
}

impl FromDomain<ChatHistory> for ChatHistoryV1_0_0 {
    fn from_domain(history: ChatHistory) -> Self {
        ChatHistoryV1_0_0 {
            messages: history.messages.iter().map(Into::into).collect(),
        }
    }
}

/// Creates the Migrator for chat history documents.
pub fn create_chat_history_migrator() -> Migrator {
    let mut migrator = Migrator::builder().build();
    let path = Migrator::define(ChatHistorySchema::ENTITY)
        .from::<ChatHistoryV1_0_0>()
        .into_with_save::<ChatHistory>();
    migrator
        .register(path)
        .expect("Failed to register chat_history migration path");
    migrator
}

pub struct ChatHistorySchema;

impl DocumentSchema for ChatHistorySchema {
    type Domain = ChatHistory;
    const ENTITY: &'static str = "chat_history";

    fn migrator() -> Migrator {
        create_chat_history_migrator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unreadable_timestamp_falls_back_instead_of_failing() {
        let stored = json!({
            "version": "1.0.0",
            "messages": [
                {"id": "init", "role": "model", "text": "hello", "timestamp": "yesterday-ish"},
                {"id": "a", "role": "user", "text": "hi", "timestamp": "2024-05-01T10:00:00Z"}
            ]
        });
        let history: ChatHistory = create_chat_history_migrator()
            .load_flat_from(ChatHistorySchema::ENTITY, stored)
            .unwrap();

        assert_eq!(history.len(), 2);
        assert!(history.messages[0].is_greeting());
        assert_eq!(history.messages[1].timestamp.to_rfc3339(), "2024-05-01T10:00:00+00:00");
        assert!(history.messages[1].is_user());
    }

    #[test]
    fn test_save_marks_version_and_skips_false_error_flag() {
        let history = ChatHistory::new(vec![ChatMessage::user("hi", Utc::now())]);
        let json = create_chat_history_migrator()
            .save_domain_flat(ChatHistorySchema::ENTITY, &history)
            .unwrap();
        assert!(json.contains("\"version\":\"1.0.0\""));
        assert!(!json.contains("isError"));
    }

    #[test]
    fn test_missing_version_is_rejected() {
        let err = create_chat_history_migrator()
            .load_flat_from::<ChatHistory, _>(ChatHistorySchema::ENTITY, json!({"messages": []}))
            .unwrap_err();
        let err: haven_core::HavenError = err.into();
        assert!(err.is_corrupt_data());
    }
}
