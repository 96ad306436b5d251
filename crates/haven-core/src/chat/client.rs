//! Chat completion collaborator.

use async_trait::async_trait;
use thiserror::Error;

use super::message::{ChatMessage, ChatRole};

/// One prior turn sent to the model as context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl From<&ChatMessage> for ChatTurn {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.role,
            text: message.text.clone(),
        }
    }
}

/// Everything the model needs for one reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub system_instruction: String,
    pub history: Vec<ChatTurn>,
    pub message: String,
}

/// Failures of the chat collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatClientError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("request failed: {message}")]
    Request { message: String, retryable: bool },

    #[error("service returned {status}: {message}")]
    Http { status: u16, message: String },

    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}

impl ChatClientError {
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request { retryable, .. } => *retryable,
            Self::Http { status, .. } => matches!(status, 429 | 500 | 502 | 503 | 504),
            _ => false,
        }
    }
}

/// Produces the companion's reply. Returns `Ok(None)` when the model
/// answered without any text.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn reply(&self, request: &ChatRequest) -> Result<Option<String>, ChatClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_statuses() {
        let busy = ChatClientError::Http {
            status: 503,
            message: "overloaded".into(),
        };
        let bad = ChatClientError::Http {
            status: 400,
            message: "bad request".into(),
        };
        assert!(busy.is_retryable());
        assert!(!bad.is_retryable());
        assert!(!ChatClientError::MissingApiKey.is_retryable());
    }
}
