//! Offline companion replies.
//!
//! Used when the user opts out of network calls. Replies are short
//! reflective prompts chosen by keyword, so smart actions still trigger.

use async_trait::async_trait;

use haven_core::chat::{ChatClient, ChatClientError, ChatRequest};

const RULES: &[(&[&str], &str)] = &[
    (
        &["anxious", "anxiety", "panic", "nervous", "stress"],
        "That sounds really overwhelming. Let's slow things down together: try a few rounds of 4-7-8 breathing, in for 4, hold for 7, out for 8.",
    ),
    (
        &["sleep", "tired", "insomnia", "awake"],
        "Restless nights are exhausting. Some gentle rain sounds and a short wind-down routine can help. What usually keeps your mind busy at night?",
    ),
    (
        &["lonely", "alone", "isolated"],
        "Feeling lonely is painful, and reaching out here took courage. It might help to write about a moment you felt connected to someone in your journal.",
    ),
    (
        &["sad", "down", "low", "depressed"],
        "I'm sorry you're feeling low. Tracking your mood for a few days can reveal patterns. Would you like to tell me what today has been like?",
    ),
];

const FALLBACK: &str =
    "Thank you for sharing that with me. I'm here and listening. How has this been affecting you?";

#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineChatClient;

impl OfflineChatClient {
    pub fn new() -> Self {
        Self
    }

    fn compose(message: &str) -> &'static str {
        let lower = message.to_lowercase();
        RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(_, reply)| *reply)
            .unwrap_or(FALLBACK)
    }
}

#[async_trait]
impl ChatClient for OfflineChatClient {
    async fn reply(&self, request: &ChatRequest) -> Result<Option<String>, ChatClientError> {
        Ok(Some(Self::compose(&request.message).to_string()))
    }
}
