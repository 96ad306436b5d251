//! GeminiChatClient - Direct REST API implementation for Gemini.
//!
//! Sends the conversation, the companion's system instruction and the
//! generation settings to `models/{model}:generateContent`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::HeaderValue};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use haven_core::chat::{ChatClient, ChatClientError, ChatRequest, ChatRole};
use haven_core::config::ChatConfig;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_RETRIES: u32 = 2;
const MAX_RETRY_DELAY: Duration = Duration::from_secs(10);

/// Chat client that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiChatClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    temperature: f32,
    max_output_tokens: u32,
    base_url: String,
}

impl GeminiChatClient {
    /// Builds a client from the chat configuration.
    ///
    /// The API key is resolved now; without one every call fails with
    /// `MissingApiKey` and no request is sent.
    pub fn from_config(config: &ChatConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_key: config.resolve_api_key(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Overrides the API endpoint (for proxies and tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn build_request(&self, request: &ChatRequest) -> GenerateContentRequest {
        let mut contents: Vec<Content> = request
            .history
            .iter()
            .map(|turn| Content::text(role_name(turn.role), &turn.text))
            .collect();
        contents.push(Content::text("user", &request.message));

        let system_instruction = (!request.system_instruction.trim().is_empty())
            .then(|| Content::text("system", &request.system_instruction));

        GenerateContentRequest {
            contents,
            system_instruction,
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        }
    }

    async fn send_request(
        &self,
        api_key: &str,
        body: &GenerateContentRequest,
    ) -> Result<Option<String>, (ChatClientError, Option<Duration>)> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            self.base_url,
            model = self.model,
        );

        let response = self.client.post(url).json(body).send().await.map_err(|err| {
            (
                ChatClientError::Request {
                    message: format!("Gemini API request failed: {err}"),
                    retryable: err.is_connect() || err.is_timeout(),
                },
                None,
            )
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after = parse_retry_after(response.headers().get("retry-after"));
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err((map_http_error(status, body_text), retry_after));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            (
                ChatClientError::InvalidResponse(format!("Failed to parse Gemini response: {err}")),
                None,
            )
        })?;

        Ok(extract_text_response(parsed))
    }
}

#[async_trait]
impl ChatClient for GeminiChatClient {
    async fn reply(&self, request: &ChatRequest) -> Result<Option<String>, ChatClientError> {
        let api_key = self.api_key.as_deref().ok_or(ChatClientError::MissingApiKey)?;
        let body = self.build_request(request);

        let mut attempt = 0;
        loop {
            match self.send_request(api_key, &body).await {
                Ok(text) => return Ok(text),
                Err((err, retry_after)) if err.is_retryable() && attempt < MAX_RETRIES => {
                    attempt += 1;
                    let delay = retry_after
                        .unwrap_or_else(|| Duration::from_millis(500 * 2u64.pow(attempt)))
                        .min(MAX_RETRY_DELAY);
                    tracing::warn!(
                        "Gemini call failed ({}), retry {}/{} in {:?}",
                        err,
                        attempt,
                        MAX_RETRIES,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err((err, _)) => return Err(err),
            }
        }
    }
}

fn role_name(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "user",
        ChatRole::Model => "model",
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

impl Content {
    fn text(role: &str, text: &str) -> Self {
        Self {
            role: role.to_string(),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// First non-blank text part of the first candidate.
fn extract_text_response(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .find(|text| !text.trim().is_empty())
        })
}

fn map_http_error(status: StatusCode, body: String) -> ChatClientError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    ChatClientError::Http {
        status: status.as_u16(),
        message,
    }
}

fn parse_retry_after(header: Option<&HeaderValue>) -> Option<Duration> {
    let value = header?.to_str().ok()?;
    value.trim().parse::<u64>().ok().map(Duration::from_secs)
}
