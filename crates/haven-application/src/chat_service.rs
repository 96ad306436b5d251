//! Chat session use case.
//!
//! `ChatService` owns the conversation lifecycle: seeding the greeting,
//! enforcing the free daily quota, screening for crisis language and
//! turning model failures into visible error messages. Sends are
//! serialized so two replies can never interleave in the stored history.

use std::sync::Arc;

use haven_core::Clock;
use haven_core::chat::{
    CONNECTION_ERROR_MESSAGE, ChatClient, ChatClientError, ChatHistory, ChatHistoryRepository,
    ChatMessage, ChatRequest, ChatTurn, EMPTY_REPLY_MESSAGE, QuotaStatus,
    SETUP_REQUIRED_MESSAGE, SmartAction, chat_locale, is_crisis_message, safety_reply,
    smart_action_for, system_instruction,
};
use haven_core::config::ChatConfig;
use haven_core::error::{HavenError, Result};
use haven_core::settings::{Language, SettingsRepository, UserSettings};
use haven_core::subscription::SubscriptionRepository;
use tokio::sync::Mutex;

/// What a single send produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatOutcome {
    /// The model-side message appended for this send.
    pub reply: ChatMessage,
    /// Quota after the send.
    pub quota: QuotaStatus,
    /// Tool shortcut suggested by the reply, if any.
    pub smart_action: Option<SmartAction>,
}

impl ChatOutcome {
    /// Free messages left today. `None` for premium users.
    pub fn remaining(&self) -> Option<u32> {
        self.quota.remaining()
    }
}

pub struct ChatService {
    history_repository: Arc<dyn ChatHistoryRepository>,
    settings_repository: Arc<dyn SettingsRepository>,
    subscription_repository: Arc<dyn SubscriptionRepository>,
    client: Arc<dyn ChatClient>,
    clock: Arc<dyn Clock>,
    config: ChatConfig,
    send_lock: Mutex<()>,
}

impl ChatService {
    pub fn new(
        history_repository: Arc<dyn ChatHistoryRepository>,
        settings_repository: Arc<dyn SettingsRepository>,
        subscription_repository: Arc<dyn SubscriptionRepository>,
        client: Arc<dyn ChatClient>,
        clock: Arc<dyn Clock>,
        config: ChatConfig,
    ) -> Self {
        Self {
            history_repository,
            settings_repository,
            subscription_repository,
            client,
            clock,
            config,
            send_lock: Mutex::new(()),
        }
    }

    /// Returns the conversation, seeding the greeting when it is empty.
    pub async fn load(&self) -> Result<ChatHistory> {
        let settings = self.settings().await;
        self.load_or_seed(settings.language).await
    }

    /// Current quota snapshot.
    pub async fn quota(&self) -> Result<QuotaStatus> {
        let history = self.load().await?;
        Ok(self.quota_for(&history, self.is_premium().await))
    }

    /// Sends a user message and appends the companion's reply.
    ///
    /// Fails only for empty input, an exhausted quota or storage errors.
    /// Model failures are recorded as error messages instead.
    pub async fn send(&self, text: &str) -> Result<ChatOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Err(HavenError::invalid_input("message is empty"));
        }

        let _guard = self.send_lock.lock().await;
        let settings = self.settings().await;
        let is_premium = self.is_premium().await;
        let mut history = self.load_or_seed(settings.language).await?;

        let quota = self.quota_for(&history, is_premium);
        if quota.is_limit_reached() {
            tracing::info!("chat quota reached ({} of {})", quota.used, quota.limit);
            return Err(HavenError::QuotaExceeded { limit: quota.limit });
        }

        let context: Vec<ChatTurn> = history
            .messages
            .iter()
            .filter(|m| !m.is_error)
            .map(ChatTurn::from)
            .collect();

        history.push(ChatMessage::user(text, self.clock.now()));
        self.history_repository.save(&history).await?;

        let reply = if is_crisis_message(text) {
            tracing::warn!("crisis language detected; answering with safety reply");
            ChatMessage::model(safety_reply(settings.region), self.clock.now())
        } else {
            let request = ChatRequest {
                system_instruction: system_instruction(settings.language, settings.region),
                history: context,
                message: text.to_string(),
            };
            self.ask_model(&request).await
        };

        let smart_action = if reply.is_error {
            None
        } else {
            smart_action_for(&reply.text)
        };

        history.push(reply.clone());
        self.history_repository.save(&history).await?;

        Ok(ChatOutcome {
            reply,
            quota: self.quota_for(&history, is_premium),
            smart_action,
        })
    }

    /// Resets the conversation to the greeting.
    pub async fn clear(&self) -> Result<ChatHistory> {
        let _guard = self.send_lock.lock().await;
        let settings = self.settings().await;
        let history = self.greeting_history(settings.language);
        self.history_repository.save(&history).await?;
        tracing::info!("chat history cleared");
        Ok(history)
    }

    /// Rewrites the greeting in `language` when nothing else has been said.
    ///
    /// Returns `true` when the stored history changed.
    pub async fn relocalize(&self, language: Language) -> Result<bool> {
        let _guard = self.send_lock.lock().await;
        let mut history = self.load_or_seed(language).await?;
        if !history.is_only_greeting() {
            return Ok(false);
        }

        let greeting = chat_locale(language).greeting;
        if history.messages[0].text == greeting {
            return Ok(false);
        }
        history.messages[0].text = greeting.to_string();
        self.history_repository.save(&history).await?;
        Ok(true)
    }

    async fn ask_model(&self, request: &ChatRequest) -> ChatMessage {
        match self.client.reply(request).await {
            Ok(Some(text)) => ChatMessage::model(text, self.clock.now()),
            Ok(None) => {
                tracing::warn!("model returned an empty reply");
                ChatMessage::model(EMPTY_REPLY_MESSAGE, self.clock.now())
            }
            Err(ChatClientError::MissingApiKey) => {
                tracing::warn!("chat requested without an API key");
                ChatMessage::error(SETUP_REQUIRED_MESSAGE, self.clock.now())
            }
            Err(e) => {
                tracing::error!("chat request failed: {}", e);
                ChatMessage::error(CONNECTION_ERROR_MESSAGE, self.clock.now())
            }
        }
    }

    async fn load_or_seed(&self, language: Language) -> Result<ChatHistory> {
        let history = match self.history_repository.load().await {
            Ok(history) => history,
            Err(e) if e.is_corrupt_data() => {
                tracing::warn!("chat history unreadable, starting fresh: {}", e);
                ChatHistory::default()
            }
            Err(e) => return Err(e),
        };

        if !history.is_empty() {
            return Ok(history);
        }

        let seeded = self.greeting_history(language);
        self.history_repository.save(&seeded).await?;
        Ok(seeded)
    }

    fn greeting_history(&self, language: Language) -> ChatHistory {
        ChatHistory::with_greeting(ChatMessage::greeting(
            chat_locale(language).greeting,
            self.clock.now(),
        ))
    }

    fn quota_for(&self, history: &ChatHistory, is_premium: bool) -> QuotaStatus {
        QuotaStatus::compute(
            &history.messages,
            self.config.free_daily_limit,
            is_premium,
            self.clock.as_ref(),
        )
    }

    async fn settings(&self) -> UserSettings {
        self.settings_repository.load().await.unwrap_or_else(|e| {
            tracing::warn!("using default settings: {}", e);
            UserSettings::default()
        })
    }

    async fn is_premium(&self) -> bool {
        match self.subscription_repository.load().await {
            Ok(state) => state.is_premium,
            Err(e) => {
                tracing::warn!("subscription state unreadable, treating as free: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use chrono::Duration;
    use haven_core::FixedClock;
    use haven_core::chat::SAFETY_MESSAGE;
    use haven_core::settings::Region;
    use haven_core::view::AppView;

    struct Fixture {
        history: Arc<MemoryChatHistory>,
        settings: Arc<MemorySettings>,
        subscription: Arc<MemorySubscription>,
        client: Arc<ScriptedChatClient>,
    }

    impl Fixture {
        fn new(client: ScriptedChatClient) -> Self {
            Self {
                history: Arc::new(MemoryChatHistory::default()),
                settings: Arc::new(MemorySettings::default()),
                subscription: Arc::new(MemorySubscription::default()),
                client: Arc::new(client),
            }
        }

        fn service(&self, clock: FixedClock) -> ChatService {
            ChatService::new(
                self.history.clone(),
                self.settings.clone(),
                self.subscription.clone(),
                self.client.clone(),
                Arc::new(clock),
                ChatConfig::default(),
            )
        }
    }

    #[tokio::test]
    async fn test_load_seeds_greeting() {
        let fixture = Fixture::new(ScriptedChatClient::replying("hi"));
        let history = fixture.service(clock()).load().await.unwrap();

        assert!(history.is_only_greeting());
        assert_eq!(history.messages[0].text, chat_locale(Language::En).greeting);
        assert!(fixture.history.stored().is_only_greeting());
    }

    #[tokio::test]
    async fn test_corrupt_history_is_replaced_by_greeting() {
        let mut fixture = Fixture::new(ScriptedChatClient::replying("hi"));
        fixture.history = Arc::new(MemoryChatHistory::corrupted());

        let history = fixture.service(clock()).load().await.unwrap();
        assert!(history.is_only_greeting());
    }

    #[tokio::test]
    async fn test_send_appends_user_and_reply() {
        let fixture = Fixture::new(ScriptedChatClient::replying("That sounds heavy. Want to talk?"));
        let service = fixture.service(clock());

        let outcome = service.send("  rough day  ").await.unwrap();
        assert_eq!(outcome.reply.text, "That sounds heavy. Want to talk?");
        assert_eq!(outcome.remaining(), Some(4));
        assert!(outcome.smart_action.is_none());

        let stored = fixture.history.stored();
        assert_eq!(stored.len(), 3);
        assert_eq!(stored.messages[1].text, "rough day");

        let requests = fixture.client.requests.lock().unwrap();
        assert_eq!(requests[0].message, "rough day");
        assert_eq!(requests[0].history.len(), 1);
        assert!(requests[0].system_instruction.contains("HELPLINES"));
    }

    #[tokio::test]
    async fn test_empty_input_is_rejected() {
        let fixture = Fixture::new(ScriptedChatClient::replying("hi"));
        let err = fixture.service(clock()).send("   ").await.unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(fixture.client.calls(), 0);
    }

    #[tokio::test]
    async fn test_quota_blocks_sixth_message_without_mutation() {
        let fixture = Fixture::new(ScriptedChatClient::replying("ok"));
        let service = fixture.service(clock());
        for i in 0..5 {
            service.send(&format!("message {i}")).await.unwrap();
        }
        let before = fixture.history.stored();

        let err = service.send("one more").await.unwrap_err();
        assert!(err.is_quota_exceeded());
        assert_eq!(fixture.history.stored(), before);
        assert_eq!(fixture.client.calls(), 5);
    }

    #[tokio::test]
    async fn test_quota_resets_next_day() {
        let fixture = Fixture::new(ScriptedChatClient::replying("ok"));
        let today = clock();
        let service = fixture.service(today);
        for i in 0..5 {
            service.send(&format!("message {i}")).await.unwrap();
        }

        let tomorrow = fixture.service(today.at(noon() + Duration::days(1)));
        let outcome = tomorrow.send("new day").await.unwrap();
        assert_eq!(outcome.remaining(), Some(4));
    }

    #[tokio::test]
    async fn test_premium_is_unlimited() {
        let mut fixture = Fixture::new(ScriptedChatClient::replying("ok"));
        fixture.subscription = Arc::new(MemorySubscription::premium());
        let service = fixture.service(clock());
        for i in 0..8 {
            let outcome = service.send(&format!("message {i}")).await.unwrap();
            assert_eq!(outcome.remaining(), None);
        }
    }

    #[tokio::test]
    async fn test_crisis_message_skips_model() {
        let fixture = Fixture::new(ScriptedChatClient::replying("unused"));
        fixture
            .settings
            .save(&UserSettings::default().with_region(Region::In))
            .await
            .unwrap();

        let outcome = fixture
            .service(clock())
            .send("I feel like I want to die")
            .await
            .unwrap();
        assert!(outcome.reply.text.starts_with(SAFETY_MESSAGE));
        assert!(!outcome.reply.is_error);
        assert_eq!(fixture.client.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_key_yields_setup_message() {
        let fixture = Fixture::new(ScriptedChatClient::with(Err(ChatClientError::MissingApiKey)));
        let outcome = fixture.service(clock()).send("hello").await.unwrap();
        assert!(outcome.reply.is_error);
        assert_eq!(outcome.reply.text, SETUP_REQUIRED_MESSAGE);
    }

    #[tokio::test]
    async fn test_network_failure_is_error_message_and_excluded_later() {
        let fixture = Fixture::new(ScriptedChatClient::with(Err(ChatClientError::Request {
            message: "timed out".into(),
            retryable: true,
        })));
        let service = fixture.service(clock());

        let outcome = service.send("hello").await.unwrap();
        assert!(outcome.reply.is_error);
        assert_eq!(outcome.reply.text, CONNECTION_ERROR_MESSAGE);

        service.send("are you there?").await.unwrap();
        let requests = fixture.client.requests.lock().unwrap();
        // greeting + first user message; the error reply is left out
        assert_eq!(requests[1].history.len(), 2);
        assert!(requests[1].history.iter().all(|t| t.text != CONNECTION_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_empty_reply_uses_fallback_text() {
        let fixture = Fixture::new(ScriptedChatClient::with(Ok(None)));
        let outcome = fixture.service(clock()).send("hello").await.unwrap();
        assert_eq!(outcome.reply.text, EMPTY_REPLY_MESSAGE);
        assert!(!outcome.reply.is_error);
    }

    #[tokio::test]
    async fn test_reply_suggests_smart_action() {
        let fixture = Fixture::new(ScriptedChatClient::replying(
            "Let's slow down and take a deep breath together.",
        ));
        let outcome = fixture.service(clock()).send("I'm panicking").await.unwrap();
        assert_eq!(outcome.smart_action.unwrap().view, AppView::Tools);
    }

    #[tokio::test]
    async fn test_clear_resets_to_greeting() {
        let fixture = Fixture::new(ScriptedChatClient::replying("ok"));
        let service = fixture.service(clock());
        service.send("hello").await.unwrap();

        let history = service.clear().await.unwrap();
        assert!(history.is_only_greeting());
        assert!(fixture.history.stored().is_only_greeting());
    }

    #[tokio::test]
    async fn test_relocalize_only_touches_lone_greeting() {
        let fixture = Fixture::new(ScriptedChatClient::replying("ok"));
        let service = fixture.service(clock());
        service.load().await.unwrap();

        assert!(service.relocalize(Language::Es).await.unwrap());
        assert_eq!(
            fixture.history.stored().messages[0].text,
            chat_locale(Language::Es).greeting
        );

        service.send("hola").await.unwrap();
        assert!(!service.relocalize(Language::De).await.unwrap());
        assert_eq!(
            fixture.history.stored().messages[0].text,
            chat_locale(Language::Es).greeting
        );
    }
}
