//! In-memory repositories and scripted collaborators for use-case tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use haven_core::FixedClock;
use haven_core::chat::{ChatClient, ChatClientError, ChatHistory, ChatHistoryRepository, ChatRequest};
use haven_core::error::{HavenError, Result};
use haven_core::journal::{JournalDraft, JournalRepository};
use haven_core::mood::{MoodLog, MoodRepository};
use haven_core::settings::{SettingsRepository, UserSettings};
use haven_core::subscription::{
    CheckoutOutcome, PaymentError, PaymentGateway, Product, SubscriptionRepository,
    SubscriptionState,
};

pub fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap()
}

pub fn clock() -> FixedClock {
    FixedClock::new(noon())
}

#[derive(Default)]
pub struct MemoryChatHistory {
    pub history: Mutex<Option<ChatHistory>>,
    pub corrupt: Mutex<bool>,
}

impl MemoryChatHistory {
    pub fn corrupted() -> Self {
        Self {
            history: Mutex::new(None),
            corrupt: Mutex::new(true),
        }
    }

    pub fn stored(&self) -> ChatHistory {
        self.history.lock().unwrap().clone().unwrap_or_default()
    }
}

#[async_trait]
impl ChatHistoryRepository for MemoryChatHistory {
    async fn load(&self) -> Result<ChatHistory> {
        if *self.corrupt.lock().unwrap() {
            return Err(HavenError::Serialization {
                format: "JSON".into(),
                message: "expected value at line 1".into(),
            });
        }
        Ok(self.stored())
    }

    async fn save(&self, history: &ChatHistory) -> Result<()> {
        *self.corrupt.lock().unwrap() = false;
        *self.history.lock().unwrap() = Some(history.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.history.lock().unwrap() = None;
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryMoodLog {
    pub log: Mutex<MoodLog>,
}

#[async_trait]
impl MoodRepository for MemoryMoodLog {
    async fn load(&self) -> Result<MoodLog> {
        Ok(self.log.lock().unwrap().clone())
    }

    async fn save(&self, log: &MoodLog) -> Result<()> {
        *self.log.lock().unwrap() = log.clone();
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.log.lock().unwrap() = MoodLog::default();
        Ok(())
    }
}

#[derive(Default)]
pub struct MemorySettings {
    pub settings: Mutex<UserSettings>,
}

impl MemorySettings {
    pub fn with(settings: UserSettings) -> Self {
        Self {
            settings: Mutex::new(settings),
        }
    }
}

#[async_trait]
impl SettingsRepository for MemorySettings {
    async fn load(&self) -> Result<UserSettings> {
        Ok(*self.settings.lock().unwrap())
    }

    async fn save(&self, settings: &UserSettings) -> Result<()> {
        *self.settings.lock().unwrap() = *settings;
        Ok(())
    }
}

#[derive(Default)]
pub struct MemorySubscription {
    pub state: Mutex<SubscriptionState>,
}

impl MemorySubscription {
    pub fn premium() -> Self {
        Self {
            state: Mutex::new(SubscriptionState {
                is_premium: true,
                plan: None,
                started_at: None,
            }),
        }
    }

    pub fn stored(&self) -> SubscriptionState {
        *self.state.lock().unwrap()
    }
}

#[async_trait]
impl SubscriptionRepository for MemorySubscription {
    async fn load(&self) -> Result<SubscriptionState> {
        Ok(self.stored())
    }

    async fn save(&self, state: &SubscriptionState) -> Result<()> {
        *self.state.lock().unwrap() = *state;
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryJournal {
    pub draft: Mutex<Option<JournalDraft>>,
}

#[async_trait]
impl JournalRepository for MemoryJournal {
    async fn load(&self) -> Result<Option<JournalDraft>> {
        Ok(self.draft.lock().unwrap().clone())
    }

    async fn save(&self, draft: &JournalDraft) -> Result<()> {
        *self.draft.lock().unwrap() = Some(draft.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.draft.lock().unwrap() = None;
        Ok(())
    }
}

/// Chat client that answers with a fixed result and records requests.
pub struct ScriptedChatClient {
    response: std::result::Result<Option<String>, ChatClientError>,
    pub requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedChatClient {
    pub fn replying(text: &str) -> Self {
        Self::with(Ok(Some(text.to_string())))
    }

    pub fn with(response: std::result::Result<Option<String>, ChatClientError>) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatClient for ScriptedChatClient {
    async fn reply(
        &self,
        request: &ChatRequest,
    ) -> std::result::Result<Option<String>, ChatClientError> {
        self.requests.lock().unwrap().push(request.clone());
        self.response.clone()
    }
}

pub struct ScriptedGateway {
    pub outcome: std::result::Result<CheckoutOutcome, PaymentError>,
}

#[async_trait]
impl PaymentGateway for ScriptedGateway {
    async fn checkout(
        &self,
        _product: &Product,
    ) -> std::result::Result<CheckoutOutcome, PaymentError> {
        self.outcome.clone()
    }
}
