//! Wires file-backed stores and collaborators into the use cases.

use std::sync::Arc;

use anyhow::{Context, Result};
use haven_application::{
    ChatService, DataService, JournalService, MoodService, SettingsService, SubscriptionService,
};
use haven_core::chat::ChatClient;
use haven_core::subscription::{PaymentGateway, SubscriptionRepository};
use haven_core::{AppConfig, Clock, SystemClock};
use haven_infrastructure::{
    ConfigService, FileChatHistoryRepository, FileJournalRepository, FileMoodRepository,
    FileSettingsRepository, FileSubscriptionRepository, HavenPaths,
};
use haven_interaction::{GeminiChatClient, OfflineChatClient};

pub struct AppContext {
    pub paths: HavenPaths,
    pub config: AppConfig,
    pub clock: Arc<dyn Clock>,
    offline: bool,
    chat_history: Arc<FileChatHistoryRepository>,
    mood: Arc<FileMoodRepository>,
    settings: Arc<FileSettingsRepository>,
    subscription: Arc<FileSubscriptionRepository>,
    journal: Arc<FileJournalRepository>,
}

impl AppContext {
    pub async fn load(paths: HavenPaths, offline: bool) -> Result<Self> {
        let config = ConfigService::new(&paths)
            .context("Failed to resolve config location")?
            .get_config()
            .await;

        Ok(Self {
            chat_history: Arc::new(FileChatHistoryRepository::new(&paths)?),
            mood: Arc::new(FileMoodRepository::new(&paths)?),
            settings: Arc::new(FileSettingsRepository::new(&paths)?),
            subscription: Arc::new(FileSubscriptionRepository::new(&paths)?),
            journal: Arc::new(FileJournalRepository::new(&paths)?),
            clock: Arc::new(SystemClock),
            paths,
            config,
            offline,
        })
    }

    fn chat_client(&self) -> Arc<dyn ChatClient> {
        if self.offline {
            tracing::debug!("using offline chat replies");
            Arc::new(OfflineChatClient::new())
        } else {
            Arc::new(GeminiChatClient::from_config(&self.config.chat))
        }
    }

    /// Premium flag for gating views. Unreadable state counts as free.
    pub async fn is_premium(&self) -> bool {
        self.subscription
            .load()
            .await
            .map(|state| state.is_premium)
            .unwrap_or(false)
    }

    pub fn chat(&self) -> ChatService {
        ChatService::new(
            self.chat_history.clone(),
            self.settings.clone(),
            self.subscription.clone(),
            self.chat_client(),
            self.clock.clone(),
            self.config.chat.clone(),
        )
    }

    pub fn mood(&self) -> MoodService {
        MoodService::new(
            self.mood.clone(),
            self.subscription.clone(),
            self.clock.clone(),
            self.config.mood.clone(),
        )
    }

    pub fn settings(&self) -> SettingsService {
        SettingsService::new(self.settings.clone())
    }

    pub fn subscription(&self, gateway: Arc<dyn PaymentGateway>) -> SubscriptionService {
        SubscriptionService::new(self.subscription.clone(), gateway, self.clock.clone())
    }

    pub fn journal(&self) -> JournalService {
        JournalService::new(self.journal.clone(), self.clock.clone())
    }

    pub fn data(&self) -> DataService {
        DataService::new(
            self.chat_history.clone(),
            self.mood.clone(),
            self.journal.clone(),
            self.clock.clone(),
        )
    }
}
