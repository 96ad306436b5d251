//! Subscription repository implementation.
//!
//! File location: `{data_dir}/subscription.json`

use async_trait::async_trait;
use std::path::PathBuf;

use haven_core::HavenError;
use haven_core::error::Result;
use haven_core::subscription::{SubscriptionRepository, SubscriptionState};

use crate::dto::SubscriptionSchema;
use crate::paths::{HavenPaths, ServiceType};
use crate::storage::VersionedDocument;

pub struct FileSubscriptionRepository {
    document: VersionedDocument<SubscriptionSchema>,
}

impl FileSubscriptionRepository {
    pub fn new(paths: &HavenPaths) -> Result<Self> {
        let path = paths
            .get_path(ServiceType::Subscription)
            .map_err(|e| HavenError::config(e.to_string()))?;
        Ok(Self::with_path(path.into_path_buf()))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            document: VersionedDocument::new(path),
        }
    }
}

#[async_trait]
impl SubscriptionRepository for FileSubscriptionRepository {
    /// Missing or unreadable state counts as the free tier.
    async fn load(&self) -> Result<SubscriptionState> {
        match self.document.load().await {
            Ok(state) => Ok(state.unwrap_or_default()),
            Err(e) if e.is_corrupt_data() => {
                tracing::warn!("subscription state unreadable, treating as free: {}", e);
                Ok(SubscriptionState::default())
            }
            Err(e) => Err(e),
        }
    }

    async fn save(&self, state: &SubscriptionState) -> Result<()> {
        self.document.save(state).await
    }
}
