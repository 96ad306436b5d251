//! Subscription state repository trait.

use async_trait::async_trait;

use super::model::SubscriptionState;
use crate::error::Result;

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Loads the stored state. A missing document means not premium.
    async fn load(&self) -> Result<SubscriptionState>;

    async fn save(&self, state: &SubscriptionState) -> Result<()>;
}
