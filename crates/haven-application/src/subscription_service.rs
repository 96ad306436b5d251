//! Premium subscription use case.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use haven_core::Clock;
use haven_core::error::{HavenError, Result};
use haven_core::subscription::{
    CheckoutOutcome, PRODUCTS, PaymentGateway, Plan, Product, SubscriptionRepository,
    SubscriptionState, find_product,
};
use serde::Serialize;

/// Subscription summary for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumStatus {
    pub is_premium: bool,
    pub plan: Option<Plan>,
    pub started_at: Option<DateTime<Utc>>,
    pub next_billing_date: Option<DateTime<Utc>>,
}

impl From<SubscriptionState> for PremiumStatus {
    fn from(state: SubscriptionState) -> Self {
        Self {
            is_premium: state.is_premium,
            plan: state.plan,
            started_at: state.started_at,
            next_billing_date: state.next_billing_date(),
        }
    }
}

pub struct SubscriptionService {
    repository: Arc<dyn SubscriptionRepository>,
    gateway: Arc<dyn PaymentGateway>,
    clock: Arc<dyn Clock>,
}

impl SubscriptionService {
    pub fn new(
        repository: Arc<dyn SubscriptionRepository>,
        gateway: Arc<dyn PaymentGateway>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            gateway,
            clock,
        }
    }

    pub fn products(&self) -> &'static [Product] {
        PRODUCTS
    }

    /// Runs checkout for `product_id`.
    ///
    /// Returns `Ok(true)` once premium is active and `Ok(false)` when the
    /// user cancelled. A cancelled checkout leaves the state untouched.
    pub async fn purchase(&self, product_id: &str) -> Result<bool> {
        let product =
            find_product(product_id).ok_or_else(|| HavenError::not_found("Product", product_id))?;

        let outcome = self.gateway.checkout(product).await.map_err(|e| {
            tracing::error!("checkout for {} failed: {}", product.product_id, e);
            HavenError::Payment(e.to_string())
        })?;

        match outcome {
            CheckoutOutcome::Completed { payment_id } => {
                let state = SubscriptionState::activated(product.plan, self.clock.now());
                self.repository.save(&state).await?;
                tracing::info!(
                    "premium activated: plan={} payment={}",
                    product.plan,
                    payment_id
                );
                Ok(true)
            }
            CheckoutOutcome::Cancelled => {
                tracing::info!("checkout for {} cancelled", product.product_id);
                Ok(false)
            }
        }
    }

    /// Re-reads the stored premium flag, back-filling a missing start date.
    pub async fn restore(&self) -> Result<PremiumStatus> {
        let stored = self.repository.load().await?;
        let restored = stored.backfilled(self.clock.now());
        if restored != stored {
            self.repository.save(&restored).await?;
            tracing::info!("restored premium with back-filled start date");
        }
        Ok(restored.into())
    }

    pub async fn status(&self) -> Result<PremiumStatus> {
        Ok(self.repository.load().await?.into())
    }

    pub async fn next_billing_date(&self) -> Result<Option<DateTime<Utc>>> {
        Ok(self.repository.load().await?.next_billing_date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MemorySubscription, ScriptedGateway, clock, noon};
    use chrono::TimeZone;
    use haven_core::subscription::{MONTHLY_PRODUCT_ID, PaymentError, YEARLY_PRODUCT_ID};

    fn service(
        repository: Arc<MemorySubscription>,
        outcome: std::result::Result<CheckoutOutcome, PaymentError>,
    ) -> SubscriptionService {
        SubscriptionService::new(
            repository,
            Arc::new(ScriptedGateway { outcome }),
            Arc::new(clock()),
        )
    }

    fn completed() -> std::result::Result<CheckoutOutcome, PaymentError> {
        Ok(CheckoutOutcome::Completed {
            payment_id: "pay_test".into(),
        })
    }

    #[tokio::test]
    async fn test_purchase_activates_premium() {
        let repository = Arc::new(MemorySubscription::default());
        let service = service(repository.clone(), completed());

        assert!(service.purchase(YEARLY_PRODUCT_ID).await.unwrap());
        let stored = repository.stored();
        assert!(stored.is_premium);
        assert_eq!(stored.plan, Some(Plan::Yearly));
        assert_eq!(stored.started_at, Some(noon()));
        assert_eq!(
            service.next_billing_date().await.unwrap(),
            Some(Utc.with_ymd_and_hms(2025, 5, 20, 12, 0, 0).unwrap())
        );
    }

    #[tokio::test]
    async fn test_cancel_leaves_state() {
        let repository = Arc::new(MemorySubscription::default());
        let service = service(repository.clone(), Ok(CheckoutOutcome::Cancelled));

        assert!(!service.purchase(MONTHLY_PRODUCT_ID).await.unwrap());
        assert_eq!(repository.stored(), SubscriptionState::default());
    }

    #[tokio::test]
    async fn test_gateway_failure_maps_to_payment_error() {
        let repository = Arc::new(MemorySubscription::default());
        let service = service(
            repository.clone(),
            Err(PaymentError::Declined("insufficient funds".into())),
        );

        let err = service.purchase(MONTHLY_PRODUCT_ID).await.unwrap_err();
        assert!(matches!(err, HavenError::Payment(ref m) if m.contains("insufficient funds")));
        assert!(!repository.stored().is_premium);
    }

    #[tokio::test]
    async fn test_unknown_product() {
        let service = service(Arc::new(MemorySubscription::default()), completed());
        assert!(service.purchase("lifetime").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_restore_backfills_start_date() {
        let repository = Arc::new(MemorySubscription::premium());
        let service = service(repository.clone(), completed());

        let status = service.restore().await.unwrap();
        assert!(status.is_premium);
        assert_eq!(status.plan, Some(Plan::Monthly));
        assert_eq!(status.started_at, Some(noon()));
        assert_eq!(
            status.next_billing_date,
            Some(Utc.with_ymd_and_hms(2024, 6, 20, 12, 0, 0).unwrap())
        );
        assert_eq!(repository.stored().started_at, Some(noon()));
    }

    #[tokio::test]
    async fn test_restore_for_free_user() {
        let service = service(Arc::new(MemorySubscription::default()), completed());
        let status = service.restore().await.unwrap();
        assert!(!status.is_premium);
        assert!(status.next_billing_date.is_none());
    }
}
