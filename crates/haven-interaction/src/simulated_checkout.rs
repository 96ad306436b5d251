//! Simulated checkout gateway.
//!
//! Stands in for a hosted payment sheet. The outcome is fixed at
//! construction so the CLI and tests can exercise every purchase path.

use async_trait::async_trait;
use uuid::Uuid;

use haven_core::subscription::{CheckoutOutcome, PaymentError, PaymentGateway, Product};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutBehavior {
    Approve,
    Cancel,
    Decline(String),
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct SimulatedCheckout {
    behavior: CheckoutBehavior,
}

impl SimulatedCheckout {
    pub fn new(behavior: CheckoutBehavior) -> Self {
        Self { behavior }
    }

    pub fn approving() -> Self {
        Self::new(CheckoutBehavior::Approve)
    }
}

#[async_trait]
impl PaymentGateway for SimulatedCheckout {
    async fn checkout(&self, product: &Product) -> Result<CheckoutOutcome, PaymentError> {
        tracing::info!(
            "simulated checkout for {} ({} paise)",
            product.product_id,
            product.amount_in_paise
        );

        match &self.behavior {
            CheckoutBehavior::Approve => Ok(CheckoutOutcome::Completed {
                payment_id: format!("pay_sim_{}", Uuid::new_v4().simple()),
            }),
            CheckoutBehavior::Cancel => Ok(CheckoutOutcome::Cancelled),
            CheckoutBehavior::Decline(reason) => Err(PaymentError::Declined(reason.clone())),
            CheckoutBehavior::Unavailable => Err(PaymentError::Unavailable(
                "checkout service could not be reached".to_string(),
            )),
        }
    }
}
