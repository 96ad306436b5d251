//! Payment collaborator.

use async_trait::async_trait;
use thiserror::Error;

use super::model::Product;

/// Result of presenting a checkout to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Completed { payment_id: String },
    Cancelled,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error("payment gateway unavailable: {0}")]
    Unavailable(String),

    #[error("payment declined: {0}")]
    Declined(String),
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn checkout(&self, product: &Product) -> Result<CheckoutOutcome, PaymentError>;
}
