//! Premium subscription domain module.

mod gateway;
mod model;
mod repository;

pub use gateway::{CheckoutOutcome, PaymentError, PaymentGateway};
pub use model::{
    MONTHLY_PRODUCT_ID, PRODUCTS, Plan, Product, SubscriptionState, YEARLY_PRODUCT_ID,
    find_product, product_for_plan,
};
pub use repository::SubscriptionRepository;
