//! Outbound collaborators: the Gemini chat client, an offline stand-in,
//! and the simulated checkout gateway.

pub mod gemini_chat_client;
pub mod offline_chat_client;
pub mod simulated_checkout;

pub use gemini_chat_client::GeminiChatClient;
pub use offline_chat_client::OfflineChatClient;
pub use simulated_checkout::{CheckoutBehavior, SimulatedCheckout};
