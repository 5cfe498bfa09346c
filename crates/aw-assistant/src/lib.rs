//! AI weather assistant: presentation client.
//!
//! Sends the user's question to the gateway, looks up the weather for the
//! extracted city, and renders one of a fixed set of reply templates.

pub mod assistant;
pub mod client;
pub mod compose;
pub mod config;
pub mod error;

pub use assistant::{Assistant, FAILURE_MESSAGE};
pub use client::GatewayClient;
pub use config::AssistantConfig;
pub use error::{AssistantError, AssistantResult};
