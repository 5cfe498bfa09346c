//! Presentation client error types.

use thiserror::Error;

/// Errors that can occur while asking the gateway.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("gateway request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("gateway returned {status}: {message}")]
    Gateway { status: u16, message: String },

    #[error(transparent)]
    Payload(#[from] aw_protocol::ProtocolError),
}

/// Convenience alias for presentation client results.
pub type AssistantResult<T> = Result<T, AssistantError>;
