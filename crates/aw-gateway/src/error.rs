//! Gateway error types: upstream provider failures and the HTTP-facing
//! `ApiError` with Axum `IntoResponse` support.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use aw_protocol::ErrorBody;

/// Message returned to callers whenever the NLP provider fails.
pub const NLP_UNAVAILABLE: &str = "NLP service unavailable";

/// Failure talking to a third-party provider.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Connection, TLS, or body transfer failure.
    #[error("request failed: {0}")]
    Transport(String),

    /// Provider answered with a non-success status.
    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    /// Provider answered 2xx but the body was not what we expected.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        // Drop the URL: it carries API keys in the query string.
        let err = err.without_url();
        if let Some(status) = err.status() {
            UpstreamError::Status {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            UpstreamError::Malformed(err.to_string())
        } else {
            UpstreamError::Transport(err.to_string())
        }
    }
}

/// API error type that converts to proper HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, axum::Json(ErrorBody { error: message })).into_response()
    }
}

/// Convenience alias.
pub type ApiResult<T> = Result<T, ApiError>;
