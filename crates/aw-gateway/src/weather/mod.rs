//! Current-weather lookups.

pub mod openweather;

use async_trait::async_trait;
use axum::body::Bytes;

use crate::error::UpstreamError;

/// Trait for remote weather providers.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current conditions for `city`. The body is returned byte for
    /// byte so the gateway can forward it verbatim; it is only checked to be
    /// JSON.
    async fn current(&self, city: &str) -> Result<Bytes, UpstreamError>;

    /// Name of this provider (for logging).
    fn provider_name(&self) -> &str;
}

pub use openweather::OpenWeatherClient;
