//! OpenWeatherMap current-weather client (`/data/2.5/weather`, metric units).

use async_trait::async_trait;
use axum::body::Bytes;
use serde::de::IgnoredAny;

use super::WeatherProvider;
use crate::config::OpenWeatherConfig;
use crate::error::UpstreamError;

/// Client for the OpenWeatherMap API.
pub struct OpenWeatherClient {
    client: reqwest::Client,
    config: OpenWeatherConfig,
}

impl OpenWeatherClient {
    pub fn new(client: reqwest::Client, config: OpenWeatherConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, city: &str) -> Result<Bytes, UpstreamError> {
        let url = format!(
            "{}/data/2.5/weather",
            self.config.base_url.trim_end_matches('/')
        );

        let mut query = vec![("q", city), ("units", "metric")];
        if let Some(key) = &self.config.api_key {
            query.push(("appid", key.as_str()));
        }

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        serde_json::from_slice::<IgnoredAny>(&body)
            .map_err(|e| UpstreamError::Malformed(e.to_string()))?;
        Ok(body)
    }

    fn provider_name(&self) -> &str {
        "openweather"
    }
}
