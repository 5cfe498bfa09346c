//! Question → reply flow.

use aw_protocol::WeatherSnapshot;

use crate::client::GatewayClient;
use crate::compose::{fallback_reply, weather_reply};
use crate::config::AssistantConfig;
use crate::error::AssistantResult;

/// Reply shown when any step of the flow fails.
pub const FAILURE_MESSAGE: &str = "Oops! Something went wrong. Please try again.";

/// Presentation client: one gateway round trip (two when a city is known)
/// per question, no memory between questions.
pub struct Assistant {
    gateway: GatewayClient,
}

impl Assistant {
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }

    pub fn from_config(config: &AssistantConfig) -> Self {
        Self::new(GatewayClient::new(config.gateway_url.clone()))
    }

    /// Answer a question. Failures become [`FAILURE_MESSAGE`]; nothing is retried.
    pub async fn ask(&self, text: &str) -> String {
        match self.try_ask(text).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "question failed");
                FAILURE_MESSAGE.to_string()
            }
        }
    }

    /// Answer a question, surfacing the underlying error.
    pub async fn try_ask(&self, text: &str) -> AssistantResult<String> {
        let analysis = self.gateway.analyze(text).await?;

        let Some(city) = analysis.resolved_city() else {
            tracing::debug!(sentiment = %analysis.sentiment, "no city in question");
            return Ok(fallback_reply(analysis.sentiment_kind()).to_string());
        };

        let payload = self.gateway.weather(city).await?;
        let weather = WeatherSnapshot::from_payload(&payload)?;

        tracing::debug!(
            city = %city,
            intent = %analysis.intent,
            condition = %weather.condition,
            temperature = weather.temperature,
            "composing reply"
        );

        Ok(weather_reply(&analysis.intent, city, &weather))
    }
}
