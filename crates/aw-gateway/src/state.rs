//! Shared application state for the Axum server.
//!
//! Holds only read-only provider handles; requests never share mutable state.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::nlp::{HuggingFaceClient, NlpProvider};
use crate::weather::{OpenWeatherClient, WeatherProvider};

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Intent and sentiment classification.
    pub nlp: Arc<dyn NlpProvider>,
    /// Current-weather lookups.
    pub weather: Arc<dyn WeatherProvider>,
}

impl AppState {
    /// Create state from explicit provider implementations (used by tests).
    pub fn new(nlp: Arc<dyn NlpProvider>, weather: Arc<dyn WeatherProvider>) -> Self {
        Self { nlp, weather }
    }

    /// Create state backed by the real HTTP providers.
    pub fn from_config(config: &GatewayConfig) -> Self {
        let http = reqwest::Client::new();
        Self {
            nlp: Arc::new(HuggingFaceClient::new(
                http.clone(),
                config.huggingface.clone(),
            )),
            weather: Arc::new(OpenWeatherClient::new(http, config.openweather.clone())),
        }
    }
}
