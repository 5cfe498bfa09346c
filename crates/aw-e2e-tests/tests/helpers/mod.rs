//! Shared test harness for end-to-end tests.
//!
//! Runs a real gateway on an ephemeral port, with both third-party providers
//! replaced by a single wiremock server, and points an `Assistant` at it.

#![allow(dead_code)]

use std::net::SocketAddr;

use serde_json::{Value, json};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use aw_assistant::{Assistant, GatewayClient};
use aw_gateway::config::{GatewayConfig, HuggingFaceConfig, OpenWeatherConfig};
use aw_gateway::routes::build_router;
use aw_gateway::state::AppState;

pub const INTENT_PATH: &str = "/models/facebook/bart-large-mnli";
pub const SENTIMENT_PATH: &str = "/models/distilbert-base-uncased-finetuned-sst-2-english";
pub const WEATHER_PATH: &str = "/data/2.5/weather";

/// Gateway + providers harness.
pub struct TestHarness {
    /// Fake Hugging Face and OpenWeatherMap endpoints.
    pub providers: MockServer,
    /// Address the gateway is listening on.
    pub gateway_addr: SocketAddr,
    /// Assistant pointed at the gateway.
    pub assistant: Assistant,
}

impl TestHarness {
    pub async fn start() -> Self {
        let providers = MockServer::start().await;

        let config = GatewayConfig {
            host: "127.0.0.1".into(),
            port: 0,
            huggingface: HuggingFaceConfig {
                base_url: providers.uri(),
                api_token: Some("hf_e2e".into()),
                ..HuggingFaceConfig::default()
            },
            openweather: OpenWeatherConfig {
                base_url: providers.uri(),
                api_key: Some("owm_e2e".into()),
            },
        };

        let router = build_router(AppState::from_config(&config));
        let listener = TcpListener::bind(config.listen_addr()).await.unwrap();
        let gateway_addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let assistant = Assistant::new(GatewayClient::new(format!("http://{gateway_addr}")));

        Self {
            providers,
            gateway_addr,
            assistant,
        }
    }

    pub fn gateway_url(&self, path: &str) -> String {
        format!("http://{}{}", self.gateway_addr, path)
    }

    /// Stub the zero-shot intent model to rank `intent` first.
    pub async fn stub_intent(&self, intent: &str) {
        Mock::given(method("POST"))
            .and(path(INTENT_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sequence": "",
                "labels": [intent, "weather"],
                "scores": [0.8, 0.2]
            })))
            .mount(&self.providers)
            .await;
    }

    /// Stub the sentiment model with `label` as its top result.
    pub async fn stub_sentiment(&self, label: &str) {
        Mock::given(method("POST"))
            .and(path(SENTIMENT_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([[
                {"label": label, "score": 0.99}
            ]])))
            .mount(&self.providers)
            .await;
    }

    /// Stub current weather for `city`.
    pub async fn stub_weather(&self, city: &str, condition: &str, description: &str, temp: f64) {
        Mock::given(method("GET"))
            .and(path(WEATHER_PATH))
            .and(query_param("q", city))
            .respond_with(ResponseTemplate::new(200).set_body_json(weather_payload(
                city,
                condition,
                description,
                temp,
            )))
            .mount(&self.providers)
            .await;
    }

    /// Stub current weather for `city` with an exact JSON body.
    pub async fn stub_weather_raw(&self, city: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(WEATHER_PATH))
            .and(query_param("q", city))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json"))
            .mount(&self.providers)
            .await;
    }

    /// Make an NLP model fail with `status`.
    pub async fn fail_model(&self, model_path: &str, status: u16) {
        Mock::given(method("POST"))
            .and(path(model_path.to_string()))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({"error": "boom"})))
            .mount(&self.providers)
            .await;
    }
}

/// Minimal OpenWeatherMap current-weather payload.
pub fn weather_payload(city: &str, condition: &str, description: &str, temp: f64) -> Value {
    json!({
        "weather": [{"id": 800, "main": condition, "description": description, "icon": "01d"}],
        "main": {"temp": temp, "humidity": 50},
        "name": city,
        "cod": 200
    })
}
