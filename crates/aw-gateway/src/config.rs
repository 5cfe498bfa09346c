//! Gateway configuration.

use serde::Deserialize;

/// Top-level gateway configuration.
///
/// Built once at startup and handed to [`crate::state::AppState`]; nothing
/// reads provider credentials from the environment after that.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// NLP provider settings.
    #[serde(default)]
    pub huggingface: HuggingFaceConfig,
    /// Weather provider settings.
    #[serde(default)]
    pub openweather: OpenWeatherConfig,
}

/// Settings for the Hugging Face Inference API.
#[derive(Debug, Clone, Deserialize)]
pub struct HuggingFaceConfig {
    /// API base URL.
    #[serde(default = "default_hf_base_url")]
    pub base_url: String,
    /// Bearer token (HUGGINGFACE_API_TOKEN).
    #[serde(default)]
    pub api_token: Option<String>,
    /// Zero-shot classification model used for intent detection.
    #[serde(default = "default_intent_model")]
    pub intent_model: String,
    /// Text classification model used for sentiment.
    #[serde(default = "default_sentiment_model")]
    pub sentiment_model: String,
}

/// Settings for the OpenWeatherMap current-weather API.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenWeatherConfig {
    /// API base URL.
    #[serde(default = "default_owm_base_url")]
    pub base_url: String,
    /// API key (OPENWEATHER_API_KEY).
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_hf_base_url() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_intent_model() -> String {
    "facebook/bart-large-mnli".to_string()
}

fn default_sentiment_model() -> String {
    "distilbert-base-uncased-finetuned-sst-2-english".to_string()
}

fn default_owm_base_url() -> String {
    "http://api.openweathermap.org".to_string()
}

impl GatewayConfig {
    /// Load config from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(port = %raw, "invalid PORT, using default");
                default_port()
            }),
            None => default_port(),
        };

        Self {
            host: var("HOST").unwrap_or_else(default_host),
            port,
            huggingface: HuggingFaceConfig {
                base_url: var("HUGGINGFACE_API_URL").unwrap_or_else(default_hf_base_url),
                api_token: var("HUGGINGFACE_API_TOKEN"),
                intent_model: var("INTENT_MODEL").unwrap_or_else(default_intent_model),
                sentiment_model: var("SENTIMENT_MODEL").unwrap_or_else(default_sentiment_model),
            },
            openweather: OpenWeatherConfig {
                base_url: var("OPENWEATHER_API_URL").unwrap_or_else(default_owm_base_url),
                api_key: var("OPENWEATHER_API_KEY"),
            },
        }
    }

    /// `host:port` listen address.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            huggingface: HuggingFaceConfig::default(),
            openweather: OpenWeatherConfig::default(),
        }
    }
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self {
            base_url: default_hf_base_url(),
            api_token: None,
            intent_model: default_intent_model(),
            sentiment_model: default_sentiment_model(),
        }
    }
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_owm_base_url(),
            api_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3001);
        assert!(config.huggingface.api_token.is_none());
        assert!(config.openweather.api_key.is_none());
        assert_eq!(config.huggingface.intent_model, "facebook/bart-large-mnli");
    }

    #[test]
    fn reads_credentials_and_port() {
        let config = GatewayConfig::from_lookup(lookup(&[
            ("HUGGINGFACE_API_TOKEN", "hf_abc"),
            ("OPENWEATHER_API_KEY", "owm123"),
            ("PORT", "8080"),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.huggingface.api_token.as_deref(), Some("hf_abc"));
        assert_eq!(config.openweather.api_key.as_deref(), Some("owm123"));
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = GatewayConfig::from_lookup(lookup(&[("PORT", "not-a-port")]));
        assert_eq!(config.port, 3001);
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = GatewayConfig::from_lookup(lookup(&[
            ("OPENWEATHER_API_KEY", ""),
            ("HOST", "  "),
        ]));
        assert!(config.openweather.api_key.is_none());
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn provider_urls_are_overridable() {
        let config = GatewayConfig::from_lookup(lookup(&[
            ("HUGGINGFACE_API_URL", "http://127.0.0.1:9000"),
            ("OPENWEATHER_API_URL", "http://127.0.0.1:9001"),
            ("SENTIMENT_MODEL", "cardiffnlp/twitter-roberta-base-sentiment"),
        ]));
        assert_eq!(config.huggingface.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.openweather.base_url, "http://127.0.0.1:9001");
        assert_eq!(
            config.huggingface.sentiment_model,
            "cardiffnlp/twitter-roberta-base-sentiment"
        );
    }
}
