//! Assistant configuration, loadable from TOML or defaults.

use serde::Deserialize;

/// Top-level configuration for the presentation client.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Base URL of the request gateway.
    #[serde(default = "default_gateway_url")]
    pub gateway_url: String,
}

fn default_gateway_url() -> String {
    "http://localhost:3001".into()
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            gateway_url: default_gateway_url(),
        }
    }
}

impl AssistantConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Apply a `GATEWAY_URL` override, if one is given and non-empty.
    pub fn with_gateway_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.gateway_url = url;
        }
        self
    }
}
