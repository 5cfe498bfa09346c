//! HTTP client for the request gateway.

use serde_json::Value;

use aw_protocol::{AnalysisResult, AnalyzeRequest, ErrorBody};

use crate::error::{AssistantError, AssistantResult};

/// Client for the gateway's `/analyze` and `/weather` endpoints.
pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// POST /analyze.
    pub async fn analyze(&self, text: &str) -> AssistantResult<AnalysisResult> {
        let body = AnalyzeRequest {
            text: text.to_string(),
        };
        let response = self
            .client
            .post(format!("{}/analyze", self.base_url))
            .json(&body)
            .send()
            .await?;

        Ok(check_status(response).await?.json().await?)
    }

    /// GET /weather?city=: the raw provider payload.
    pub async fn weather(&self, city: &str) -> AssistantResult<Value> {
        let response = self
            .client
            .get(format!("{}/weather", self.base_url))
            .query(&[("city", city)])
            .send()
            .await?;

        Ok(check_status(response).await?.json().await?)
    }
}

/// Turn a non-success gateway response into an error, keeping its message.
async fn check_status(response: reqwest::Response) -> AssistantResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };

    Err(AssistantError::Gateway {
        status: status.as_u16(),
        message,
    })
}
