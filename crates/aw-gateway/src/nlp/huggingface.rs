//! Hugging Face Inference API client.
//!
//! Intent detection uses a zero-shot classification model; sentiment uses a
//! text-classification model. Both live at `POST {base}/models/{model}`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::NlpProvider;
use crate::config::HuggingFaceConfig;
use crate::error::UpstreamError;

/// Request body for both model kinds.
#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<ZeroShotParameters<'a>>,
}

#[derive(Serialize)]
struct ZeroShotParameters<'a> {
    candidate_labels: &'a [&'a str],
}

/// Zero-shot response (only fields we need). Labels arrive sorted by score.
#[derive(Deserialize)]
struct ZeroShotResponse {
    labels: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ScoredLabel {
    label: String,
    #[serde(default)]
    score: f64,
}

/// Text classification comes back either flat or wrapped once per input.
#[derive(Deserialize)]
#[serde(untagged)]
enum SentimentResponse {
    Nested(Vec<Vec<ScoredLabel>>),
    Flat(Vec<ScoredLabel>),
}

impl SentimentResponse {
    fn top_label(self) -> Option<String> {
        let scores = match self {
            SentimentResponse::Nested(outer) => outer.into_iter().next()?,
            SentimentResponse::Flat(scores) => scores,
        };
        scores
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .map(|s| s.label)
    }
}

/// Client for the Hugging Face Inference API.
pub struct HuggingFaceClient {
    client: reqwest::Client,
    config: HuggingFaceConfig,
}

impl HuggingFaceClient {
    pub fn new(client: reqwest::Client, config: HuggingFaceConfig) -> Self {
        Self { client, config }
    }

    async fn infer<T: DeserializeOwned>(
        &self,
        model: &str,
        body: &InferenceRequest<'_>,
    ) -> Result<T, UpstreamError> {
        let url = format!("{}/models/{}", self.config.base_url.trim_end_matches('/'), model);

        let mut request = self.client.post(&url).json(body);
        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl NlpProvider for HuggingFaceClient {
    async fn classify_intent(&self, text: &str, labels: &[&str]) -> Result<String, UpstreamError> {
        let body = InferenceRequest {
            inputs: text,
            parameters: Some(ZeroShotParameters {
                candidate_labels: labels,
            }),
        };

        let response: ZeroShotResponse = self.infer(&self.config.intent_model, &body).await?;
        response
            .labels
            .into_iter()
            .next()
            .ok_or_else(|| UpstreamError::Malformed("zero-shot response has no labels".into()))
    }

    async fn classify_sentiment(&self, text: &str) -> Result<String, UpstreamError> {
        let body = InferenceRequest {
            inputs: text,
            parameters: None,
        };

        let response: SentimentResponse = self.infer(&self.config.sentiment_model, &body).await?;
        response
            .top_label()
            .ok_or_else(|| UpstreamError::Malformed("sentiment response has no labels".into()))
    }

    fn provider_name(&self) -> &str {
        "huggingface"
    }
}
