//! Natural-language classification of user questions.
//!
//! The gateway asks a remote provider for two things per question: the
//! best-matching intent among a fixed label set, and a sentiment label.

pub mod huggingface;

use async_trait::async_trait;

use crate::error::UpstreamError;

/// Trait for remote NLP providers.
#[async_trait]
pub trait NlpProvider: Send + Sync {
    /// Zero-shot classify `text` against `labels`, returning the top label.
    async fn classify_intent(&self, text: &str, labels: &[&str]) -> Result<String, UpstreamError>;

    /// Classify the sentiment of `text`, returning the top label.
    async fn classify_sentiment(&self, text: &str) -> Result<String, UpstreamError>;

    /// Name of this provider (for logging).
    fn provider_name(&self) -> &str;
}

pub use huggingface::HuggingFaceClient;
