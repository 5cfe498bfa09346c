use serde::{Deserialize, Serialize};

/// City value reported when no city could be extracted from the text.
pub const UNKNOWN_CITY: &str = "unknown";

/// Labels offered to the zero-shot intent classifier.
pub const CANDIDATE_LABELS: &[&str] = &[
    "weather",
    "temperature",
    "rain",
    "sunny",
    "forecast",
    "cold",
    "hot",
];

/// Request body for `POST /analyze`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Free-form user question.
    #[serde(default)]
    pub text: String,
}

/// Result of analysing a user question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Top-ranked intent label (one of [`CANDIDATE_LABELS`]).
    pub intent: String,
    /// Extracted city, or [`UNKNOWN_CITY`].
    pub city: String,
    /// Sentiment label as returned by the classifier (e.g. "POSITIVE").
    pub sentiment: String,
}

impl AnalysisResult {
    /// The city, if one was extracted.
    pub fn resolved_city(&self) -> Option<&str> {
        let city = self.city.trim();
        if city.is_empty() || city == UNKNOWN_CITY {
            None
        } else {
            Some(city)
        }
    }

    /// Typed view of the sentiment label.
    pub fn sentiment_kind(&self) -> Sentiment {
        Sentiment::from_label(&self.sentiment)
    }
}

/// Sentiment polarity of the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Map a classifier label to a polarity. Anything other than the exact
    /// upper-case `POSITIVE`/`NEGATIVE` labels is neutral.
    pub fn from_label(label: &str) -> Self {
        match label {
            "POSITIVE" => Sentiment::Positive,
            "NEGATIVE" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}

/// JSON error payload shared by every failing gateway endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
