//! Question analysis endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use aw_protocol::{AnalysisResult, AnalyzeRequest, CANDIDATE_LABELS};

use crate::city::city_or_unknown;
use crate::error::{ApiError, ApiResult, NLP_UNAVAILABLE};
use crate::state::AppState;

/// POST /analyze: classify intent and sentiment, extract the city.
///
/// Any provider failure collapses into a single 503; no partial result is
/// returned.
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> ApiResult<Json<AnalysisResult>> {
    let Json(req) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let text = req.text;

    let intent = state
        .nlp
        .classify_intent(&text, CANDIDATE_LABELS)
        .await
        .map_err(|e| {
            tracing::error!(
                provider = state.nlp.provider_name(),
                error = %e,
                "intent classification failed"
            );
            ApiError::ServiceUnavailable(NLP_UNAVAILABLE.into())
        })?;

    let city = city_or_unknown(&text);

    let sentiment = state.nlp.classify_sentiment(&text).await.map_err(|e| {
        tracing::error!(
            provider = state.nlp.provider_name(),
            error = %e,
            "sentiment classification failed"
        );
        ApiError::ServiceUnavailable(NLP_UNAVAILABLE.into())
    })?;

    tracing::info!(intent = %intent, city = %city, sentiment = %sentiment, "question analyzed");

    Ok(Json(AnalysisResult {
        intent,
        city,
        sentiment,
    }))
}
