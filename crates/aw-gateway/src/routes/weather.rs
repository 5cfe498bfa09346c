//! Weather passthrough endpoint.

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use aw_protocol::DEFAULT_CITY;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Resolve the `city` parameter. Repeated values are joined with commas,
/// and an absent or empty city falls back to the default.
fn resolve_city(query: Result<Query<Vec<(String, String)>>, QueryRejection>) -> String {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "unreadable weather query");
            Vec::new()
        }
    };

    let city = pairs
        .into_iter()
        .filter(|(key, _)| key == "city")
        .map(|(_, value)| value)
        .collect::<Vec<_>>()
        .join(",");

    if city.is_empty() {
        DEFAULT_CITY.to_string()
    } else {
        city
    }
}

fn json_body(payload: Bytes) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], payload).into_response()
}

/// GET /weather?city=: forward the provider payload verbatim.
pub async fn get_weather(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Response> {
    let city = resolve_city(query);

    match state.weather.current(&city).await {
        Ok(payload) => Ok(json_body(payload)),
        Err(e) => {
            tracing::error!(
                provider = state.weather.provider_name(),
                city = %city,
                error = %e,
                "weather fetch failed"
            );
            Err(ApiError::Internal(e.to_string()))
        }
    }
}
