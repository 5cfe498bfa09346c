//! API route definitions and router builder.

pub mod analyze;
pub mod health;
pub mod weather;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/analyze", post(analyze::analyze))
        .route("/weather", get(weather::get_weather))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
