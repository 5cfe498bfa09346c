//! Liveness probe.

use axum::Json;
use serde_json::{Value, json};

/// GET /health: the gateway is up. Providers are not contacted.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
