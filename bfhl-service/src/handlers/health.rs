use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::startup::AppState;

/// Liveness probe. Also advertises the configured identity.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "is_success": true,
        "official_email": state.config.official_email,
        "status": "ok",
        "service": "bfhl-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe: ready once the AI gateway is usable.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.dispatcher.gateway().health_check().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "AI gateway not ready");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
