use axum::{http::StatusCode, response::IntoResponse};

use crate::services::get_metrics;

pub async fn metrics_endpoint() -> impl IntoResponse {
    match get_metrics() {
        Some(body) => (
            StatusCode::OK,
            [("content-type", "text/plain; charset=utf-8")],
            body,
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            [("content-type", "text/plain; charset=utf-8")],
            "metrics recorder not installed".to_string(),
        ),
    }
}
