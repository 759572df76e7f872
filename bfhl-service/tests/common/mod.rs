//! Test helpers for bfhl-service integration tests.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use bfhl_service::config::{BfhlConfig, CorsSettings, GeminiSettings};
use bfhl_service::services::providers::mock::MockAiGateway;
use bfhl_service::services::AiGateway;
use bfhl_service::startup::{build_router, AppState};
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use tower::util::ServiceExt;

pub const TEST_EMAIL: &str = "student@example.edu";

pub fn test_config() -> BfhlConfig {
    BfhlConfig {
        common: CoreConfig {
            port: 0,
            log_level: "error".to_string(),
        },
        official_email: TEST_EMAIL.to_string(),
        gemini: GeminiSettings {
            api_key: "test-api-key".to_string(),
            model: "gemini-1.5-flash".to_string(),
            api_base: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
        },
        cors: CorsSettings {
            allowed_origins: vec!["*".to_string()],
        },
    }
}

pub fn router_with(gateway: impl AiGateway + 'static) -> Router {
    let gateway: Arc<dyn AiGateway> = Arc::new(gateway);
    build_router(AppState::new(test_config(), gateway))
}

/// Router whose AI gateway always answers "Paris".
pub fn default_router() -> Router {
    router_with(MockAiGateway::replying("Paris"))
}

/// POST a raw body to `/bfhl` and decode the JSON reply.
pub async fn post_raw(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/bfhl")
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).expect("response should be JSON");
    (status, json)
}

pub async fn post_json(app: Router, body: Value) -> (StatusCode, Value) {
    post_raw(app, body.to_string()).await
}
