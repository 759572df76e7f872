//! Gemini gateway against a local stub of the `generateContent` API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use bfhl_service::services::providers::gemini::{GeminiConfig, GeminiGateway};
use bfhl_service::services::{AiGateway, GatewayError};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    reply: Value,
    delay: Duration,
    seen: Arc<Mutex<Vec<(String, String, Value)>>>,
}

async fn generate(
    State(stub): State<Stub>,
    Path(model_method): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    stub.seen.lock().unwrap().push((
        model_method,
        query.get("key").cloned().unwrap_or_default(),
        body,
    ));
    tokio::time::sleep(stub.delay).await;
    (stub.status, Json(stub.reply.clone()))
}

/// Serve the stub on an ephemeral port and return its base URL.
async fn spawn_stub(stub: Stub) -> String {
    let app = Router::new()
        .route("/v1beta/models/:model_method", post(generate))
        .with_state(stub);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://127.0.0.1:{}/v1beta", port)
}

fn stub(status: StatusCode, reply: Value) -> Stub {
    Stub {
        status,
        reply,
        delay: Duration::ZERO,
        seen: Arc::new(Mutex::new(Vec::new())),
    }
}

fn gateway(api_base: String, api_key: &str, timeout: Duration) -> GeminiGateway {
    GeminiGateway::new(GeminiConfig {
        api_key: api_key.to_string(),
        model: "gemini-1.5-flash".to_string(),
        api_base,
        timeout,
    })
    .expect("client should build")
}

#[tokio::test]
async fn returns_first_candidate_text() {
    let s = stub(
        StatusCode::OK,
        json!({"candidates": [{"content": {"parts": [{"text": "Paris\n"}], "role": "model"}}]}),
    );
    let seen = s.seen.clone();
    let base = spawn_stub(s).await;

    let reply = gateway(base, "secret", Duration::from_secs(5))
        .ask("Capital of France?. Answer in ONE word only.")
        .await
        .unwrap();

    assert_eq!(reply, "Paris\n");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "gemini-1.5-flash:generateContent");
    assert_eq!(seen[0].1, "secret");
    assert_eq!(
        seen[0].2,
        json!({"contents": [{"parts": [{"text": "Capital of France?. Answer in ONE word only."}]}]})
    );
}

#[tokio::test]
async fn unexpected_shape_falls_back_to_unknown() {
    let base = spawn_stub(stub(StatusCode::OK, json!({"promptFeedback": {}}))).await;

    let reply = gateway(base, "secret", Duration::from_secs(5))
        .ask("q")
        .await
        .unwrap();

    assert_eq!(reply, "Unknown");
}

#[tokio::test]
async fn error_status_is_api_error() {
    let base = spawn_stub(stub(
        StatusCode::BAD_REQUEST,
        json!({"error": {"message": "API key not valid"}}),
    ))
    .await;

    let err = gateway(base, "secret", Duration::from_secs(5))
        .ask("q")
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::ApiError(_)));
}

#[tokio::test]
async fn too_many_requests_is_rate_limited() {
    let base = spawn_stub(stub(StatusCode::TOO_MANY_REQUESTS, json!({}))).await;

    let err = gateway(base, "secret", Duration::from_secs(5))
        .ask("q")
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::RateLimited));
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let mut s = stub(StatusCode::OK, json!({}));
    s.delay = Duration::from_secs(5);
    let base = spawn_stub(s).await;

    let err = gateway(base, "secret", Duration::from_millis(100))
        .ask("q")
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Timeout(100)));
}

#[tokio::test]
async fn missing_key_is_not_configured() {
    let g = gateway("http://127.0.0.1:9/v1beta".to_string(), "", Duration::from_secs(1));

    assert!(matches!(
        g.ask("q").await.unwrap_err(),
        GatewayError::NotConfigured(_)
    ));
    assert!(g.health_check().await.is_err());
}
