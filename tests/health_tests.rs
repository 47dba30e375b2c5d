mod common;

use serde_json::Value;
use std::sync::Arc;

use common::{UnavailableStore, spawn_app};

#[tokio::test]
async fn test_healthz_does_not_touch_the_store() {
    let app = spawn_app(Arc::new(UnavailableStore)).await;

    let resp = app.client.get(app.url("/healthz")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = spawn_app(Arc::new(UnavailableStore)).await;

    let resp = app
        .client
        .get(app.url("/healthz"))
        .header("x-request-id", "trace-123")
        .send()
        .await
        .unwrap();
    assert_eq!(
        resp.headers().get("x-request-id").and_then(|v| v.to_str().ok()),
        Some("trace-123")
    );

    let resp = app.client.get(app.url("/healthz")).send().await.unwrap();
    let generated = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("generated request id");
    assert!(uuid::Uuid::parse_str(generated).is_ok());
}
