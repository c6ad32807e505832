mod common;

use axum::http::StatusCode;
use serde_json::Value;
use shelter_stats::infrastructure::http::HttpStoreClient;
use shelter_stats::state::AppState;
use std::sync::Arc;
use std::time::Duration;
use wiremock::MockServer;

#[tokio::test]
async fn test_health_endpoint_success() {
    let backend = MockServer::start().await;
    let server = common::create_test_server(common::create_test_state(&backend));

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["record_store"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_degraded_when_store_unreachable() {
    let client = HttpStoreClient::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
    let state = AppState::new(Arc::new(client), 4, 12);
    let server = common::create_test_server(state);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["record_store"]["status"], "error");
}

#[tokio::test]
async fn test_health_does_not_expose_store_password() {
    let backend = MockServer::start().await;
    let url = format!("http://svc:secret123@{}", backend.address());
    let client = HttpStoreClient::new(&url, Duration::from_secs(2)).unwrap();
    let server = common::create_test_server(AppState::new(Arc::new(client), 4, 12));

    let response = server.get("/health").await;

    response.assert_status_ok();

    let message = response.json::<Value>()["checks"]["record_store"]["message"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(!message.contains("secret123"), "{message}");
    assert!(message.contains("svc:***@"), "{message}");
}
