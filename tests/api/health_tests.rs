//! Health Check API Tests

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::without_database();

    let response = app.server.get("/health").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["name"], "Project_name");
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::without_database();

    let response = app.server.get("/health/live").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "alive");
}

#[tokio::test]
async fn test_readiness_without_database_is_healthy() {
    let app = TestApp::without_database();

    let response = app.server.get("/health/ready").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let json: Value = response.json();
    assert_eq!(json["status"], "healthy");
    assert!(json["checks"].get("database").is_none());
}
