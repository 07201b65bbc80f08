//! Land Cost API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{land_cost, FakeLandCostRepository, TestApp};

fn seeded() -> FakeLandCostRepository {
    FakeLandCostRepository {
        rows: vec![
            ("征地".to_string(), land_cost("1", "土地补偿费", "4.50", "90.00")),
            ("征地".to_string(), land_cost("2", "安置补助费", "3.00", "60.00")),
            ("拆迁".to_string(), land_cost("1", "房屋拆迁费", "1.25", "5.00")),
        ],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_lists_items_of_category_in_amis_envelope() {
    let app = TestApp::with_repository(seeded());

    let response = app
        .server
        .get("/api/land-costs")
        .add_query_param("category", "征地")
        .await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["status"], 0);
    assert_eq!(json["msg"], "");
    assert_eq!(
        json["data"]["items"][0],
        json!({
            "序号": "1",
            "项目名称": "土地补偿费",
            "单位": "亩",
            "单价（万元）": "4.50",
            "成本（万元）": "90.00",
        })
    );
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_missing_category_returns_no_items() {
    let app = TestApp::with_repository(seeded());

    let response = app.server.get("/api/land-costs").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["items"], json!([]));
    let repository = app.repository.as_ref().unwrap();
    assert!(repository.queried.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_category_returns_no_items() {
    let app = TestApp::with_repository(seeded());

    let response = app
        .server
        .get("/api/land-costs")
        .add_query_param("category", "其他")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["items"], json!([]));
}

#[tokio::test]
async fn test_database_failure_returns_error_envelope() {
    let app = TestApp::with_repository(FakeLandCostRepository {
        fail: true,
        ..Default::default()
    });

    let response = app
        .server
        .get("/api/land-costs")
        .add_query_param("category", "征地")
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let json: Value = response.json();
    assert_ne!(json["status"], 0);
    assert_eq!(json["msg"], "Error fetching data");
}

#[tokio::test]
async fn test_without_database_is_unavailable() {
    let app = TestApp::without_database();

    let response = app
        .server
        .get("/api/land-costs")
        .add_query_param("category", "征地")
        .await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}
