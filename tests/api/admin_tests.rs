//! Admin Site Tests

use serde_json::Value;

use crate::common::TestApp;

#[tokio::test]
async fn test_admin_shell_is_html() {
    let app = TestApp::without_database();

    let response = app.server.get("/admin").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<title>Amis Admin</title>"));
    assert!(html.contains("https://unpkg.com/amis@6.3.0/sdk/sdk.js"));
}

#[tokio::test]
async fn test_schema_lists_registered_apps() {
    let app = TestApp::without_database();

    let response = app.server.get("/admin/schema").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["status"], 0);
    assert_eq!(json["data"]["type"], "app");

    let apps = json["data"]["pages"][0]["children"].as_array().unwrap();
    let app_name = apps.iter().find(|a| a["label"] == "App_name").unwrap();
    assert_eq!(app_name["icon"], "fa fa-bolt");
    assert_eq!(app_name["url"], "/admin/app_name");
    assert_eq!(app_name["children"].as_array().unwrap().len(), 0);

    let land_cost = apps.iter().find(|a| a["url"] == "/admin/land_cost").unwrap();
    assert_eq!(
        land_cost["children"][0]["schemaApi"],
        "get:/admin/land_cost/estimate"
    );
}

#[tokio::test]
async fn test_page_schema_is_served_at_page_path() {
    let app = TestApp::without_database();

    let response = app.server.get("/admin/land_cost/estimate").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["status"], 0);
    assert_eq!(json["data"]["type"], "page");
    assert_eq!(json["data"]["body"]["type"], "crud");
}
