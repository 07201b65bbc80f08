//! Static File Tests

use crate::common::{TestApp, APP_JS, INDEX_HTML};

#[tokio::test]
async fn test_public_files_are_served() {
    let app = TestApp::without_database();

    let response = app.server.get("/public/app.js").await;

    response.assert_status_ok();
    assert_eq!(response.text(), APP_JS);
}

#[tokio::test]
async fn test_pages_are_served() {
    let app = TestApp::without_database();

    let response = app.server.get("/pages/report.html").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "<h1>report</h1>");
}

#[tokio::test]
async fn test_unknown_paths_fall_back_to_index() {
    let app = TestApp::without_database();

    let response = app.server.get("/projects/42/costs").await;

    response.assert_status_ok();
    assert_eq!(response.text(), INDEX_HTML);
}

#[tokio::test]
async fn test_missing_static_files_fall_back_to_index() {
    let app = TestApp::without_database();

    for path in ["/public/missing.js", "/pages/missing.html"] {
        let response = app.server.get(path).await;

        response.assert_status_ok();
        assert_eq!(response.text(), INDEX_HTML);
    }
}
