mod common;

use axum::http::StatusCode;
use common::spawn_app;

#[tokio::test]
async fn health_reports_ok_with_database_check() {
    let app = spawn_app().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
    assert!(body["version"].as_str().is_some_and(|v| !v.is_empty()));
}
