//! Health and routing surface tests.

mod common;

use common::TestApp;

#[tokio::test]
async fn health_check_reports_ok() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute health request");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Health body was not JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "parking-service");
}

#[tokio::test]
async fn unmatched_route_answers_with_a_json_body() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/no-such-route", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.expect("404 body was not JSON");
    assert_eq!(body["error"], "Resource not found");
}
