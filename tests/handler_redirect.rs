mod common;

use alias_shortener::routes::router;
use axum_test::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_redirect_after_create() {
    let (state, _repo) = common::create_test_state(None);
    let server = TestServer::new(router(state)).unwrap();

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/a/b", "alias": "cs391" }))
        .await
        .assert_status_ok();

    let response = server.get("/cs391").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/a/b");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _repo) = common::create_test_state(None);
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/never-inserted").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Page not found");
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let (state, _repo) = common::create_test_state(None);
    let server = TestServer::new(router(state)).unwrap();

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "alias": "Docs" }))
        .await
        .assert_status_ok();

    server.get("/docs").await.assert_status_not_found();
    assert_eq!(server.get("/Docs").await.status_code(), 302);
}

#[tokio::test]
async fn test_redirect_keeps_first_mapping_on_conflict() {
    let (state, _repo) = common::create_test_state(None);
    let server = TestServer::new(router(state)).unwrap();

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://a.com", "alias": "dup" }))
        .await
        .assert_status_ok();

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://b.com", "alias": "dup" }))
        .await
        .assert_status_bad_request();

    let response = server.get("/dup").await;
    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://a.com");
}

#[tokio::test]
async fn test_redirect_store_failure() {
    let server = TestServer::new(router(common::create_unavailable_state())).unwrap();

    let response = server.get("/anything").await;

    assert_eq!(response.status_code(), 500);
}
