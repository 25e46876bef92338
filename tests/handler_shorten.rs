mod common;

use alias_shortener::routes::router;
use axum_test::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_shorten_success() {
    let (state, repo) = common::create_test_state(None);
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://example.com/a/b",
            "alias": "cs391"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["shortenedUrl"], "http://localhost:3000/cs391");

    let stored = repo.get("cs391").unwrap();
    assert_eq!(stored.original_url, "https://example.com/a/b");
}

#[tokio::test]
async fn test_shorten_uses_configured_base_url() {
    let (state, _repo) = common::create_test_state(Some("https://sho.rt"));
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .add_header("Origin", "https://ignored.example")
        .json(&json!({ "url": "http://example.com", "alias": "cfg" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["shortenedUrl"], "https://sho.rt/cfg");
}

#[tokio::test]
async fn test_shorten_uses_request_origin() {
    let (state, _repo) = common::create_test_state(None);
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .add_header("Origin", "https://app.example")
        .json(&json!({ "url": "https://example.com", "alias": "origin" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["shortenedUrl"], "https://app.example/origin");
}

#[tokio::test]
async fn test_shorten_missing_fields() {
    let (state, repo) = common::create_test_state(None);
    let server = TestServer::new(router(state)).unwrap();

    for body in [
        json!({ "url": "https://example.com" }),
        json!({ "alias": "x" }),
        json!({ "url": "", "alias": "x" }),
        json!({ "url": "https://example.com", "alias": "" }),
        json!({}),
    ] {
        let response = server.post("/api/shorten").json(&body).await;

        response.assert_status_bad_request();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"], "URL and alias are required");
    }

    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_shorten_invalid_scheme() {
    let (state, repo) = common::create_test_state(None);
    let server = TestServer::new(router(state)).unwrap();

    for url in ["ftp://x.com", "example.com"] {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "url": url, "alias": "x" }))
            .await;

        response.assert_status_bad_request();

        let json = response.json::<serde_json::Value>();
        assert_eq!(
            json["error"],
            "Invalid URL. Must start with http:// or https://"
        );
    }

    assert!(repo.get("x").is_none());
}

#[tokio::test]
async fn test_shorten_alias_taken() {
    let (state, repo) = common::create_test_state(None);
    let server = TestServer::new(router(state)).unwrap();

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://a.com", "alias": "dup" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://b.com", "alias": "dup" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["error"],
        "This alias is already taken. Please choose another one."
    );

    assert_eq!(repo.get("dup").unwrap().original_url, "https://a.com");
}

#[tokio::test]
async fn test_shorten_store_failure() {
    let server = TestServer::new(router(common::create_unavailable_state())).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://a.com", "alias": "down" }))
        .await;

    assert_eq!(response.status_code(), 500);

    let json = response.json::<serde_json::Value>();
    let error = json["error"].as_str().unwrap();
    assert!(error.starts_with("Something went wrong: "));
}

#[tokio::test]
async fn test_shorten_unreadable_body() {
    let (state, repo) = common::create_test_state(None);
    let server = TestServer::new(router(state)).unwrap();

    let response = server.post("/api/shorten").text("url=https://a.com").await;

    assert_eq!(response.status_code(), 500);

    let json = response.json::<serde_json::Value>();
    let error = json["error"].as_str().unwrap();
    assert!(error.starts_with("Something went wrong: "));
    assert_eq!(repo.len(), 0);
}
