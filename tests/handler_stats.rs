mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_stats_new_mapping_has_zero_clicks() {
    let repo = common::memory_repository();
    common::create_test_mapping(&repo, "abc123", "https://example.com").await;
    let server = TestServer::new(common::create_test_app(repo)).unwrap();

    let response = server.get("/stats/abc123").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "short_url": "abc123", "clicks": 0 }));
}

#[tokio::test]
async fn test_stats_reflects_redirects_only() {
    let repo = common::memory_repository();
    common::create_test_mapping(&repo, "count1", "https://example.com").await;
    let server = TestServer::new(common::create_test_app(repo)).unwrap();

    server.get("/count1").await;
    server.get("/count1").await;
    // Stats reads must not count as clicks.
    server.get("/stats/count1").await.assert_status_ok();

    let response = server.get("/stats/count1").await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["clicks"], 2);
}

#[tokio::test]
async fn test_stats_not_found() {
    let server = TestServer::new(common::create_test_app(common::memory_repository())).unwrap();

    let response = server.get("/stats/doesNotExist").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_stats_post_not_allowed() {
    let server = TestServer::new(common::create_test_app(common::memory_repository())).unwrap();

    server
        .post("/stats/abc123")
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_stats_storage_unavailable() {
    let server =
        TestServer::new(common::create_test_app(Arc::new(common::UnavailableRepository))).unwrap();

    server
        .get("/stats/abc123")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_shorten_redirect_stats_flow() {
    let server = TestServer::new(common::create_test_app(common::memory_repository())).unwrap();

    let created = server
        .post("/shorten")
        .json(&json!({ "url": "https://flow.example.com/page" }))
        .await
        .json::<serde_json::Value>();
    let short_url = created["short_url"].as_str().unwrap();
    let code = short_url.rsplit('/').next().unwrap();

    let redirect = server.get(&format!("/{code}")).await;
    assert_eq!(redirect.status_code(), 302);
    assert_eq!(redirect.header("location"), "https://flow.example.com/page");

    let stats = server
        .get(&format!("/stats/{code}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(stats["short_url"], code);
    assert_eq!(stats["clicks"], 1);
}
