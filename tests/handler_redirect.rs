mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use shortlink::domain::repositories::MappingRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_redirect_success() {
    let repo = common::memory_repository();
    common::create_test_mapping(&repo, "abc123", "https://example.com/target").await;
    let server = TestServer::new(common::create_test_app(repo.clone())).unwrap();

    let response = server.get("/abc123").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_counts_clicks() {
    let repo = common::memory_repository();
    common::create_test_mapping(&repo, "clickm", "https://example.com").await;
    let server = TestServer::new(common::create_test_app(repo.clone())).unwrap();

    for _ in 0..3 {
        assert_eq!(server.get("/clickm").await.status_code(), 302);
    }

    assert_eq!(repo.get_clicks("clickm").await.unwrap(), Some(3));
}

#[tokio::test]
async fn test_redirect_not_found() {
    let repo = common::memory_repository();
    let server = TestServer::new(common::create_test_app(repo.clone())).unwrap();

    let response = server.get("/doesNotExist").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_redirect_reserved_segment() {
    let server = TestServer::new(common::create_test_app(common::memory_repository())).unwrap();

    server.get("/stats").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_case_sensitive_codes() {
    let repo = common::memory_repository();
    common::create_test_mapping(&repo, "AbCdEf", "https://upper.com").await;
    let server = TestServer::new(common::create_test_app(repo)).unwrap();

    assert_eq!(server.get("/AbCdEf").await.status_code(), 302);
    server.get("/abcdef").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_post_not_allowed() {
    let repo = common::memory_repository();
    common::create_test_mapping(&repo, "abc123", "https://example.com").await;
    let server = TestServer::new(common::create_test_app(repo.clone())).unwrap();

    let response = server.post("/abc123").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(repo.get_clicks("abc123").await.unwrap(), Some(0));
}

#[tokio::test]
async fn test_redirect_survives_click_failure() {
    let repo = Arc::new(common::BrokenCounterRepository::new());
    common::create_test_mapping(&repo.inner, "broken", "https://example.com").await;
    let server = TestServer::new(common::create_test_app(repo.clone())).unwrap();

    let response = server.get("/broken").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com");
    assert_eq!(repo.attempts(), 1);
}

#[tokio::test]
async fn test_redirect_storage_unavailable() {
    let server =
        TestServer::new(common::create_test_app(Arc::new(common::UnavailableRepository))).unwrap();

    let response = server.get("/abc123").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_redirect_invalid_location_not_counted() {
    let repo = common::memory_repository();
    common::create_test_mapping(&repo, "nl0001", "https://example.com/a\nb").await;
    let server = TestServer::new(common::create_test_app(repo.clone())).unwrap();

    let response = server.get("/nl0001").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(repo.get_clicks("nl0001").await.unwrap(), Some(0));
}
