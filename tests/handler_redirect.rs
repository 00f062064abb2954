mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use mem_shortener::api::handlers::redirect_handler;
use mem_shortener::infrastructure::persistence::MemoryLinkRepository;
use serde_json::{Value, json};
use std::sync::Arc;

fn redirect_server() -> (TestServer, Arc<MemoryLinkRepository>) {
    let (state, repo) = common::create_test_state();
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), repo)
}

#[tokio::test]
async fn test_redirect_success() {
    let (server, repo) = redirect_server();
    common::create_test_link(&repo, "Ab3dEf92", "https://example.com/target").await;

    let response = server.get("/Ab3dEf92").await;

    assert_eq!(response.status_code(), 308);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _repo) = redirect_server();

    let response = server.get("/zzzzzzzz").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "url not found");
}

#[tokio::test]
async fn test_redirect_malformed_code_not_found() {
    let (server, _repo) = redirect_server();

    let response = server.get("/doesNotExist").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "url not found");
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let (server, repo) = redirect_server();
    common::create_test_link(&repo, "abcdefgh", "https://example.com").await;

    let response = server.get("/ABCDEFGH").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_does_not_modify_store() {
    let (server, repo) = redirect_server();
    common::create_test_link(&repo, "keepMe01", "https://example.com").await;

    for _ in 0..3 {
        assert_eq!(server.get("/keepMe01").await.status_code(), 308);
    }
    server.get("/missing1").await;

    assert_eq!(common::link_count(&repo).await, 1);
}

#[tokio::test]
async fn test_redirect_preserves_query_and_fragment() {
    let (server, repo) = redirect_server();
    common::create_test_link(
        &repo,
        "qUeRy123",
        "https://example.com/search?q=rust&page=2#top",
    )
    .await;

    let response = server.get("/qUeRy123").await;

    assert_eq!(response.status_code(), 308);
    assert_eq!(
        response.header("location"),
        "https://example.com/search?q=rust&page=2#top"
    );
}

#[tokio::test]
async fn test_redirect_relative_reference_passed_through() {
    let (server, repo) = redirect_server();
    common::create_test_link(&repo, "reLaTiv1", "example.com/page").await;
    common::create_test_link(&repo, "reLaTiv2", "/path").await;

    let response = server.get("/reLaTiv1").await;
    assert_eq!(response.status_code(), 308);
    assert_eq!(response.header("location"), "example.com/page");

    let response = server.get("/reLaTiv2").await;
    assert_eq!(response.status_code(), 308);
    assert_eq!(response.header("location"), "/path");
}

#[tokio::test]
async fn test_redirect_unsendable_location_gives_json_500() {
    let (server, repo) = redirect_server();
    // Only reachable by writing to the store directly; the shorten endpoint
    // rejects such URLs.
    common::create_test_link(&repo, "brOken01", "https://example.com/a\nb").await;

    let response = server.get("/brOken01").await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(response.header("content-type"), "application/json");
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "something went wrong" })
    );
}
