#![allow(dead_code)]

use axum::body::{Body, to_bytes};
use axum::http::{Request, Response};
use mem_shortener::domain::entities::Link;
use mem_shortener::domain::repositories::LinkRepository;
use mem_shortener::infrastructure::persistence::MemoryLinkRepository;
use mem_shortener::state::AppState;
use std::sync::Arc;

/// Body limit used by tests that build the full router.
pub const TEST_BODY_LIMIT: usize = 64 * 1024;

/// Creates state over a fresh store, returning the store for inspection.
pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let link_repo = Arc::new(MemoryLinkRepository::new());
    let state = AppState::new(link_repo.clone());
    (state, link_repo)
}

pub async fn create_test_link(repo: &MemoryLinkRepository, code: &str, url: &str) {
    repo.create(Link::new(code, url)).await.unwrap();
}

pub async fn link_count(repo: &MemoryLinkRepository) -> usize {
    repo.count().await.unwrap()
}

pub fn shorten_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/shorten")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
