// tests/support/helpers.rs
use std::sync::Arc;

use super::builders::{ArticleBuilder, user};
use super::mocks::MemoryStore;
use axum::body;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use once_cell::sync::Lazy;
use serde_json::Value;
use slug_routes::domain::{article::Article, binding::RecordStore, user::User};
use slug_routes::presentation::http::{routes::build_router, state::HttpState};

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("slug_routes=debug"))
        .with_test_writer()
        .try_init();
});

pub fn init_test_tracing() {
    Lazy::force(&TRACING);
}

/// Stores seeded with `hello-world` (id 1) and user 42.
pub fn seeded_stores() -> (Arc<MemoryStore<Article>>, Arc<MemoryStore<User>>) {
    let articles = Arc::new(MemoryStore::new(vec![ArticleBuilder::new().build()]));
    let users = Arc::new(MemoryStore::new(vec![user(42, "alice")]));
    (articles, users)
}

pub fn router_with(
    articles: Arc<dyn RecordStore<Article>>,
    users: Arc<dyn RecordStore<User>>,
) -> axum::Router {
    init_test_tracing();
    build_router(HttpState {
        articles,
        users,
        articles_fallback_path: "/articles".into(),
    })
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn json_body(resp: Response) -> Value {
    let (_, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts.headers.get("content-type").and_then(|v| v.to_str().ok()).unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
