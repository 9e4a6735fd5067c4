// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use gazette::application::ports::time::Clock;
use gazette::application::services::ApplicationServices;
use gazette::domain::article::ArticleReadRepository;
use gazette::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;

use super::mocks::{FixedClock, StubArticleRead};

pub fn build_state(
    article_read: Arc<dyn ArticleReadRepository>,
    clock: Arc<dyn Clock>,
) -> HttpState {
    HttpState {
        services: Arc::new(ApplicationServices::new(article_read, clock)),
    }
}

pub fn make_router_with(
    article_read: Arc<dyn ArticleReadRepository>,
    clock: Arc<dyn Clock>,
) -> axum::Router {
    build_router(build_state(article_read, clock), &[])
}

/// Router with no published article and a frozen clock.
pub fn make_test_router() -> axum::Router {
    make_router_with(Arc::new(StubArticleRead(None)), Arc::new(FixedClock))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected JSON body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {}",
        ct
    );
    let json = json_body(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(
        err_field, expected_error,
        "unexpected error field: {}",
        err_field
    );
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
}
