//! Test builders: routers and limits with readable defaults.
//!
//! These are for test assertions, not production use. They panic on invalid
//! input rather than returning `Result`.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use catalog_core::{Catalog, SearchLimits};
use catalog_search::{router, AppState};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// LimitsBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`SearchLimits`], starting from the service defaults.
///
/// ```rust
/// let limits = LimitsBuilder::new().scan(1_000).cap(5).build();
/// ```
pub struct LimitsBuilder {
    limits: SearchLimits,
}

impl LimitsBuilder {
    pub fn new() -> Self {
        Self { limits: SearchLimits::default() }
    }

    pub fn scan(mut self, scan_limit: usize) -> Self {
        self.limits.scan_limit = scan_limit;
        self
    }

    pub fn cap(mut self, result_cap: usize) -> Self {
        self.limits.result_cap = result_cap;
        self
    }

    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.limits.deadline = Some(deadline);
        self
    }

    pub fn build(self) -> SearchLimits {
        self.limits
    }
}

// ---------------------------------------------------------------------------
// Router helpers
// ---------------------------------------------------------------------------

/// Router over `catalog` with default limits.
pub fn test_router(catalog: Arc<Catalog>) -> Router {
    test_router_with(catalog, SearchLimits::default())
}

pub fn test_router_with(catalog: Arc<Catalog>, limits: SearchLimits) -> Router {
    router(AppState::new(catalog, limits))
}

/// Issue a GET and return status, content type and body text.
pub async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

/// GET `uri` and parse a 200 JSON body.
pub async fn get_json(app: Router, uri: &str) -> serde_json::Value {
    let (status, _, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK, "unexpected status, body: {body}");
    serde_json::from_str(&body).unwrap()
}
