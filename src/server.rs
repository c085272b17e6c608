//! HTTP layer: axum router over a shared, immutable catalog.
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /products/search?q=` | pretty-printed JSON [`SearchResponse`] |
//! | `GET /health` | `OK` |

use std::sync::Arc;
use std::time::Duration;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use catalog_core::{Catalog, Product, Query as SearchQuery, SearchError, SearchLimits};
use serde::Serialize;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Router state. Cloned per request; the catalog itself is never copied.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub limits: SearchLimits,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, limits: SearchLimits) -> Self {
        Self { catalog, limits }
    }
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/products/search", get(search_products))
        .route("/health", get(health))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// JSON body of a successful search.
#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    pub products: Vec<&'a Product>,
    pub total_found: usize,
    pub search_time: String,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures surfaced to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidQuery(#[from] SearchError),
    #[error("failed to encode response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> String {
        match self {
            Self::InvalidQuery(err) => err.to_string(),
            Self::Serialization(_) => "Failed to encode response".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Serialization(err) = &self {
            tracing::error!(error = %err, "failed to encode search response");
        }
        (self.status(), self.body()).into_response()
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn search_products(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(pairs) = params.map_err(|_| SearchError::InvalidQuery)?;
    let query = SearchQuery::parse(&first_q(pairs))?;
    let result = query.scan(&state.catalog, &state.limits);

    if result.timed_out {
        tracing::warn!(
            query = %query,
            scanned = result.scanned,
            "search deadline exceeded; returning partial result"
        );
    }
    tracing::debug!(
        query = %query,
        total_found = result.total_found,
        returned = result.products.len(),
        elapsed_us = elapsed_micros(result.elapsed),
        "search complete"
    );

    let search_time = result.search_time();
    let body = serde_json::to_string_pretty(&SearchResponse {
        products: result.products,
        total_found: result.total_found,
        search_time,
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Value of the first `q` pair, or empty when there is none. Later `q`
/// pairs are ignored.
fn first_q(pairs: Vec<(String, String)>) -> String {
    pairs
        .into_iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value)
        .unwrap_or_default()
}

/// Whole microseconds, saturating at `u64::MAX`.
fn elapsed_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

async fn health() -> &'static str {
    "OK"
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
