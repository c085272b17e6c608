//! catalog-search: in-memory product catalog search service.
//!
//! The search logic lives in [`catalog_core`]; this crate adds the HTTP
//! boundary so that integration tests can drive the router directly.
//!
//! # Architecture
//!
//! ```text
//! main ──► Config ──► Catalog::generate ──► server::router ──► axum::serve
//!                                                │
//!                               GET /products/search ──► catalog_core::search
//! ```

pub mod server;

pub use catalog_core::{config, Catalog, Product, Query, SearchError, SearchLimits, SearchResult};
pub use server::{router, AppState};
