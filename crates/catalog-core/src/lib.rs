//! catalog-core: product catalog generation and search.
//!
//! This crate holds everything the service does that is not HTTP: the
//! synthetic catalog, the bounded-scan search evaluator, configuration, and
//! the error types shared with the server.
//!
//! # Architecture
//!
//! ```text
//! Config ──► Catalog::generate ──► Arc<Catalog> ──► search ──► SearchResult
//!                                                     ▲
//!                                         Query::parse(raw text)
//! ```
//!
//! The catalog is built once at startup and only ever read afterwards, so
//! concurrent searches share it without any locking.

pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod types;

pub use catalog::Catalog;
pub use error::SearchError;
pub use search::{search, Query, SearchLimits, SearchResult};
pub use types::Product;
