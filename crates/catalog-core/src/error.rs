//! Error types for catalog-core.

/// Reasons a query is refused before any record is scanned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The query text was missing or empty. A client fault; never retried.
    #[error("Missing query parameter 'q'")]
    InvalidQuery,
}
