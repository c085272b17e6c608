//! Search layer: bounded substring scan over the catalog.
//!
//! A search examines at most [`SearchLimits::scan_limit`] products, starting
//! from id 1. Products past that window are never matched, however large the
//! catalog is; this keeps per-query latency independent of catalog size.
//! Within the window every match is counted, but only the first
//! [`SearchLimits::result_cap`] are returned.

use std::time::{Duration, Instant};

use crate::catalog::Catalog;
use crate::error::SearchError;
use crate::types::Product;

/// Records examined per query when not configured.
pub const DEFAULT_SCAN_LIMIT: usize = 100;
/// Records returned per query when not configured.
pub const DEFAULT_RESULT_CAP: usize = 20;

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// Normalised query text: lowercased, never empty.
///
/// Whitespace is significant. `" alpha"` only matches where a space precedes
/// "alpha".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Lowercase `raw` and reject it if empty.
    pub fn parse(raw: &str) -> Result<Self, SearchError> {
        if raw.is_empty() {
            return Err(SearchError::InvalidQuery);
        }
        Ok(Self(raw.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A product matches if the query occurs in its lowercased name or
    /// category.
    pub fn matches(&self, product: &Product) -> bool {
        product.name.to_lowercase().contains(&self.0)
            || product.category.to_lowercase().contains(&self.0)
    }

    /// Scan the catalog under `limits`.
    pub fn scan<'a>(&self, catalog: &'a Catalog, limits: &SearchLimits) -> SearchResult<'a> {
        let start = Instant::now();
        let window = limits.scan_limit.min(catalog.len());
        let mut products = Vec::with_capacity(limits.result_cap.min(window));
        let mut total_found = 0;
        let mut scanned = 0;
        let mut timed_out = false;

        for product in catalog.iter().take(window) {
            if let Some(deadline) = limits.deadline {
                if start.elapsed() >= deadline {
                    timed_out = true;
                    break;
                }
            }
            scanned += 1;

            if self.matches(product) {
                total_found += 1;
                if products.len() < limits.result_cap {
                    products.push(product);
                }
            }
        }

        SearchResult {
            products,
            total_found,
            scanned,
            timed_out,
            elapsed: start.elapsed(),
        }
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Per-query bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of products examined, from id 1 onwards.
    pub scan_limit: usize,
    /// Maximum number of matches returned.
    pub result_cap: usize,
    /// Abort the scan once this much time has passed. The partial result
    /// only counts products examined before the abort.
    pub deadline: Option<Duration>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            scan_limit: DEFAULT_SCAN_LIMIT,
            result_cap: DEFAULT_RESULT_CAP,
            deadline: None,
        }
    }
}

impl SearchLimits {
    pub fn new(scan_limit: usize, result_cap: usize) -> Self {
        Self {
            scan_limit,
            result_cap,
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Outcome of one search. Borrows matched products from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<'a> {
    /// Matches in id order, at most `result_cap` of them.
    pub products: Vec<&'a Product>,
    /// Matches within the scanned window, including those not returned.
    pub total_found: usize,
    /// Products actually examined.
    pub scanned: usize,
    /// Whether the deadline stopped the scan early.
    pub timed_out: bool,
    /// Wall-clock time of the scan loop.
    pub elapsed: Duration,
}

impl SearchResult<'_> {
    /// Elapsed seconds with three decimals and an `s` suffix, e.g. `0.001s`.
    pub fn search_time(&self) -> String {
        format_seconds(self.elapsed)
    }
}

/// `%.3fs` formatting of a duration.
pub fn format_seconds(elapsed: Duration) -> String {
    format!("{:.3}s", elapsed.as_secs_f64())
}

/// Parse `raw` and scan `catalog` under `limits`.
pub fn search<'a>(
    catalog: &'a Catalog,
    raw: &str,
    limits: &SearchLimits,
) -> Result<SearchResult<'a>, SearchError> {
    let query = Query::parse(raw)?;
    Ok(query.scan(catalog, limits))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
