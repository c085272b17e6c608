//! Static fixtures: the canonical query mix and a shared full-size catalog.

use std::sync::{Arc, OnceLock};

use catalog_core::Catalog;

/// Production catalog size.
pub const FULL_CATALOG_SIZE: usize = 100_000;

/// Category names as they appear on products.
pub const CATEGORY_QUERIES: &[&str] = &[
    "Electronics", "Books", "Home", "Clothing", "Sports",
    "Toys", "Beauty", "Garden", "Automotive", "Health",
];

/// Brand names as they appear on products.
pub const BRAND_QUERIES: &[&str] = &[
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Sigma", "Omega",
];

/// The mixed query load used against the running service.
pub fn load_mix() -> impl Iterator<Item = &'static str> {
    CATEGORY_QUERIES.iter().chain(BRAND_QUERIES.iter()).copied()
}

/// The 100 000-product catalog, generated on first use.
pub fn full_catalog() -> Arc<Catalog> {
    static CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();
    CATALOG
        .get_or_init(|| Arc::new(Catalog::generate(FULL_CATALOG_SIZE)))
        .clone()
}
