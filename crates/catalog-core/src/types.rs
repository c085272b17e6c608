//! Core record type for catalog-core.
//!
//! [`Product`] is the only record the catalog holds. It is serialised
//! directly into search responses, so field names here are the wire names.

use serde::Serialize;

/// Product categories, assigned cyclically by catalog position.
pub const CATEGORIES: &[&str] = &[
    "Electronics",
    "Books",
    "Home",
    "Clothing",
    "Sports",
    "Toys",
    "Beauty",
    "Garden",
    "Automotive",
    "Health",
];

/// Product brands, assigned cyclically by catalog position.
pub const BRANDS: &[&str] = &[
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Sigma", "Omega",
];

/// A single catalog record. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// 1-based position in the catalog.
    pub id: u64,
    /// `Product {brand} {id}`.
    pub name: String,
    /// One of [`CATEGORIES`].
    pub category: &'static str,
    /// `Description for Product {brand} {id}`.
    pub description: String,
    /// One of [`BRANDS`].
    pub brand: &'static str,
}

impl Product {
    /// Build the record that lives at zero-based catalog position `index`.
    pub fn at_position(index: usize) -> Self {
        let id = index as u64 + 1;
        let brand = BRANDS[index % BRANDS.len()];
        let category = CATEGORIES[index % CATEGORIES.len()];
        Self {
            id,
            name: format!("Product {brand} {id}"),
            category,
            description: format!("Description for Product {brand} {id}"),
            brand,
        }
    }
}
