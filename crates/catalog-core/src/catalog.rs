//! Catalog: the fixed, ordered collection of generated [`Product`] records.
//!
//! The catalog is generated once and never mutated. Position `i` always holds
//! the product with id `i + 1`, which is what lets [`Catalog::get`] index
//! directly instead of searching.

use crate::types::Product;

/// Immutable product catalog. Share it with `Arc<Catalog>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Generate `count` products deterministically. `count == 0` yields an
    /// empty catalog.
    pub fn generate(count: usize) -> Self {
        tracing::info!(count, "generating products");
        let products: Vec<Product> = (0..count).map(Product::at_position).collect();
        tracing::info!(count = products.len(), "generated products");
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id (1-based).
    pub fn get(&self, id: u64) -> Option<&Product> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.products.get(index)
    }

    /// Products in id order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }
}
