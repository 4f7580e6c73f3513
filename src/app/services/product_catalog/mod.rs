//! Product catalog service for O(1) product metadata lookups
//!
//! The catalog is built once per run from whatever the configured
//! [`CatalogSource`] returns and is read-only afterwards. An empty catalog is
//! a valid state: it simply makes every enrichment lookup miss.

use crate::app::models::{CatalogProduct, ProductInfo};
use std::collections::HashMap;
use tracing::debug;

pub mod client;
pub mod payload;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use client::{CatalogProvider, CatalogSource, FileCatalogSource, HttpCatalogClient};
pub use payload::CatalogPage;

/// Product catalog keyed by numeric product id
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    /// Product metadata indexed by catalog id
    pub(crate) products: HashMap<i64, ProductInfo>,
}

impl ProductCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the catalog from fetched products
    ///
    /// Entries without an id are skipped. When an id appears more than once
    /// the later entry wins.
    pub fn from_products(products: Vec<CatalogProduct>) -> Self {
        let mut catalog = Self::new();
        let mut skipped = 0usize;

        for product in products {
            match product.id {
                Some(id) => {
                    catalog.products.insert(id, ProductInfo::from(product));
                }
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!("Skipped {} catalog entries without an id", skipped);
        }

        catalog
    }

    /// Get product metadata by catalog id (O(1) lookup)
    pub fn get_product(&self, id: i64) -> Option<&ProductInfo> {
        self.products.get(&id)
    }

    /// Check if a product exists in the catalog
    pub fn contains_product(&self, id: i64) -> bool {
        self.products.contains_key(&id)
    }

    /// Get the total number of products in the catalog
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
