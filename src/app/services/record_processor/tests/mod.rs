//! Tests for the record processor module
//!
//! This module provides unit and integration tests for validation,
//! filtering and enrichment.

pub mod enrichment_tests;
pub mod validation_tests;

// Test helper functions and fixtures
use crate::app::models::{CatalogProduct, Transaction};
use crate::app::services::product_catalog::ProductCatalog;

/// Create a transaction that passes every validation invariant
pub fn create_valid_transaction(
    transaction_id: &str,
    product_id: &str,
    quantity: i64,
    unit_price: f64,
    region: &str,
) -> Transaction {
    Transaction::new(
        transaction_id,
        "2024-12-01",
        product_id,
        format!("Product {}", product_id),
        quantity,
        unit_price,
        "C001",
        region,
    )
}

/// A valid transaction with default values
pub fn create_default_transaction(transaction_id: &str) -> Transaction {
    create_valid_transaction(transaction_id, "P101", 2, 10.0, "North")
}

/// Create a catalog product entry
pub fn create_catalog_product(id: i64, category: &str, brand: &str, rating: f64) -> CatalogProduct {
    CatalogProduct {
        id: Some(id),
        title: Some(format!("Catalog item {}", id)),
        category: Some(category.to_string()),
        brand: Some(brand.to_string()),
        rating: Some(rating),
    }
}

/// Catalog with ids 101 and 102
pub fn create_test_catalog() -> ProductCatalog {
    ProductCatalog::from_products(vec![
        create_catalog_product(101, "laptops", "Lenovo", 4.6),
        create_catalog_product(102, "accessories", "Logitech", 4.2),
    ])
}
