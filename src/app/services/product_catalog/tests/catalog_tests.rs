//! Tests for building and querying the product catalog

use super::*;
use crate::app::models::CatalogProduct;
use crate::app::services::product_catalog::ProductCatalog;

#[test]
fn test_new_catalog_is_empty() {
    let catalog = ProductCatalog::new();

    assert!(catalog.is_empty());
    assert_eq!(catalog.product_count(), 0);
    assert!(catalog.get_product(1).is_none());
}

#[test]
fn test_from_products_indexes_by_id() {
    let catalog = ProductCatalog::from_products(vec![
        create_test_product(1, "Apple"),
        create_test_product(2, "Samsung"),
    ]);

    assert_eq!(catalog.product_count(), 2);
    assert!(catalog.contains_product(1));
    assert!(!catalog.contains_product(3));

    let info = catalog.get_product(2).unwrap();
    assert_eq!(info.brand.as_deref(), Some("Samsung"));
    assert_eq!(info.category.as_deref(), Some("electronics"));
    assert_eq!(info.title.as_deref(), Some("Item 2"));
}

#[test]
fn test_entries_without_id_are_skipped() {
    let anonymous = CatalogProduct {
        id: None,
        title: Some("Mystery".to_string()),
        category: None,
        brand: None,
        rating: None,
    };

    let catalog = ProductCatalog::from_products(vec![anonymous, create_test_product(7, "Acme")]);

    assert_eq!(catalog.product_count(), 1);
    assert!(catalog.contains_product(7));
}

#[test]
fn test_later_duplicate_overwrites_earlier() {
    let catalog = ProductCatalog::from_products(vec![
        create_test_product(5, "First"),
        create_test_product(5, "Second"),
    ]);

    assert_eq!(catalog.product_count(), 1);
    assert_eq!(
        catalog.get_product(5).unwrap().brand.as_deref(),
        Some("Second")
    );
}

#[test]
fn test_partial_entries_keep_missing_fields_empty() {
    let product: CatalogProduct = serde_json::from_str(r#"{"id": 9, "title": "Bare"}"#).unwrap();
    let catalog = ProductCatalog::from_products(vec![product]);

    let info = catalog.get_product(9).unwrap();
    assert!(info.brand.is_none());
    assert!(info.category.is_none());
    assert!(info.rating.is_none());
}
