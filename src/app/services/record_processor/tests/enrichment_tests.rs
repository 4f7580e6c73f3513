//! Tests for catalog enrichment

use super::*;
use crate::app::services::product_catalog::ProductCatalog;
use crate::app::services::record_processor::{
    EnrichmentSummary, enrich_transaction, enrich_transactions,
};

#[test]
fn test_matching_product_is_enriched() {
    let catalog = create_test_catalog();
    let transaction = create_valid_transaction("T1", "P101", 1, 10.0, "North");

    let enriched = enrich_transaction(&transaction, &catalog);

    assert!(enriched.api_match);
    assert_eq!(enriched.api_category.as_deref(), Some("laptops"));
    assert_eq!(enriched.api_brand.as_deref(), Some("Lenovo"));
    assert_eq!(enriched.api_rating, Some(4.6));
    assert_eq!(enriched.transaction, transaction);
}

#[test]
fn test_unknown_id_misses() {
    let catalog = create_test_catalog();
    let transaction = create_valid_transaction("T1", "P999", 1, 10.0, "North");

    let enriched = enrich_transaction(&transaction, &catalog);

    assert!(!enriched.api_match);
    assert!(enriched.api_category.is_none());
    assert!(enriched.api_brand.is_none());
    assert!(enriched.api_rating.is_none());
}

#[test]
fn test_product_id_without_digits_always_misses() {
    let catalog = create_test_catalog();
    let transaction = create_valid_transaction("T1", "PX", 1, 10.0, "North");

    assert!(!enrich_transaction(&transaction, &catalog).api_match);
}

#[test]
fn test_digits_anywhere_in_id_are_concatenated() {
    let catalog = create_test_catalog();
    let transaction = create_valid_transaction("T1", "P-1a0b2", 1, 10.0, "North");

    let enriched = enrich_transaction(&transaction, &catalog);

    assert!(enriched.api_match);
    assert_eq!(enriched.api_brand.as_deref(), Some("Logitech"));
}

#[test]
fn test_empty_catalog_misses_everything() {
    let catalog = ProductCatalog::new();
    let transactions = vec![
        create_valid_transaction("T1", "P101", 1, 10.0, "North"),
        create_valid_transaction("T2", "P102", 1, 10.0, "North"),
    ];

    let enriched = enrich_transactions(&transactions, &catalog, None);

    assert_eq!(enriched.len(), 2);
    assert!(enriched.iter().all(|t| !t.api_match));
}

#[test]
fn test_enrichment_preserves_order_and_count() {
    let catalog = create_test_catalog();
    let transactions = vec![
        create_valid_transaction("T3", "P102", 1, 10.0, "North"),
        create_valid_transaction("T1", "P500", 1, 10.0, "North"),
        create_valid_transaction("T2", "P101", 1, 10.0, "North"),
    ];

    let enriched = enrich_transactions(&transactions, &catalog, None);
    let ids: Vec<&str> = enriched
        .iter()
        .map(|t| t.transaction.transaction_id.as_str())
        .collect();

    assert_eq!(ids, vec!["T3", "T1", "T2"]);
    assert_eq!(
        enriched.iter().map(|t| t.api_match).collect::<Vec<_>>(),
        vec![true, false, true]
    );
}

#[test]
fn test_enrichment_summary() {
    let catalog = create_test_catalog();
    let mut zeta = create_valid_transaction("T2", "P900", 1, 10.0, "North");
    zeta.product_name = "Zeta".to_string();
    let mut alpha = create_valid_transaction("T3", "P901", 1, 10.0, "North");
    alpha.product_name = "Alpha".to_string();
    let mut alpha_again = create_valid_transaction("T4", "PX", 1, 10.0, "North");
    alpha_again.product_name = "Alpha".to_string();

    let transactions = vec![
        create_valid_transaction("T1", "P101", 1, 10.0, "North"),
        zeta,
        alpha,
        alpha_again,
    ];

    let enriched = enrich_transactions(&transactions, &catalog, None);
    let summary = EnrichmentSummary::from_enriched(&enriched);

    assert_eq!(summary.total, 4);
    assert_eq!(summary.matched, 1);
    assert_eq!(summary.match_rate, 25.0);
    assert_eq!(summary.failed_products, vec!["Alpha", "Zeta"]);
}

#[test]
fn test_enrichment_summary_empty() {
    let summary = EnrichmentSummary::from_enriched(&[]);

    assert_eq!(summary.total, 0);
    assert_eq!(summary.matched, 0);
    assert_eq!(summary.match_rate, 0.0);
    assert!(summary.failed_products.is_empty());
}
