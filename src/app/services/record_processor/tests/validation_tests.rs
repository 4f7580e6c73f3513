//! Tests for validation invariants and the validate-and-filter pass

use super::*;
use crate::app::services::record_processor::{
    TransactionFilter, ValidationFailure, validate_and_filter, validate_transaction,
};

#[test]
fn test_valid_transaction_passes() {
    assert_eq!(validate_transaction(&create_default_transaction("T1")), Ok(()));
}

#[test]
fn test_each_invariant_rejects() {
    let mut t = create_default_transaction("T1");
    t.quantity = 0;
    assert_eq!(
        validate_transaction(&t),
        Err(ValidationFailure::NonPositiveQuantity)
    );

    let mut t = create_default_transaction("T1");
    t.unit_price = -1.0;
    assert_eq!(
        validate_transaction(&t),
        Err(ValidationFailure::NonPositiveUnitPrice)
    );

    let mut t = create_default_transaction("T1");
    t.customer_id = String::new();
    assert_eq!(
        validate_transaction(&t),
        Err(ValidationFailure::EmptyCustomerId)
    );

    let mut t = create_default_transaction("T1");
    t.region = String::new();
    assert_eq!(validate_transaction(&t), Err(ValidationFailure::EmptyRegion));

    let t = create_default_transaction("X1");
    assert_eq!(
        validate_transaction(&t),
        Err(ValidationFailure::BadTransactionPrefix)
    );

    let mut t = create_default_transaction("T1");
    t.product_id = "Q101".to_string();
    assert_eq!(
        validate_transaction(&t),
        Err(ValidationFailure::BadProductPrefix)
    );

    let mut t = create_default_transaction("T1");
    t.customer_id = "D001".to_string();
    assert_eq!(
        validate_transaction(&t),
        Err(ValidationFailure::BadCustomerPrefix)
    );
}

#[test]
fn test_first_failure_wins() {
    let mut t = create_default_transaction("X1");
    t.quantity = -1;
    t.region = String::new();

    // Quantity is checked before region and transaction prefix
    assert_eq!(
        validate_transaction(&t),
        Err(ValidationFailure::NonPositiveQuantity)
    );
}

#[test]
fn test_nan_price_is_invalid() {
    let mut t = create_default_transaction("T1");
    t.unit_price = f64::NAN;
    assert_eq!(
        validate_transaction(&t),
        Err(ValidationFailure::NonPositiveUnitPrice)
    );
}

#[test]
fn test_prefix_checks_are_case_sensitive() {
    let t = create_default_transaction("t1");
    assert_eq!(
        validate_transaction(&t),
        Err(ValidationFailure::BadTransactionPrefix)
    );
}

#[test]
fn test_validate_and_filter_without_filters() {
    let mut bad = create_default_transaction("T2");
    bad.quantity = 0;

    let transactions = vec![
        create_default_transaction("T1"),
        bad,
        create_default_transaction("T3"),
    ];

    let (valid, summary) = validate_and_filter(transactions, &TransactionFilter::new(), None);

    assert_eq!(valid.len(), 2);
    assert_eq!(summary.total_input, 3);
    assert_eq!(summary.invalid, 1);
    assert_eq!(summary.filtered_by_region, 0);
    assert_eq!(summary.filtered_by_amount, 0);
    assert_eq!(summary.final_count, 2);
    assert!(summary.is_balanced());
}

#[test]
fn test_validate_and_filter_with_all_filters() {
    let transactions = vec![
        // amount 20, North: kept
        create_valid_transaction("T1", "P101", 2, 10.0, "North"),
        // wrong region
        create_valid_transaction("T2", "P101", 2, 10.0, "South"),
        // amount 5, below min
        create_valid_transaction("T3", "P101", 1, 5.0, "North"),
        // amount 500, above max
        create_valid_transaction("T4", "P101", 5, 100.0, "North"),
        // invalid, never reaches the filters
        create_valid_transaction("T5", "P101", 0, 10.0, "South"),
    ];

    let filter = TransactionFilter::new()
        .with_region("North")
        .with_min_amount(10.0)
        .with_max_amount(100.0);

    let (valid, summary) = validate_and_filter(transactions, &filter, None);

    assert_eq!(valid.len(), 1);
    assert_eq!(valid[0].transaction_id, "T1");
    assert_eq!(summary.invalid, 1);
    assert_eq!(summary.filtered_by_region, 1);
    assert_eq!(summary.filtered_by_amount, 2);
    assert!(summary.is_balanced());
}

#[test]
fn test_amount_bounds_are_inclusive() {
    let transactions = vec![
        create_valid_transaction("T1", "P101", 1, 10.0, "North"),
        create_valid_transaction("T2", "P101", 2, 10.0, "North"),
    ];

    let filter = TransactionFilter::new()
        .with_min_amount(10.0)
        .with_max_amount(20.0);
    let (valid, summary) = validate_and_filter(transactions, &filter, None);

    assert_eq!(valid.len(), 2);
    assert_eq!(summary.filtered_by_amount, 0);
}

#[test]
fn test_output_keeps_input_order() {
    let transactions = vec![
        create_default_transaction("T3"),
        create_default_transaction("T1"),
        create_default_transaction("T2"),
    ];

    let (valid, _) = validate_and_filter(transactions, &TransactionFilter::new(), None);
    let ids: Vec<&str> = valid.iter().map(|t| t.transaction_id.as_str()).collect();

    assert_eq!(ids, vec!["T3", "T1", "T2"]);
}

#[test]
fn test_empty_input() {
    let (valid, summary) = validate_and_filter(Vec::new(), &TransactionFilter::new(), None);

    assert!(valid.is_empty());
    assert_eq!(summary.total_input, 0);
    assert_eq!(summary.final_count, 0);
    assert!(summary.is_balanced());
}

#[test]
fn test_accounting_balances_over_mixed_input() {
    let mut transactions = Vec::new();
    for i in 0..40 {
        let region = if i % 3 == 0 { "East" } else { "West" };
        let quantity = (i % 5) as i64; // 0 is invalid
        transactions.push(create_valid_transaction(
            &format!("T{}", i),
            "P101",
            quantity,
            7.5,
            region,
        ));
    }

    let filter = TransactionFilter::new()
        .with_region("West")
        .with_max_amount(20.0);
    let (valid, summary) = validate_and_filter(transactions, &filter, None);

    assert_eq!(summary.total_input, 40);
    assert_eq!(summary.final_count, valid.len());
    assert!(summary.is_balanced());
}
