//! Field-level validation and filtering of parsed transactions
//!
//! Every transaction is checked against seven invariants in a fixed order;
//! the first failing check rejects it. Transactions that pass are then run
//! through the optional [`TransactionFilter`].

use crate::app::models::Transaction;
use crate::constants::id_prefix;
use indicatif::ProgressBar;
use std::fmt;
use tracing::{debug, info};

use super::filters::{FilterOutcome, TransactionFilter};
use super::stats::ValidationSummary;

/// The invariant a rejected transaction violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    NonPositiveQuantity,
    NonPositiveUnitPrice,
    EmptyCustomerId,
    EmptyRegion,
    BadTransactionPrefix,
    BadProductPrefix,
    BadCustomerPrefix,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            ValidationFailure::NonPositiveQuantity => "quantity must be greater than zero",
            ValidationFailure::NonPositiveUnitPrice => "unit price must be greater than zero",
            ValidationFailure::EmptyCustomerId => "customer id is empty",
            ValidationFailure::EmptyRegion => "region is empty",
            ValidationFailure::BadTransactionPrefix => "transaction id must start with 'T'",
            ValidationFailure::BadProductPrefix => "product id must start with 'P'",
            ValidationFailure::BadCustomerPrefix => "customer id must start with 'C'",
        };
        write!(f, "{}", reason)
    }
}

/// Check one transaction against the validation invariants
///
/// Checks run in order and stop at the first failure.
pub fn validate_transaction(transaction: &Transaction) -> Result<(), ValidationFailure> {
    if transaction.quantity <= 0 {
        return Err(ValidationFailure::NonPositiveQuantity);
    }
    // NaN prices fail here as well
    if !(transaction.unit_price > 0.0) {
        return Err(ValidationFailure::NonPositiveUnitPrice);
    }
    if transaction.customer_id.is_empty() {
        return Err(ValidationFailure::EmptyCustomerId);
    }
    if transaction.region.is_empty() {
        return Err(ValidationFailure::EmptyRegion);
    }
    if !transaction.transaction_id.starts_with(id_prefix::TRANSACTION) {
        return Err(ValidationFailure::BadTransactionPrefix);
    }
    if !transaction.product_id.starts_with(id_prefix::PRODUCT) {
        return Err(ValidationFailure::BadProductPrefix);
    }
    if !transaction.customer_id.starts_with(id_prefix::CUSTOMER) {
        return Err(ValidationFailure::BadCustomerPrefix);
    }

    Ok(())
}

/// Validate transactions and apply the optional filters
///
/// # Arguments
///
/// * `transactions` - Parsed transactions, in input order
/// * `filter` - Region and amount criteria; the default filter keeps everything
/// * `progress` - Optional progress bar advanced once per transaction
///
/// # Returns
///
/// The surviving transactions in input order, and a summary whose counters
/// always add up to `total_input`.
pub fn validate_and_filter(
    transactions: Vec<Transaction>,
    filter: &TransactionFilter,
    progress: Option<&ProgressBar>,
) -> (Vec<Transaction>, ValidationSummary) {
    let mut summary = ValidationSummary::new();
    summary.total_input = transactions.len();

    let mut valid = Vec::with_capacity(transactions.len());

    for transaction in transactions {
        if let Some(pb) = progress {
            pb.inc(1);
        }

        if let Err(failure) = validate_transaction(&transaction) {
            debug!(
                "Transaction {} rejected: {}",
                transaction.transaction_id, failure
            );
            summary.invalid += 1;
            continue;
        }

        match filter.evaluate(&transaction) {
            FilterOutcome::Keep => valid.push(transaction),
            FilterOutcome::Region => summary.filtered_by_region += 1,
            FilterOutcome::Amount => summary.filtered_by_amount += 1,
        }
    }

    summary.final_count = valid.len();

    info!(
        "Validation complete: {} -> {} transactions ({} invalid, {} filtered by region, {} filtered by amount)",
        summary.total_input,
        summary.final_count,
        summary.invalid,
        summary.filtered_by_region,
        summary.filtered_by_amount
    );

    (valid, summary)
}
