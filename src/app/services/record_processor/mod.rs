//! Record processing module for parsed sales transactions
//!
//! This module takes the parser's output through validation, optional
//! narrowing by region and amount, and catalog enrichment.
//!
//! # Architecture
//!
//! - [`processor`] - Main RecordProcessor struct and step orchestration
//! - [`validation`] - The seven field invariants and the validate-and-filter pass
//! - [`filters`] - Optional region and amount criteria
//! - [`enrichment`] - Catalog lookup by the numeric id in each product id
//! - [`stats`] - Validation counters and enrichment summary
//!
//! # Accounting
//!
//! Every input transaction ends up in exactly one bucket: kept, `invalid`,
//! `filtered_by_region` or `filtered_by_amount`. Filters only see
//! transactions that passed every invariant.

pub mod enrichment;
pub mod filters;
pub mod processor;
pub mod stats;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use enrichment::{enrich_transaction, enrich_transactions};
pub use filters::{FilterOutcome, TransactionFilter};
pub use processor::RecordProcessor;
pub use stats::{EnrichmentSummary, ProcessingResult, ValidationSummary};
pub use validation::{ValidationFailure, validate_and_filter, validate_transaction};
