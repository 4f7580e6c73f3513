//! Validation and enrichment statistics for the record processing pipeline
//!
//! This module provides the counters reported after validation and after
//! catalog enrichment, and the result structure handed to analytics.

use crate::app::models::{EnrichedTransaction, Transaction};
use serde::Serialize;

/// Counters produced by validation and filtering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationSummary {
    /// Number of transactions handed to the validator
    pub total_input: usize,
    /// Transactions rejected by a validation invariant
    pub invalid: usize,
    /// Valid transactions dropped by the region filter
    pub filtered_by_region: usize,
    /// Valid transactions dropped by the amount range
    pub filtered_by_amount: usize,
    /// Transactions kept
    pub final_count: usize,
}

impl ValidationSummary {
    /// Create new empty counters
    pub fn new() -> Self {
        Self {
            total_input: 0,
            invalid: 0,
            filtered_by_region: 0,
            filtered_by_amount: 0,
            final_count: 0,
        }
    }

    /// True when every input transaction is accounted for exactly once
    pub fn is_balanced(&self) -> bool {
        self.final_count + self.invalid + self.filtered_by_region + self.filtered_by_amount
            == self.total_input
    }

    /// Calculate the share of input kept as a percentage
    pub fn pass_rate(&self) -> f64 {
        if self.total_input == 0 {
            0.0
        } else {
            (self.final_count as f64 / self.total_input as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Validation Summary: {} -> {} transactions ({:.1}% kept) | \
             Invalid: {} | Filtered by region: {} | Filtered by amount: {}",
            self.total_input,
            self.final_count,
            self.pass_rate(),
            self.invalid,
            self.filtered_by_region,
            self.filtered_by_amount
        )
    }
}

impl Default for ValidationSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of validation and filtering
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// Transactions that passed validation and filters, in input order
    pub transactions: Vec<Transaction>,
    /// Validation counters
    pub summary: ValidationSummary,
}

impl ProcessingResult {
    /// Create a new processing result
    pub fn new(transactions: Vec<Transaction>, summary: ValidationSummary) -> Self {
        Self {
            transactions,
            summary,
        }
    }

    /// Get the number of valid transactions
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}

/// Outcome of catalog enrichment over a transaction set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichmentSummary {
    /// Number of enriched records
    pub total: usize,
    /// Records whose product id was found in the catalog
    pub matched: usize,
    /// `matched / total` as a percentage, 0 when there are no records
    pub match_rate: f64,
    /// Distinct names of products that were not found, sorted
    pub failed_products: Vec<String>,
}

impl EnrichmentSummary {
    /// Summarize enriched records
    pub fn from_enriched(enriched: &[EnrichedTransaction]) -> Self {
        let total = enriched.len();
        let matched = enriched.iter().filter(|t| t.api_match).count();

        let match_rate = if total == 0 {
            0.0
        } else {
            (matched as f64 / total as f64) * 100.0
        };

        let mut failed_products: Vec<String> = enriched
            .iter()
            .filter(|t| !t.api_match)
            .map(|t| t.transaction.product_name.clone())
            .collect();
        failed_products.sort();
        failed_products.dedup();

        Self {
            total,
            matched,
            match_rate,
            failed_products,
        }
    }
}
