//! Main record processor implementation and pipeline orchestration
//!
//! This module contains the RecordProcessor struct, which runs validation and
//! filtering over parsed transactions and enriches the survivors from the
//! product catalog.

use crate::app::models::{EnrichedTransaction, Transaction};
use crate::app::services::product_catalog::ProductCatalog;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use super::{
    enrichment::enrich_transactions,
    filters::TransactionFilter,
    stats::{EnrichmentSummary, ProcessingResult},
    validation::validate_and_filter,
};

/// Record processor for parsed sales transactions
///
/// # Example
///
/// ```rust
/// use sales_analytics::Transaction;
/// use sales_analytics::app::services::record_processor::{RecordProcessor, TransactionFilter};
///
/// let processor = RecordProcessor::new(TransactionFilter::new().with_region("North"));
/// let transactions = vec![
///     Transaction::new("T1", "2024-01-01", "P101", "Widget", 2, 10.0, "C1", "North"),
///     Transaction::new("T2", "2024-01-01", "P102", "Gadget", 1, 5.0, "C2", "South"),
/// ];
///
/// let result = processor.process_transactions(transactions, false);
/// assert_eq!(result.transaction_count(), 1);
/// assert_eq!(result.summary.filtered_by_region, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordProcessor {
    /// Region and amount criteria applied after validation
    filter: TransactionFilter,
}

impl RecordProcessor {
    /// Create a new record processor with the given filter
    pub fn new(filter: TransactionFilter) -> Self {
        Self { filter }
    }

    /// Validate and filter a batch of parsed transactions
    ///
    /// # Arguments
    ///
    /// * `transactions` - Parsed transactions to check
    /// * `show_progress` - Whether to show a progress bar for this step
    pub fn process_transactions(
        &self,
        transactions: Vec<Transaction>,
        show_progress: bool,
    ) -> ProcessingResult {
        info!(
            "Starting validation for {} transactions (filters: {})",
            transactions.len(),
            self.filter
        );

        let pb = show_progress
            .then(|| Self::create_processing_progress_bar(transactions.len() as u64, "Validation"));

        let (valid, summary) = validate_and_filter(transactions, &self.filter, pb.as_ref());

        if let Some(pb) = pb {
            pb.finish_with_message(format!("Validation complete: {} transactions", valid.len()));
        }

        debug!("{}", summary.summary());

        ProcessingResult::new(valid, summary)
    }

    /// Enrich validated transactions and summarize the match rate
    pub fn enrich(
        &self,
        transactions: &[Transaction],
        catalog: &ProductCatalog,
        show_progress: bool,
    ) -> (Vec<EnrichedTransaction>, EnrichmentSummary) {
        let pb = show_progress
            .then(|| Self::create_processing_progress_bar(transactions.len() as u64, "Enrichment"));

        let enriched = enrich_transactions(transactions, catalog, pb.as_ref());

        if let Some(pb) = pb {
            pb.finish_with_message(format!("Enrichment complete: {} transactions", enriched.len()));
        }

        let summary = EnrichmentSummary::from_enriched(&enriched);
        (enriched, summary)
    }

    /// Get the filter used by this processor
    pub fn filter(&self) -> &TransactionFilter {
        &self.filter
    }

    /// Create a progress bar for processing operations
    fn create_processing_progress_bar(total: u64, operation: &str) -> ProgressBar {
        let pb = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        pb.set_message(operation.to_string());
        pb
    }
}
