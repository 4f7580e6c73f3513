//! Product catalog enrichment for validated transactions
//!
//! Each transaction is looked up in the catalog by the numeric id embedded in
//! its product identifier. A failed lookup of any kind produces an unmatched
//! record; enrichment itself cannot fail.

use crate::app::models::{EnrichedTransaction, Transaction};
use crate::app::services::product_catalog::ProductCatalog;
use indicatif::ProgressBar;
use tracing::{debug, info};

/// Enrich a single transaction from the catalog
pub fn enrich_transaction(transaction: &Transaction, catalog: &ProductCatalog) -> EnrichedTransaction {
    let info = transaction
        .catalog_id()
        .and_then(|id| catalog.get_product(id));

    match info {
        Some(info) => EnrichedTransaction::matched(transaction.clone(), info),
        None => {
            debug!(
                "No catalog entry for product {} (transaction {})",
                transaction.product_id, transaction.transaction_id
            );
            EnrichedTransaction::unmatched(transaction.clone())
        }
    }
}

/// Enrich every transaction, one output record per input, in input order
///
/// # Arguments
///
/// * `transactions` - Validated transactions
/// * `catalog` - Read-only id to metadata mapping for this run
/// * `progress` - Optional progress bar advanced once per transaction
pub fn enrich_transactions(
    transactions: &[Transaction],
    catalog: &ProductCatalog,
    progress: Option<&ProgressBar>,
) -> Vec<EnrichedTransaction> {
    let enriched: Vec<EnrichedTransaction> = transactions
        .iter()
        .map(|transaction| {
            if let Some(pb) = progress {
                pb.inc(1);
            }
            enrich_transaction(transaction, catalog)
        })
        .collect();

    info!(
        "Catalog enrichment: {} of {} transactions matched ({} catalog products)",
        enriched.iter().filter(|t| t.api_match).count(),
        enriched.len(),
        catalog.product_count()
    );

    enriched
}
