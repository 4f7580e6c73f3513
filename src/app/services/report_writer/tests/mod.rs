//! Tests for report and enriched-data output


use crate::app::models::{EnrichedTransaction, ProductInfo, Transaction};
use crate::app::services::analytics::SalesAnalytics;
use crate::app::services::record_processor::EnrichmentSummary;
use crate::config::AnalysisConfig;

pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new("T1", "2024-12-01", "P101", "Laptop", 2, 1500.5, "C1", "North"),
        Transaction::new("T2", "2024-12-02", "P102", "Mouse", 3, 20.0, "C2", "South"),
        Transaction::new("T3", "2024-12-02", "PX9", "Cable", 1, 9.5, "C1", "North"),
    ]
}

pub fn sample_enriched() -> Vec<EnrichedTransaction> {
    let laptop = ProductInfo {
        title: Some("Laptop".to_string()),
        category: Some("laptops".to_string()),
        brand: Some("Lenovo".to_string()),
        rating: Some(4.5),
    };

    let transactions = sample_transactions();
    vec![
        EnrichedTransaction::matched(transactions[0].clone(), &laptop),
        EnrichedTransaction::unmatched(transactions[1].clone()),
        EnrichedTransaction::unmatched(transactions[2].clone()),
    ]
}

pub fn sample_results() -> (SalesAnalytics, EnrichmentSummary) {
    let analytics = SalesAnalytics::compute(&sample_transactions(), &AnalysisConfig::default());
    let enrichment = EnrichmentSummary::from_enriched(&sample_enriched());
    (analytics, enrichment)
}
