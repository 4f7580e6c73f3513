//! Descriptive analytics over validated sales transactions
//!
//! All views are pure functions of the transaction slice. [`SalesAnalytics`]
//! computes every view once per run so the report can be rendered without
//! touching the transactions again.
//!
//! # Example
//!
//! ```rust
//! use sales_analytics::Transaction;
//! use sales_analytics::app::services::analytics::{region_wise_sales, find_peak_sales_day};
//!
//! let transactions = vec![
//!     Transaction::new("T1", "2024-01-01", "P101", "Widget", 2, 10.0, "C1", "North"),
//!     Transaction::new("T2", "2024-01-02", "P102", "Gadget", 1, 30.0, "C2", "South"),
//! ];
//!
//! let regions = region_wise_sales(&transactions);
//! assert_eq!(regions[0].region, "South");
//! assert_eq!(regions[0].percentage, 60.0);
//!
//! let peak = find_peak_sales_day(&transactions);
//! assert_eq!(peak.date.as_deref(), Some("2024-01-02"));
//! ```

use crate::app::models::Transaction;
use crate::config::AnalysisConfig;
use std::time::Instant;
use tracing::{debug, info};

pub mod aggregations;
pub mod types;

#[cfg(test)]
pub mod tests;

pub use aggregations::{
    calculate_total_revenue, customer_analysis, daily_sales_trend, filter_options,
    find_peak_sales_day, low_performing_products, peak_from_trend, region_wise_sales, round2,
    sales_overview, top_selling_products,
};
pub use types::{
    CustomerSummary, DailySales, FilterOptions, PeakDay, ProductSales, RegionSummary,
    SalesOverview,
};

/// Every analytics view for one run
#[derive(Debug, Clone, serde::Serialize)]
pub struct SalesAnalytics {
    pub overview: SalesOverview,
    pub regions: Vec<RegionSummary>,
    pub top_products: Vec<ProductSales>,
    pub low_performers: Vec<ProductSales>,
    /// All customers, biggest spender first
    pub customers: Vec<CustomerSummary>,
    pub daily_trend: Vec<DailySales>,
    pub peak_day: PeakDay,
    /// Number of products requested for `top_products`
    pub top_product_limit: usize,
    /// Number of customers shown in rankings
    pub top_customer_limit: usize,
    /// Threshold used for `low_performers`
    pub low_performer_threshold: i64,
}

impl SalesAnalytics {
    /// Compute every view over the validated transactions
    pub fn compute(transactions: &[Transaction], config: &AnalysisConfig) -> Self {
        let start = Instant::now();

        let daily_trend = daily_sales_trend(transactions);
        let peak_day = peak_from_trend(&daily_trend);

        let analytics = Self {
            overview: sales_overview(transactions),
            regions: region_wise_sales(transactions),
            top_products: top_selling_products(transactions, config.top_products),
            low_performers: low_performing_products(transactions, config.low_performer_threshold),
            customers: customer_analysis(transactions),
            daily_trend,
            peak_day,
            top_product_limit: config.top_products,
            top_customer_limit: config.top_customers,
            low_performer_threshold: config.low_performer_threshold,
        };

        debug!(
            "Computed analytics views: {} regions, {} products ranked, {} customers, {} days",
            analytics.regions.len(),
            analytics.top_products.len(),
            analytics.customers.len(),
            analytics.daily_trend.len()
        );
        info!(
            "Analytics complete for {} transactions in {:.2?}",
            transactions.len(),
            start.elapsed()
        );

        analytics
    }

    /// Total revenue across all transactions
    pub fn total_revenue(&self) -> f64 {
        self.overview.total_revenue
    }

    /// The highest-spending customers, up to the configured limit
    pub fn top_customers(&self) -> &[CustomerSummary] {
        let end = self.top_customer_limit.min(self.customers.len());
        &self.customers[..end]
    }
}
