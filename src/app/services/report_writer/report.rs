//! Plain-text sales report
//!
//! The report is a pure rendering of results computed earlier in the run;
//! nothing here looks at transactions directly.

use crate::app::services::analytics::SalesAnalytics;
use crate::app::services::record_processor::EnrichmentSummary;
use crate::constants::REPORT_RULE_WIDTH;
use crate::{Error, Result};
use chrono::NaiveDateTime;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

use super::format::{money, money_whole, percent};

/// Report over one run's analytics and enrichment results
#[derive(Debug, Clone, Copy)]
pub struct SalesReport<'a> {
    analytics: &'a SalesAnalytics,
    enrichment: &'a EnrichmentSummary,
    currency: &'a str,
}

impl<'a> SalesReport<'a> {
    pub fn new(
        analytics: &'a SalesAnalytics,
        enrichment: &'a EnrichmentSummary,
        currency: &'a str,
    ) -> Self {
        Self {
            analytics,
            enrichment,
            currency,
        }
    }

    /// Render the full report text
    pub fn render(&self, generated_at: &NaiveDateTime) -> String {
        let mut out = String::new();
        self.write_header(&mut out, generated_at);
        self.write_overview(&mut out);
        self.write_regions(&mut out);
        self.write_top_products(&mut out);
        self.write_top_customers(&mut out);
        self.write_daily_trend(&mut out);
        self.write_low_performers(&mut out);
        self.write_enrichment(&mut out);
        out
    }

    fn write_header(&self, out: &mut String, generated_at: &NaiveDateTime) {
        let rule = "=".repeat(REPORT_RULE_WIDTH);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "       SALES ANALYTICS REPORT");
        let _ = writeln!(
            out,
            "   Generated: {}",
            generated_at.format("%Y-%m-%d %H:%M:%S")
        );
        let _ = writeln!(
            out,
            "   Records Processed: {}",
            self.analytics.overview.transaction_count
        );
        let _ = writeln!(out, "{rule}");
        out.push('\n');
    }

    fn write_overview(&self, out: &mut String) {
        let overview = &self.analytics.overview;
        section(out, "OVERALL SUMMARY");
        let _ = writeln!(
            out,
            "Total Revenue:        {}",
            money(overview.total_revenue, self.currency)
        );
        let _ = writeln!(out, "Total Transactions:   {}", overview.transaction_count);
        let _ = writeln!(
            out,
            "Average Order Value:  {}",
            money(overview.average_order_value, self.currency)
        );
        let _ = writeln!(out, "Date Range:           {}", overview.date_range());
        out.push('\n');
    }

    fn write_regions(&self, out: &mut String) {
        section(out, "REGION-WISE PERFORMANCE");
        let _ = writeln!(
            out,
            "Region     Sales ({})     % Total   Transactions",
            self.currency
        );
        for region in &self.analytics.regions {
            let _ = writeln!(
                out,
                "{:<10} {:>11}     {:>7}      {}",
                region.region,
                money_whole(region.total_sales, self.currency),
                percent(region.percentage),
                region.transaction_count
            );
        }
        out.push('\n');
    }

    fn write_top_products(&self, out: &mut String) {
        section(
            out,
            &format!("TOP {} PRODUCTS", self.analytics.top_product_limit),
        );
        for (i, product) in self.analytics.top_products.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. {} | Qty: {} | Revenue: {}",
                i + 1,
                product.product_name,
                product.total_quantity,
                money(product.total_revenue, self.currency)
            );
        }
        out.push('\n');
    }

    fn write_top_customers(&self, out: &mut String) {
        let customers = self.analytics.top_customers();
        section(
            out,
            &format!("TOP {} CUSTOMERS", self.analytics.top_customer_limit),
        );
        for (i, customer) in customers.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. {} | Spent: {} | Orders: {}",
                i + 1,
                customer.customer_id,
                money(customer.total_spent, self.currency),
                customer.purchase_count
            );
        }
        out.push('\n');
    }

    fn write_daily_trend(&self, out: &mut String) {
        section(out, "DAILY SALES TREND");
        for day in &self.analytics.daily_trend {
            let _ = writeln!(
                out,
                "{} | Revenue: {} | Transactions: {} | Customers: {}",
                day.date,
                money(day.revenue, self.currency),
                day.transaction_count,
                day.unique_customers
            );
        }
        out.push('\n');
    }

    fn write_low_performers(&self, out: &mut String) {
        section(out, "LOW PERFORMING PRODUCTS");
        for product in &self.analytics.low_performers {
            let _ = writeln!(
                out,
                "- {} | Qty: {} | Revenue: {}",
                product.product_name,
                product.total_quantity,
                money(product.total_revenue, self.currency)
            );
        }
        out.push('\n');
    }

    fn write_enrichment(&self, out: &mut String) {
        section(out, "API ENRICHMENT SUMMARY");
        let _ = writeln!(out, "Products Enriched: {}", self.enrichment.matched);
        let _ = writeln!(out, "Success Rate: {}", percent(self.enrichment.match_rate));
        let _ = writeln!(out, "Failed Products:");
        for product in &self.enrichment.failed_products {
            let _ = writeln!(out, "- {}", product);
        }
    }
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "-".repeat(REPORT_RULE_WIDTH));
}

/// Write rendered report text, creating the parent directory
pub fn write_report(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            Error::report_writing(
                path.display().to_string(),
                format!("cannot create {}: {}", parent.display(), e),
            )
        })?;
    }

    fs::write(path, text)
        .map_err(|e| Error::report_writing(path.display().to_string(), e.to_string()))?;

    info!("Sales report written to {}", path.display());
    Ok(())
}
