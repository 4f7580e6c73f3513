//! Result types produced by the aggregation routines

use serde::Serialize;

/// Revenue share of one region
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSummary {
    pub region: String,
    pub total_sales: f64,
    pub transaction_count: usize,
    /// Share of total revenue, rounded to two decimals
    pub percentage: f64,
}

/// Quantity and revenue summed over one product name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSales {
    pub product_name: String,
    pub total_quantity: i64,
    pub total_revenue: f64,
}

/// Spend profile of one customer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerSummary {
    pub customer_id: String,
    pub total_spent: f64,
    pub purchase_count: usize,
    /// `total_spent / purchase_count`, rounded to two decimals
    pub avg_order_value: f64,
    /// Distinct product names in first-purchase order
    pub products_bought: Vec<String>,
}

/// Totals for one calendar date token
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySales {
    pub date: String,
    pub revenue: f64,
    pub transaction_count: usize,
    pub unique_customers: usize,
}

/// Highest-revenue day
///
/// `date` is `None` when there were no transactions or no day had positive
/// revenue.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PeakDay {
    pub date: Option<String>,
    pub revenue: f64,
    pub transaction_count: usize,
}

/// Headline numbers for the report
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SalesOverview {
    pub transaction_count: usize,
    pub total_revenue: f64,
    pub average_order_value: f64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

impl SalesOverview {
    /// `"<first> to <last>"`, or `N/A` for an empty set
    pub fn date_range(&self) -> String {
        match (&self.first_date, &self.last_date) {
            (Some(first), Some(last)) => format!("{} to {}", first, last),
            _ => "N/A".to_string(),
        }
    }
}

/// Values offered to the user before filtering
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOptions {
    /// Distinct regions, sorted
    pub regions: Vec<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
}
