//! Shared fixtures for analytics tests

use crate::app::models::Transaction;


/// Create a valid transaction for aggregation tests
pub fn sale(
    id: &str,
    date: &str,
    product: &str,
    quantity: i64,
    unit_price: f64,
    customer: &str,
    region: &str,
) -> Transaction {
    Transaction::new(
        id,
        date,
        format!("P{}", id.trim_start_matches('T')),
        product,
        quantity,
        unit_price,
        customer,
        region,
    )
}

/// A small mixed data set
///
/// Revenue: North 300, South 150, East 50 (total 500).
pub fn sample_sales() -> Vec<Transaction> {
    vec![
        sale("T1", "2024-12-02", "Laptop", 1, 200.0, "C1", "North"),
        sale("T2", "2024-12-01", "Mouse", 10, 5.0, "C2", "South"),
        sale("T3", "2024-12-01", "Keyboard", 2, 50.0, "C1", "North"),
        sale("T4", "2024-12-03", "Mouse", 4, 25.0, "C3", "South"),
        sale("T5", "2024-12-02", "Cable", 5, 10.0, "C2", "East"),
    ]
}
