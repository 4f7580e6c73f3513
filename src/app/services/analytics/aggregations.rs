//! Grouping and ranking routines over validated transactions
//!
//! Each view folds the transactions left to right into per-key accumulators,
//! keeping groups in first-seen order, then runs a final pass for ratios and
//! a stable sort. Ties therefore keep the order in which keys first appeared.

use crate::app::models::Transaction;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;

use super::types::{
    CustomerSummary, DailySales, FilterOptions, PeakDay, ProductSales, RegionSummary,
    SalesOverview,
};

/// Round to two decimal places, exact halves going to the even neighbour
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Fold transactions into groups keyed by `key`, in first-seen key order
fn fold_groups<'a, K, A, FK, FA>(transactions: &'a [Transaction], key: FK, mut fold: FA) -> Vec<(K, A)>
where
    K: Eq + Hash + Clone,
    A: Default,
    FK: Fn(&'a Transaction) -> K,
    FA: FnMut(&mut A, &'a Transaction),
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, A)> = Vec::new();

    for transaction in transactions {
        let k = key(transaction);
        let slot = match index.get(&k) {
            Some(&slot) => slot,
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, A::default()));
                groups.len() - 1
            }
        };
        fold(&mut groups[slot].1, transaction);
    }

    groups
}

/// Sum of `quantity * unit_price` over all transactions
pub fn calculate_total_revenue(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(Transaction::amount).sum()
}

/// Revenue by region, highest first
pub fn region_wise_sales(transactions: &[Transaction]) -> Vec<RegionSummary> {
    let total_revenue = calculate_total_revenue(transactions);

    let groups = fold_groups(
        transactions,
        |t| t.region.as_str(),
        |acc: &mut (f64, usize), t| {
            acc.0 += t.amount();
            acc.1 += 1;
        },
    );

    let mut regions: Vec<RegionSummary> = groups
        .into_iter()
        .map(|(region, (total_sales, transaction_count))| RegionSummary {
            region: region.to_string(),
            total_sales,
            transaction_count,
            percentage: if total_revenue == 0.0 {
                0.0
            } else {
                round2(total_sales / total_revenue * 100.0)
            },
        })
        .collect();

    regions.sort_by(|a, b| b.total_sales.total_cmp(&a.total_sales));
    regions
}

/// Quantity and revenue per product name, in first-seen order
///
/// Quantity sums saturate at `i64::MAX`.
fn product_totals(transactions: &[Transaction]) -> Vec<ProductSales> {
    fold_groups(
        transactions,
        |t| t.product_name.as_str(),
        |acc: &mut (i64, f64), t| {
            acc.0 = acc.0.saturating_add(t.quantity);
            acc.1 += t.amount();
        },
    )
    .into_iter()
    .map(|(name, (total_quantity, total_revenue))| ProductSales {
        product_name: name.to_string(),
        total_quantity,
        total_revenue,
    })
    .collect()
}

/// The `n` products with the largest summed quantity
pub fn top_selling_products(transactions: &[Transaction], n: usize) -> Vec<ProductSales> {
    let mut products = product_totals(transactions);
    products.sort_by(|a, b| b.total_quantity.cmp(&a.total_quantity));
    products.truncate(n);
    products
}

/// Every product whose summed quantity is below `threshold`, smallest first
pub fn low_performing_products(transactions: &[Transaction], threshold: i64) -> Vec<ProductSales> {
    let mut products: Vec<ProductSales> = product_totals(transactions)
        .into_iter()
        .filter(|p| p.total_quantity < threshold)
        .collect();
    products.sort_by(|a, b| a.total_quantity.cmp(&b.total_quantity));
    products
}

#[derive(Default)]
struct CustomerAccumulator<'a> {
    total_spent: f64,
    purchase_count: usize,
    seen: HashSet<&'a str>,
    products: Vec<&'a str>,
}

/// Spend per customer, biggest spender first
pub fn customer_analysis(transactions: &[Transaction]) -> Vec<CustomerSummary> {
    let groups = fold_groups::<_, CustomerAccumulator, _, _>(
        transactions,
        |t| t.customer_id.as_str(),
        |acc, t| {
            acc.total_spent += t.amount();
            acc.purchase_count += 1;
            if acc.seen.insert(t.product_name.as_str()) {
                acc.products.push(t.product_name.as_str());
            }
        },
    );

    let mut customers: Vec<CustomerSummary> = groups
        .into_iter()
        .map(|(customer_id, acc)| CustomerSummary {
            customer_id: customer_id.to_string(),
            total_spent: acc.total_spent,
            purchase_count: acc.purchase_count,
            avg_order_value: if acc.purchase_count == 0 {
                0.0
            } else {
                round2(acc.total_spent / acc.purchase_count as f64)
            },
            products_bought: acc.products.into_iter().map(str::to_string).collect(),
        })
        .collect();

    customers.sort_by(|a, b| b.total_spent.total_cmp(&a.total_spent));
    customers
}

/// Revenue, transactions and distinct customers per date, ascending by date
pub fn daily_sales_trend(transactions: &[Transaction]) -> Vec<DailySales> {
    let mut days: BTreeMap<&str, (f64, usize, HashSet<&str>)> = BTreeMap::new();

    for t in transactions {
        let entry = days.entry(t.date.as_str()).or_default();
        entry.0 += t.amount();
        entry.1 += 1;
        entry.2.insert(t.customer_id.as_str());
    }

    days.into_iter()
        .map(|(date, (revenue, transaction_count, customers))| DailySales {
            date: date.to_string(),
            revenue,
            transaction_count,
            unique_customers: customers.len(),
        })
        .collect()
}

/// Pick the day with strictly greatest revenue from a trend
///
/// Ties keep the earliest date; a trend without positive revenue yields the
/// empty peak.
pub fn peak_from_trend(trend: &[DailySales]) -> PeakDay {
    let mut peak = PeakDay::default();

    for day in trend {
        if day.revenue > peak.revenue {
            peak = PeakDay {
                date: Some(day.date.clone()),
                revenue: day.revenue,
                transaction_count: day.transaction_count,
            };
        }
    }

    peak
}

/// Day with the highest revenue
pub fn find_peak_sales_day(transactions: &[Transaction]) -> PeakDay {
    peak_from_trend(&daily_sales_trend(transactions))
}

/// Transaction count, revenue, average order value and date range
pub fn sales_overview(transactions: &[Transaction]) -> SalesOverview {
    let transaction_count = transactions.len();
    let total_revenue = calculate_total_revenue(transactions);

    let average_order_value = if transaction_count == 0 {
        0.0
    } else {
        total_revenue / transaction_count as f64
    };

    let first_date = transactions.iter().map(|t| t.date.as_str()).min();
    let last_date = transactions.iter().map(|t| t.date.as_str()).max();

    SalesOverview {
        transaction_count,
        total_revenue,
        average_order_value,
        first_date: first_date.map(str::to_string),
        last_date: last_date.map(str::to_string),
    }
}

/// Distinct regions and the amount range, shown before the filter prompt
pub fn filter_options(transactions: &[Transaction]) -> FilterOptions {
    let mut regions: Vec<String> = transactions
        .iter()
        .map(|t| t.region.as_str())
        .collect::<HashSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect();
    regions.sort();

    let amounts = transactions.iter().map(Transaction::amount);
    let min_amount = amounts.clone().reduce(f64::min);
    let max_amount = amounts.reduce(f64::max);

    FilterOptions {
        regions,
        min_amount,
        max_amount,
    }
}
