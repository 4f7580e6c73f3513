//! Data models for sales analytics
//!
//! This module contains the core data structures for representing parsed
//! sales transactions, their catalog-enriched form and the catalog entries
//! they are matched against.

use serde::{Deserialize, Serialize};

// =============================================================================
// Transaction
// =============================================================================

/// A single parsed sales line
///
/// Values are kept exactly as parsed: grouping keys such as `region` or
/// `customer_id` are never trimmed or case-folded, so two records group
/// together only when the strings are identical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction identifier, valid records start with "T"
    pub transaction_id: String,

    /// Date token, compared lexicographically
    pub date: String,

    /// Product identifier, valid records start with "P"
    pub product_id: String,

    /// Product name with commas removed
    pub product_name: String,

    /// Units sold
    pub quantity: i64,

    /// Price per unit with thousands separators removed
    pub unit_price: f64,

    /// Customer identifier, valid records start with "C"
    pub customer_id: String,

    /// Sales region
    pub region: String,
}

impl Transaction {
    /// Create a new transaction
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        transaction_id: impl Into<String>,
        date: impl Into<String>,
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        quantity: i64,
        unit_price: f64,
        customer_id: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            date: date.into(),
            product_id: product_id.into(),
            product_name: product_name.into(),
            quantity,
            unit_price,
            customer_id: customer_id.into(),
            region: region.into(),
        }
    }

    /// Sale amount (`quantity * unit_price`), computed on every call
    pub fn amount(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }

    /// Numeric catalog id embedded in the product identifier
    ///
    /// Every ASCII digit in `product_id` is concatenated in order and parsed
    /// as an integer, so `P101` yields 101 and `P-1x0` yields 10. Returns
    /// `None` when there are no digits or the number does not fit.
    pub fn catalog_id(&self) -> Option<i64> {
        let digits: String = self
            .product_id
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();

        if digits.is_empty() {
            return None;
        }

        digits.parse::<i64>().ok()
    }
}

// =============================================================================
// Enriched Transaction
// =============================================================================

/// A transaction with the catalog metadata matched to it
///
/// `api_category`, `api_brand` and `api_rating` are all `None` when
/// `api_match` is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedTransaction {
    #[serde(flatten)]
    pub transaction: Transaction,

    pub api_category: Option<String>,

    pub api_brand: Option<String>,

    pub api_rating: Option<f64>,

    /// True when the product's numeric id exists in the catalog
    pub api_match: bool,
}

impl EnrichedTransaction {
    /// Wrap a transaction that matched catalog entry `info`
    pub fn matched(transaction: Transaction, info: &ProductInfo) -> Self {
        Self {
            transaction,
            api_category: info.category.clone(),
            api_brand: info.brand.clone(),
            api_rating: info.rating,
            api_match: true,
        }
    }

    /// Wrap a transaction with no catalog entry
    pub fn unmatched(transaction: Transaction) -> Self {
        Self {
            transaction,
            api_category: None,
            api_brand: None,
            api_rating: None,
            api_match: false,
        }
    }
}

// =============================================================================
// Catalog Entries
// =============================================================================

/// Product entry as delivered by the catalog service
///
/// Every field is optional on the wire; entries without an id are dropped
/// when the catalog mapping is built.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogProduct {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub rating: Option<f64>,
}

/// Metadata stored per catalog id
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductInfo {
    pub title: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub rating: Option<f64>,
}

impl From<CatalogProduct> for ProductInfo {
    fn from(product: CatalogProduct) -> Self {
        Self {
            title: product.title,
            category: product.category,
            brand: product.brand,
            rating: product.rating,
        }
    }
}
