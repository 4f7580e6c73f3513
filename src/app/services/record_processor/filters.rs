//! Optional region and amount filters
//!
//! Filters only apply to transactions that already passed validation. Each
//! criterion is optional; the default filter keeps everything.

use crate::app::models::Transaction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a valid transaction was filtered out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    /// The transaction passes every configured criterion
    Keep,
    /// Region differs from the requested one
    Region,
    /// Amount is outside the requested range
    Amount,
}

/// User-selected narrowing of the valid transaction set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilter {
    /// Keep only this region (exact match)
    pub region: Option<String>,

    /// Keep only amounts >= this value
    pub min_amount: Option<f64>,

    /// Keep only amounts <= this value
    pub max_amount: Option<f64>,
}

impl TransactionFilter {
    /// Create a filter that keeps everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a single region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the lower amount bound
    pub fn with_min_amount(mut self, min_amount: f64) -> Self {
        self.min_amount = Some(min_amount);
        self
    }

    /// Set the upper amount bound
    pub fn with_max_amount(mut self, max_amount: f64) -> Self {
        self.max_amount = Some(max_amount);
        self
    }

    /// True when no criterion is set
    pub fn is_noop(&self) -> bool {
        self.region.is_none() && self.min_amount.is_none() && self.max_amount.is_none()
    }

    /// Evaluate the criteria in order: region, minimum, maximum
    pub fn evaluate(&self, transaction: &Transaction) -> FilterOutcome {
        if let Some(region) = &self.region {
            if transaction.region != *region {
                return FilterOutcome::Region;
            }
        }

        let amount = transaction.amount();

        if let Some(min_amount) = self.min_amount {
            if amount < min_amount {
                return FilterOutcome::Amount;
            }
        }

        if let Some(max_amount) = self.max_amount {
            if amount > max_amount {
                return FilterOutcome::Amount;
            }
        }

        FilterOutcome::Keep
    }
}

impl fmt::Display for TransactionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_noop() {
            return write!(f, "none");
        }

        let mut parts = Vec::new();
        if let Some(region) = &self.region {
            parts.push(format!("region={}", region));
        }
        if let Some(min_amount) = self.min_amount {
            parts.push(format!("min_amount={}", min_amount));
        }
        if let Some(max_amount) = self.max_amount {
            parts.push(format!("max_amount={}", max_amount));
        }
        write!(f, "{}", parts.join(", "))
    }
}
