//! Parsing statistics and result structures for sales log processing
//!
//! This module provides types for tracking parse outcomes and handing the
//! parsed transactions to the validation stage.

use crate::app::models::Transaction;

/// Parsing result with transactions and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed transactions, in input order
    pub transactions: Vec<Transaction>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

impl ParseResult {
    /// Number of lines that were malformed and discarded
    pub fn invalid_count(&self) -> usize {
        self.stats.invalid_count
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of lines handed to the parser
    pub total_lines: usize,

    /// Lines skipped because they were blank after trimming
    pub blank_lines: usize,

    /// Number of transactions successfully parsed
    pub transactions_parsed: usize,

    /// Number of non-blank lines discarded as malformed
    pub invalid_count: usize,

    /// List of parsing errors for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            blank_lines: 0,
            transactions_parsed: 0,
            invalid_count: 0,
            errors: Vec::new(),
        }
    }

    /// Record a malformed line together with the reason
    pub fn add_invalid(&mut self, message: String) {
        self.invalid_count += 1;
        self.errors.push(message);
    }

    /// Number of non-blank lines the parser looked at
    pub fn candidate_lines(&self) -> usize {
        self.transactions_parsed + self.invalid_count
    }

    /// Calculate success rate over non-blank lines as a percentage
    pub fn success_rate(&self) -> f64 {
        let candidates = self.candidate_lines();
        if candidates == 0 {
            0.0
        } else {
            (self.transactions_parsed as f64 / candidates as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
