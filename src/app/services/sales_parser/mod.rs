//! Parser for pipe-delimited sales logs
//!
//! This module turns the raw sales log into typed [`Transaction`] records.
//! Malformed lines never abort a run: they are counted, logged at debug
//! level and dropped.
//!
//! ## Architecture
//!
//! - [`reader`] - File reading with ordered text-encoding fallback
//! - [`parser`] - Line-level orchestration and invalid-line accounting
//! - [`record_parser`] - Splitting one line into the eight sales fields
//! - [`field_parsers`] - Quantity and price conversion helpers
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use sales_analytics::app::services::sales_parser::parse_transactions;
//!
//! let lines = vec![
//!     "T1|2024-01-01|P101|Widget|2|10.0|C1|North".to_string(),
//!     "T2|2024-01-01|P102|Broken line".to_string(),
//! ];
//! let result = parse_transactions(&lines);
//!
//! assert_eq!(result.transactions.len(), 1);
//! assert_eq!(result.invalid_count(), 1);
//! ```
//!
//! [`Transaction`]: crate::app::models::Transaction

pub mod field_parsers;
pub mod parser;
pub mod reader;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{SalesParser, parse_transactions};
pub use reader::{TextEncoding, read_sales_lines, try_read_sales_lines};
pub use stats::{ParseResult, ParseStats};
