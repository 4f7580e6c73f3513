//! Report and enriched-data output
//!
//! - [`report`] - Plain-text sales report rendered from analytics results
//! - [`enriched`] - Pipe-delimited enriched transaction file
//! - [`format`] - Currency and percentage formatting

pub mod enriched;
pub mod format;
pub mod report;

#[cfg(test)]
pub mod tests;

pub use enriched::{format_enriched_row, write_enriched_data};
pub use report::{SalesReport, write_report};
