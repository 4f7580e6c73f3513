//! Test utilities for sales log parser testing
//!
//! This module provides fixtures and helper functions used across the
//! parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod reader_tests;

/// Header line used by the sales log fixtures
pub const TEST_HEADER: &str =
    "TransactionID|Date|ProductID|ProductName|Quantity|UnitPrice|CustomerID|Region";

/// A small, well-formed sales log body
pub fn sample_lines() -> Vec<String> {
    vec![
        "T001|2024-12-01|P101|Laptop|2|45,000|C001|North".to_string(),
        "T002|2024-12-01|P102|Mouse, Wireless|5|500|C002|South".to_string(),
        "T003|2024-12-02|P103|USB Cable|10|150.5|C001|North".to_string(),
    ]
}

/// Write raw bytes to a temporary file
pub fn create_temp_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

/// Write a header plus `lines` to a temporary sales log
pub fn create_sales_file(lines: &[String]) -> NamedTempFile {
    let mut content = String::from(TEST_HEADER);
    for line in lines {
        content.push('\n');
        content.push_str(line);
    }
    content.push('\n');
    create_temp_file(content.as_bytes())
}
