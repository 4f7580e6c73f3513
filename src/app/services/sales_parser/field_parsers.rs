//! Field parsing utilities for sales log lines
//!
//! This module provides helper functions for converting the numeric and
//! free-text fields of a sales line, with errors carrying the offending
//! value for debug logging.

use crate::{Error, Result};

/// Remove every comma from a field
pub fn strip_commas(value: &str) -> String {
    value.replace(',', "")
}

/// Drop `_` separators that sit between two digits (`1_000` -> `1000`)
///
/// Leading, trailing or doubled underscores are kept so the number still
/// fails to parse.
pub fn strip_digit_separators(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();

    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            let between_digits = i > 0
                && i + 1 < chars.len()
                && chars[i - 1].is_ascii_digit()
                && chars[i + 1].is_ascii_digit();
            !(c == '_' && between_digits)
        })
        .map(|(_, &c)| c)
        .collect()
}

/// Parse the quantity field as an integer
///
/// Surrounding whitespace and `_` digit separators are tolerated; anything
/// else that is not a plain integer is rejected.
pub fn parse_quantity(value: &str) -> Result<i64> {
    let cleaned = strip_digit_separators(value.trim());
    let trimmed = cleaned.as_str();

    trimmed.parse::<i64>().map_err(|e| {
        Error::data_validation(format!(
            "Invalid integer format for quantity: '{}' ({})",
            trimmed, e
        ))
    })
}

/// Parse the unit price field as a float
///
/// Thousands separators are removed first, so `1,299.50` and `1_299.50` both
/// parse as 1299.5.
pub fn parse_unit_price(value: &str) -> Result<f64> {
    let cleaned = strip_digit_separators(strip_commas(value).trim());
    let trimmed = cleaned.as_str();

    trimmed.parse::<f64>().map_err(|e| {
        Error::data_validation(format!(
            "Invalid float format for unit price: '{}' ({})",
            trimmed, e
        ))
    })
}
