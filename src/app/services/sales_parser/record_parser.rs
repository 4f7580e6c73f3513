//! Individual sales line parsing
//!
//! This module handles splitting one non-blank sales line into its eight
//! fields and building a [`Transaction`] from them.

use super::field_parsers::{parse_quantity, parse_unit_price, strip_commas};
use crate::app::models::Transaction;
use crate::constants::{FIELD_DELIMITER, SALES_FIELD_COUNT};
use crate::{Error, Result};

/// Parse a single trimmed, non-blank sales line
///
/// Fields are taken in the fixed order transaction_id, date, product_id,
/// product_name, quantity, unit_price, customer_id, region. Text fields are
/// kept verbatim apart from comma removal in the product name.
pub fn parse_sales_line(line: &str) -> Result<Transaction> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    if fields.len() != SALES_FIELD_COUNT {
        return Err(Error::data_validation(format!(
            "Expected {} fields, found {}",
            SALES_FIELD_COUNT,
            fields.len()
        )));
    }

    let quantity = parse_quantity(fields[4])?;
    let unit_price = parse_unit_price(fields[5])?;

    Ok(Transaction {
        transaction_id: fields[0].to_string(),
        date: fields[1].to_string(),
        product_id: fields[2].to_string(),
        product_name: strip_commas(fields[3]),
        quantity,
        unit_price,
        customer_id: fields[6].to_string(),
        region: fields[7].to_string(),
    })
}
