//! Enriched data file writer
//!
//! Writes the 12-column pipe-delimited file: the eight sales fields followed
//! by category, brand, rating and match flag. Absent catalog values are
//! written as `None` and the flag as `True`/`False`.

use crate::app::models::EnrichedTransaction;
use crate::constants::{ENRICHED_HEADER, FIELD_DELIMITER, MATCH_FALSE, MATCH_TRUE, NULL_TOKEN};
use crate::{Error, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use super::format::plain_float;

/// Format one enriched record as a data line (without newline)
pub fn format_enriched_row(record: &EnrichedTransaction) -> String {
    let t = &record.transaction;
    let fields = [
        t.transaction_id.clone(),
        t.date.clone(),
        t.product_id.clone(),
        t.product_name.clone(),
        t.quantity.to_string(),
        plain_float(t.unit_price),
        t.customer_id.clone(),
        t.region.clone(),
        record
            .api_category
            .clone()
            .unwrap_or_else(|| NULL_TOKEN.to_string()),
        record
            .api_brand
            .clone()
            .unwrap_or_else(|| NULL_TOKEN.to_string()),
        record
            .api_rating
            .map(plain_float)
            .unwrap_or_else(|| NULL_TOKEN.to_string()),
        (if record.api_match { MATCH_TRUE } else { MATCH_FALSE }).to_string(),
    ];

    fields.join(&FIELD_DELIMITER.to_string())
}

/// Write the header and one line per record, in input order
///
/// Creates the parent directory if needed. Returns the number of records
/// written.
pub fn write_enriched_data(path: &Path, records: &[EnrichedTransaction]) -> Result<usize> {
    let describe = |e: std::io::Error| Error::report_writing(path.display().to_string(), e.to_string());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(describe)?;
    }

    let file = File::create(path).map_err(describe)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", ENRICHED_HEADER).map_err(describe)?;
    for record in records {
        writeln!(writer, "{}", format_enriched_row(record)).map_err(describe)?;
    }
    writer.flush().map_err(describe)?;

    info!(
        "Wrote {} enriched records to {}",
        records.len(),
        path.display()
    );
    Ok(records.len())
}
