//! Core sales log parser implementation
//!
//! This module provides the parser orchestration: reading the log, walking
//! its lines and sorting them into parsed transactions and invalid lines.

use std::path::Path;
use tracing::{debug, info};

use super::reader::{TextEncoding, read_sales_lines};
use super::record_parser::parse_sales_line;
use super::stats::{ParseResult, ParseStats};

/// Parser for pipe-delimited sales logs
///
/// The parser never fails: blank lines are skipped, malformed lines are
/// counted and every other line becomes a transaction.
#[derive(Debug, Clone)]
pub struct SalesParser {
    encodings: Vec<TextEncoding>,
}

impl SalesParser {
    /// Create a parser that tries `encodings` in order when reading files
    pub fn new(encodings: Vec<TextEncoding>) -> Self {
        Self { encodings }
    }

    /// Read a sales log and parse its data lines
    ///
    /// A missing or undecodable file yields an empty result.
    pub fn parse_file(&self, file_path: &Path) -> ParseResult {
        info!("Parsing sales file: {}", file_path.display());
        let lines = read_sales_lines(file_path, &self.encodings);
        self.parse_lines(&lines)
    }

    /// Parse already-read data lines (header excluded)
    pub fn parse_lines<S: AsRef<str>>(&self, lines: &[S]) -> ParseResult {
        parse_transactions(lines)
    }
}

impl Default for SalesParser {
    fn default() -> Self {
        Self::new(TextEncoding::DEFAULT_ORDER.to_vec())
    }
}

/// Parse raw data lines into transactions and an invalid-line count
pub fn parse_transactions<S: AsRef<str>>(lines: &[S]) -> ParseResult {
    let mut stats = ParseStats::new();
    let mut transactions = Vec::new();

    for (index, raw) in lines.iter().enumerate() {
        stats.total_lines += 1;

        let line = raw.as_ref().trim();
        if line.is_empty() {
            stats.blank_lines += 1;
            continue;
        }

        match parse_sales_line(line) {
            Ok(transaction) => {
                transactions.push(transaction);
                stats.transactions_parsed += 1;
            }
            Err(e) => {
                debug!("Skipped line {}: {}", index + 1, e);
                stats.add_invalid(format!("Line {}: {}", index + 1, e));
            }
        }
    }

    info!(
        "Parsed {} transactions from {} lines ({} invalid, {} blank)",
        stats.transactions_parsed, stats.total_lines, stats.invalid_count, stats.blank_lines
    );

    ParseResult {
        transactions,
        stats,
    }
}
