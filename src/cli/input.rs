//! User input utilities for interactive CLI prompts
//!
//! Prompts read from any `BufRead` and write to any `Write` so the
//! filter dialogue can be driven from tests. The binary passes locked
//! stdin/stdout.

use crate::app::services::analytics::FilterOptions;
use crate::app::services::record_processor::TransactionFilter;
use crate::app::services::report_writer::format::money_whole;
use crate::{Error, Result};
use std::io::{BufRead, Write};
use tracing::warn;

/// Read one trimmed line; `None` at end of input
fn read_answer<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut input = String::new();
    let bytes = reader
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input", e))?;

    if bytes == 0 {
        Ok(None)
    } else {
        Ok(Some(input.trim().to_string()))
    }
}

fn ask<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, question: &str) -> Result<Option<String>> {
    write!(writer, "{}", question).map_err(|e| Error::io("Failed to write prompt", e))?;
    writer
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout", e))?;
    read_answer(reader)
}

/// Ask a yes/no question until a recognizable answer arrives
///
/// End of input counts as "no".
pub fn prompt_confirmation<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
) -> Result<bool> {
    loop {
        let Some(answer) = ask(reader, writer, &format!("{} (y/n): ", message))? else {
            return Ok(false);
        };

        match answer.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "" => return Ok(false),
            _ => {
                writeln!(writer, "Please enter 'y' for yes or 'n' for no.")
                    .map_err(|e| Error::io("Failed to write prompt", e))?;
            }
        }
    }
}

/// Parse an amount answer
///
/// Blank means no bound. Anything that is not a finite number also means no
/// bound and is reported as `Err` with the rejected text so the caller can
/// warn about it.
pub fn parse_amount_input(input: &str) -> std::result::Result<Option<f64>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.replace(',', "").parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(trimmed.to_string()),
    }
}

fn ask_amount<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
    label: &str,
) -> Result<Option<f64>> {
    let answer = ask(reader, writer, question)?.unwrap_or_default();

    match parse_amount_input(&answer) {
        Ok(value) => Ok(value),
        Err(rejected) => {
            warn!("Ignoring non-numeric {} amount '{}'", label, rejected);
            writeln!(
                writer,
                "⚠ '{}' is not a number, no {} amount filter applied",
                rejected, label
            )
            .map_err(|e| Error::io("Failed to write prompt", e))?;
            Ok(None)
        }
    }
}

/// Print the available regions and the amount range
pub fn show_filter_options<W: Write>(
    writer: &mut W,
    options: &FilterOptions,
    currency: &str,
) -> Result<()> {
    let write_err = |e: std::io::Error| Error::io("Failed to write filter options", e);

    if options.regions.is_empty() {
        writeln!(writer, "Regions: (none)").map_err(write_err)?;
    } else {
        writeln!(writer, "Regions: {}", options.regions.join(", ")).map_err(write_err)?;
    }

    match (options.min_amount, options.max_amount) {
        (Some(min), Some(max)) => writeln!(
            writer,
            "Amount Range: {} - {}",
            money_whole(min, currency),
            money_whole(max, currency)
        )
        .map_err(write_err)?,
        _ => writeln!(writer, "Amount Range: N/A").map_err(write_err)?,
    }

    Ok(())
}

/// Run the interactive filter dialogue
///
/// Declining returns the empty filter. Blank answers skip a criterion.
pub fn prompt_filter<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    options: &FilterOptions,
    currency: &str,
) -> Result<TransactionFilter> {
    show_filter_options(writer, options, currency)?;

    if !prompt_confirmation(reader, writer, "Do you want to filter data?")? {
        return Ok(TransactionFilter::new());
    }

    let region = ask(reader, writer, "Enter region (or press Enter to skip): ")?
        .filter(|r| !r.is_empty());
    let min_amount = ask_amount(
        reader,
        writer,
        "Enter minimum amount (or press Enter to skip): ",
        "minimum",
    )?;
    let max_amount = ask_amount(
        reader,
        writer,
        "Enter maximum amount (or press Enter to skip): ",
        "maximum",
    )?;

    Ok(TransactionFilter {
        region,
        min_amount,
        max_amount,
    })
}
