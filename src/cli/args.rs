//! Command-line argument definitions for the sales analytics pipeline
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the sales analytics pipeline
///
/// Reads a pipe-delimited sales log, validates and filters the transactions,
/// computes sales analytics, enriches records from a product catalog and
/// writes an enriched data file plus a text report.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sales-analytics",
    version,
    about = "Analyze a pipe-delimited sales log and write an enriched data file and report",
    long_about = "Reads a pipe-delimited sales transaction log, validates and optionally filters \
                  the transactions, computes revenue breakdowns by region, product, customer and \
                  day, enriches each record with product catalog metadata and writes an enriched \
                  data file together with a plain-text sales report."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the full pipeline: parse, validate, analyze, enrich and report
    Analyze(AnalyzeArgs),
    /// Read, parse and validate the sales log without writing anything
    Validate(ValidateArgs),
}

/// Arguments for the analyze command
#[derive(Debug, Clone, Default, Parser)]
pub struct AnalyzeArgs {
    /// Path to the sales log
    ///
    /// Defaults to data/sales_data.txt, or SALES_ANALYTICS_INPUT when set.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Path to the pipe-delimited sales log"
    )]
    pub input_path: Option<PathBuf>,

    /// Where the enriched data file is written
    #[arg(
        long = "enriched-output",
        value_name = "FILE",
        help = "Output path for the enriched data file"
    )]
    pub enriched_output: Option<PathBuf>,

    /// Where the text report is written
    #[arg(
        long = "report-output",
        value_name = "FILE",
        help = "Output path for the sales report"
    )]
    pub report_output: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// JSON configuration file. If not specified, looks for
    /// <config dir>/sales-analytics/config.json
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Keep only transactions from this region (exact match)
    #[arg(long = "region", value_name = "NAME", help = "Keep only this region")]
    pub region: Option<String>,

    /// Keep only transactions with amount >= this value
    #[arg(
        long = "min-amount",
        value_name = "AMOUNT",
        help = "Minimum transaction amount to keep"
    )]
    pub min_amount: Option<f64>,

    /// Keep only transactions with amount <= this value
    #[arg(
        long = "max-amount",
        value_name = "AMOUNT",
        help = "Maximum transaction amount to keep"
    )]
    pub max_amount: Option<f64>,

    /// Never ask for filters interactively
    #[arg(long = "no-prompt", help = "Do not prompt for filters")]
    pub no_prompt: bool,

    /// Catalog listing endpoint
    #[arg(
        long = "catalog-url",
        value_name = "URL",
        help = "Product catalog endpoint"
    )]
    pub catalog_url: Option<String>,

    /// Read the catalog from a local JSON file instead of the service
    #[arg(
        long = "catalog-file",
        value_name = "FILE",
        help = "Read the product catalog from a JSON file",
        conflicts_with = "catalog_url"
    )]
    pub catalog_file: Option<PathBuf>,

    /// Skip catalog enrichment entirely
    #[arg(long = "offline", help = "Skip the product catalog")]
    pub offline: bool,

    /// Number of products in the top-selling list
    #[arg(
        long = "top-products",
        value_name = "N",
        help = "Number of top-selling products to report"
    )]
    pub top_products: Option<usize>,

    /// Quantity below which a product is reported as low performing
    #[arg(
        long = "low-threshold",
        value_name = "QTY",
        help = "Quantity threshold for low performing products"
    )]
    pub low_threshold: Option<i64>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Also disables the interactive prompt.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the final summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Show per-record progress bars
    #[arg(long = "progress", help = "Show progress bars for per-record stages")]
    pub progress: bool,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Default, Parser)]
pub struct ValidateArgs {
    /// Path to the sales log
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Path to the pipe-delimited sales log"
    )]
    pub input_path: Option<PathBuf>,

    /// Path to configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the validation summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for the end-of-run summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON format for scripting
    Json,
}

/// Map verbosity flags to a log level; `None` means use the configured level
fn log_level(verbose: u8, quiet: bool) -> Option<&'static str> {
    if quiet {
        Some("error")
    } else {
        match verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

impl AnalyzeArgs {
    /// Validate the analyze command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min_amount, self.max_amount) {
            if min > max {
                return Err(Error::configuration(format!(
                    "--min-amount ({}) is greater than --max-amount ({})",
                    min, max
                )));
            }
        }

        if self.top_products == Some(0) {
            return Err(Error::configuration(
                "--top-products must be greater than 0",
            ));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// True when any filter was given on the command line
    pub fn has_filter_flags(&self) -> bool {
        self.region.is_some() || self.min_amount.is_some() || self.max_amount.is_some()
    }

    /// Whether to ask for filters interactively
    pub fn should_prompt(&self) -> bool {
        !self.no_prompt && !self.quiet && !self.has_filter_flags()
    }

    /// Log level forced by `-v`/`-q`, if any
    pub fn get_log_level(&self) -> Option<&'static str> {
        log_level(self.verbose, self.quiet)
    }

    /// Check if we should print stage output (not in quiet mode)
    pub fn show_stages(&self) -> bool {
        !self.quiet
    }

    /// Check if we should show progress bars
    pub fn show_progress(&self) -> bool {
        self.progress && !self.quiet
    }
}

impl ValidateArgs {
    /// Log level forced by `-v`/`-q`, if any
    pub fn get_log_level(&self) -> Option<&'static str> {
        log_level(self.verbose, self.quiet)
    }
}
