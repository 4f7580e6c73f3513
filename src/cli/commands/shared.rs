//! Shared components for CLI commands
//!
//! Run statistics, logging setup, layered configuration loading and the
//! stage printer used by both the analyze and validate commands.

use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::config::Config;
use crate::constants::PIPELINE_STAGES;
use crate::{Error, Result};
use colored::Colorize;
use indicatif::HumanDuration;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Counters collected over one command run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    /// Data lines read from the sales log
    pub lines_read: usize,
    /// Transactions produced by the parser
    pub parsed: usize,
    /// Lines the parser rejected
    pub parse_invalid: usize,
    /// Transactions that passed validation and filters
    pub valid: usize,
    /// Transactions rejected by validation
    pub invalid: usize,
    pub filtered_by_region: usize,
    pub filtered_by_amount: usize,
    /// Products returned by the catalog source
    pub catalog_products: usize,
    /// Transactions matched to a catalog product
    pub matched: usize,
    /// Percentage of valid transactions that matched
    pub match_rate: f64,
    pub total_revenue: f64,
    /// Enriched data file, when written
    pub enriched_path: Option<PathBuf>,
    /// Report file, when written
    pub report_path: Option<PathBuf>,
    /// Wall-clock time for the run
    #[serde(serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

fn serialize_secs<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

impl RunStats {
    /// Render the stats as pretty JSON for `--output-format json`
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::json("Failed to serialize run summary", e))
    }

    /// Print the end-of-run summary in the requested format
    pub fn print_summary(&self, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Json => println!("{}", self.to_json()?),
            OutputFormat::Human => {
                println!("{}", "📊 Run Summary:".bold());
                println!("   • Lines read: {}", self.lines_read);
                println!(
                    "   • Parsed: {} (ignored {})",
                    self.parsed, self.parse_invalid
                );
                println!("   • Valid: {} | Invalid: {}", self.valid, self.invalid);
                if self.filtered_by_region + self.filtered_by_amount > 0 {
                    println!(
                        "   • Filtered out: {} by region, {} by amount",
                        self.filtered_by_region, self.filtered_by_amount
                    );
                }
                println!("   • Processing time: {}", HumanDuration(self.elapsed));
            }
        }
        Ok(())
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` wins over `level`. Calling this twice in one process keeps the
/// first subscriber.
pub fn setup_logging(level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sales_analytics={}", level)));

    let installed = if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if installed.is_err() {
        debug!("Logging already initialized, keeping existing subscriber");
    } else {
        debug!("Logging initialized at level: {}", level);
    }
    Ok(())
}

/// Load configuration using the layered approach (defaults -> file -> env)
///
/// CLI overrides are applied by the caller.
pub fn load_configuration(config_file: Option<&Path>) -> Result<Config> {
    match config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => debug!("No explicit config file, checking the per-user location"),
    }

    Config::load_layered(config_file)
}

/// Apply analyze command flags on top of the loaded configuration
pub fn apply_cli_overrides(mut config: Config, args: &AnalyzeArgs) -> Config {
    if let Some(input_path) = &args.input_path {
        config = config.with_input_path(input_path.clone());
    }
    if let Some(path) = &args.enriched_output {
        config = config.with_enriched_output(path.clone());
    }
    if let Some(path) = &args.report_output {
        config = config.with_report_output(path.clone());
    }
    if let Some(url) = &args.catalog_url {
        config = config.with_catalog_url(url.clone());
    }
    if let Some(file) = &args.catalog_file {
        config = config.with_catalog_file(file.clone());
    }
    if args.offline {
        config = config.with_offline();
    }
    if let Some(n) = args.top_products {
        config = config.with_top_products(n);
    }
    if let Some(threshold) = args.low_threshold {
        config = config.with_low_threshold(threshold);
    }
    config
}

/// Prints numbered stage headers such as `[3/10] Filter Options Available:`
#[derive(Debug, Clone, Copy)]
pub struct StagePrinter {
    enabled: bool,
}

impl StagePrinter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Print the banner that opens a run
    pub fn banner(&self, title: &str) {
        if self.enabled {
            let rule = "=".repeat(40);
            println!("{}", rule);
            println!("{}", format!("{:^40}", title).bold());
            println!("{}", rule);
        }
    }

    pub fn stage(&self, number: usize, title: &str) {
        if self.enabled {
            let counter = format!("[{}/{}]", number, PIPELINE_STAGES);
            println!("\n{} {}", counter.cyan().bold(), title);
        }
    }

    /// Print an indented detail line under the current stage
    pub fn detail(&self, message: impl AsRef<str>) {
        if self.enabled {
            println!(" {}", message.as_ref());
        }
    }

    pub fn warning(&self, message: impl AsRef<str>) {
        if self.enabled {
            println!("{} {}", "⚠".yellow(), message.as_ref());
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
