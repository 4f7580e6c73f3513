//! Analyze command implementation
//!
//! Runs the ten pipeline stages in order: read, parse, choose filters,
//! validate, analyze, fetch the catalog, enrich, save enriched data, write
//! the report and print the run summary.

use super::shared::{
    RunStats, StagePrinter, apply_cli_overrides, load_configuration, setup_logging,
};
use crate::app::services::analytics::{FilterOptions, SalesAnalytics, filter_options};
use crate::app::services::product_catalog::{CatalogProvider, CatalogSource, ProductCatalog};
use crate::app::services::record_processor::{RecordProcessor, TransactionFilter};
use crate::app::services::report_writer::{SalesReport, write_enriched_data, write_report};
use crate::app::services::sales_parser::{SalesParser, try_read_sales_lines};
use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::cli::input::{prompt_filter, show_filter_options};
use crate::config::Config;
use crate::{Error, Result};
use chrono::Local;
use colored::Colorize;
use std::io::{BufRead, BufReader, Write};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Analyze command runner
///
/// Malformed lines, failed validations and an unreachable catalog reduce the
/// data but never abort the run. Configuration problems and output files
/// that cannot be written are returned as errors.
pub async fn run_analyze(args: AnalyzeArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    let config = resolve_config(&args)?;
    let level = args
        .get_log_level()
        .map(str::to_string)
        .unwrap_or_else(|| config.logging.level.clone());
    setup_logging(&level, args.quiet)?;
    debug!("Effective configuration: {:?}", config);

    let printer = StagePrinter::new(args.show_stages());
    let show_progress = args.show_progress();
    let currency = config.output.currency_symbol.clone();
    let mut stats = RunStats::default();

    printer.banner("SALES ANALYTICS SYSTEM");

    // 1. Read
    printer.stage(1, "Reading sales data...");
    let lines = match try_read_sales_lines(&config.input.path, &config.input.encodings) {
        Ok(lines) => lines,
        Err(e) => {
            warn!("Could not read sales data: {}", e);
            printer.warning(format!("{}; continuing with no records", e));
            Vec::new()
        }
    };
    stats.lines_read = lines.len();
    printer.detail(format!("Successfully read {} transactions", lines.len()));

    // 2. Parse
    printer.stage(2, "Parsing and cleaning data...");
    let parser = SalesParser::new(config.input.encodings.clone());
    let parsed = parser.parse_lines(&lines);
    stats.parsed = parsed.transactions.len();
    stats.parse_invalid = parsed.invalid_count();
    printer.detail(format!("Parsed {} records", stats.parsed));
    if stats.parse_invalid > 0 {
        printer.warning(format!("Ignored {} invalid rows", stats.parse_invalid));
    }

    // 3. Filter options
    printer.stage(3, "Filter Options Available:");
    let options = filter_options(&parsed.transactions);
    let filter = choose_filter(&args, &options, &currency, printer).await?;
    info!("Using filters: {}", filter);

    // 4. Validate
    printer.stage(4, "Validating transactions...");
    let processor = RecordProcessor::new(filter);
    let result = processor.process_transactions(parsed.transactions, show_progress);
    let summary = &result.summary;
    stats.valid = summary.final_count;
    stats.invalid = summary.invalid;
    stats.filtered_by_region = summary.filtered_by_region;
    stats.filtered_by_amount = summary.filtered_by_amount;
    printer.detail(format!(
        "Valid: {} | Invalid: {}",
        summary.final_count, summary.invalid
    ));

    // 5. Analyze
    printer.stage(5, "Analyzing sales data...");
    let analytics = SalesAnalytics::compute(&result.transactions, &config.analysis);
    stats.total_revenue = analytics.total_revenue();
    printer.detail("Analysis complete");

    // 6. Catalog
    printer.stage(6, "Fetching product data from API...");
    let provider = CatalogProvider::from_config(&config.catalog)?;
    info!("Catalog source: {}", provider.describe());
    let catalog = ProductCatalog::from_products(provider.fetch_products().await);
    stats.catalog_products = catalog.product_count();
    printer.detail(format!("Fetched {} products", catalog.product_count()));

    // 7. Enrich
    printer.stage(7, "Enriching sales data...");
    let (enriched, enrichment) = processor.enrich(&result.transactions, &catalog, show_progress);
    stats.matched = enrichment.matched;
    stats.match_rate = enrichment.match_rate;
    printer.detail(format!(
        "Enriched {}/{} transactions ({:.1}%)",
        enrichment.matched, enrichment.total, enrichment.match_rate
    ));

    // 8. Save enriched data
    printer.stage(8, "Saving enriched data...");
    let enriched_path = config.output.enriched_path.clone();
    write_enriched_data(&enriched_path, &enriched)?;
    printer.detail(format!("Saved to: {}", enriched_path.display()));
    stats.enriched_path = Some(enriched_path);

    // 9. Report
    printer.stage(9, "Generating report...");
    let generated_at = Local::now().naive_local();
    let text = SalesReport::new(&analytics, &enrichment, &currency).render(&generated_at);
    let report_path = config.output.report_path.clone();
    write_report(&report_path, &text)?;
    printer.detail(format!("Report saved to: {}", report_path.display()));
    stats.report_path = Some(report_path);

    // 10. Done
    stats.elapsed = start_time.elapsed();
    printer.stage(10, &"Process Complete!".green().bold().to_string());
    if printer.is_enabled() {
        println!("{}", "=".repeat(40));
    }

    if printer.is_enabled() || args.output_format == OutputFormat::Json {
        stats.print_summary(args.output_format)?;
    }

    info!(
        "Analyze finished: {} valid transactions, revenue {:.2}",
        stats.valid, stats.total_revenue
    );

    Ok(stats)
}

/// Decide the filter from flags, an interactive prompt, or nothing
async fn choose_filter(
    args: &AnalyzeArgs,
    options: &FilterOptions,
    currency: &str,
    printer: StagePrinter,
) -> Result<TransactionFilter> {
    if args.has_filter_flags() {
        let mut filter = TransactionFilter::new();
        if let Some(region) = &args.region {
            filter = filter.with_region(region.clone());
        }
        if let Some(min) = args.min_amount {
            filter = filter.with_min_amount(min);
        }
        if let Some(max) = args.max_amount {
            filter = filter.with_max_amount(max);
        }
        if printer.is_enabled() {
            print_options(options, currency)?;
            printer.detail(format!("Filters from command line: {}", filter));
        }
        return Ok(filter);
    }

    if args.should_prompt() {
        return prompt_filter_blocking(
            BufReader::new(std::io::stdin()),
            std::io::stdout(),
            options.clone(),
            currency.to_string(),
        )
        .await;
    }

    if printer.is_enabled() {
        print_options(options, currency)?;
    }
    Ok(TransactionFilter::new())
}

/// Run the filter dialogue on the blocking pool
///
/// The runtime thread stays free while input is pending, so the Ctrl-C
/// handler in `main` can still fire at the prompt.
async fn prompt_filter_blocking<R, W>(
    mut reader: R,
    mut writer: W,
    options: FilterOptions,
    currency: String,
) -> Result<TransactionFilter>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    tokio::task::spawn_blocking(move || prompt_filter(&mut reader, &mut writer, &options, &currency))
        .await
        .map_err(|e| Error::io("Filter prompt task failed", std::io::Error::other(e)))?
}

fn print_options(options: &FilterOptions, currency: &str) -> Result<()> {
    let stdout = std::io::stdout();
    show_filter_options(&mut stdout.lock(), options, currency)
}

/// Layer defaults, config file, environment and flags into one validated config
pub fn resolve_config(args: &AnalyzeArgs) -> Result<Config> {
    args.validate()?;
    let config = apply_cli_overrides(load_configuration(args.config_file.as_deref())?, args);
    config.validate()?;
    Ok(config)
}
