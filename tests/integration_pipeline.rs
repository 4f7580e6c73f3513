//! End-to-end tests for the analyze and validate commands
//!
//! Each test writes a sales log into a temporary directory and runs the
//! command the way the binary does, with the catalog either disabled or
//! served from a local JSON file.

use clap::Parser;
use sales_analytics::cli::args::Args;
use sales_analytics::cli::commands;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const HEADER: &str = "TransactionID|Date|ProductID|ProductName|Quantity|UnitPrice|CustomerID|Region";

fn write_sales_log(dir: &Path, rows: &[&str]) -> PathBuf {
    let path = dir.join("sales_data.txt");
    let mut content = format!("{}\n", HEADER);
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    std::fs::write(&path, content).unwrap();
    path
}

fn analyze_args(input: &Path, out: &Path, extra: &[&str]) -> Args {
    let input = input.display().to_string();
    let enriched = out.join("data").join("enriched.txt").display().to_string();
    let report = out.join("output").join("report.txt").display().to_string();

    let mut argv = vec![
        "sales-analytics",
        "analyze",
        "-i",
        input.as_str(),
        "--enriched-output",
        enriched.as_str(),
        "--report-output",
        report.as_str(),
        "--no-prompt",
        "-q",
    ];
    argv.extend_from_slice(extra);
    Args::try_parse_from(argv).unwrap()
}

#[tokio::test]
async fn test_analyze_offline_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = write_sales_log(
        dir.path(),
        &[
            "T1|2024-01-01|P101|Widget|2|10.0|C1|North",
            "T2|2024-01-01|P999|Gadget|0|5.0|C2|South",
        ],
    );

    let stats = commands::run(analyze_args(&input, dir.path(), &["--offline"]))
        .await
        .unwrap();

    assert_eq!(stats.lines_read, 2);
    assert_eq!(stats.parsed, 2);
    assert_eq!(stats.valid, 1);
    assert_eq!(stats.invalid, 1);
    assert_eq!(stats.total_revenue, 20.0);
    assert_eq!(stats.matched, 0);

    let enriched = std::fs::read_to_string(stats.enriched_path.unwrap()).unwrap();
    let lines: Vec<&str> = enriched.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[1],
        "T1|2024-01-01|P101|Widget|2|10.0|C1|North|None|None|None|False"
    );

    let report = std::fs::read_to_string(stats.report_path.unwrap()).unwrap();
    assert!(report.contains("Records Processed: 1"));
    assert!(report.contains("North"));
    assert!(report.contains("100.00%"));
}

#[tokio::test]
async fn test_analyze_with_catalog_file_and_filters() {
    let dir = TempDir::new().unwrap();
    let input = write_sales_log(
        dir.path(),
        &[
            "T001|2024-12-01|P101|Laptop|1|45,000|C001|North",
            "T002|2024-12-02|P102|Mouse|4|500|C002|South",
            "T003|2024-12-02|P101|Laptop|1|45,000|C003|South",
            "this line is malformed",
        ],
    );
    let catalog = dir.path().join("catalog.json");
    std::fs::write(
        &catalog,
        r#"{"products": [
            {"id": 101, "title": "Laptop", "category": "laptops", "brand": "Lenovo", "rating": 4.6},
            {"id": 102, "title": "Mouse", "category": "accessories", "brand": "Logitech", "rating": 4.2}
        ], "total": 2, "skip": 0, "limit": 2}"#,
    )
    .unwrap();
    let catalog = catalog.display().to_string();

    let stats = commands::run(analyze_args(
        &input,
        dir.path(),
        &["--catalog-file", catalog.as_str(), "--region", "South", "--max-amount", "10000"],
    ))
    .await
    .unwrap();

    assert_eq!(stats.parse_invalid, 1);
    assert_eq!(stats.valid, 1);
    assert_eq!(stats.filtered_by_region, 1);
    assert_eq!(stats.filtered_by_amount, 1);
    assert_eq!(stats.catalog_products, 2);
    assert_eq!(stats.matched, 1);
    assert_eq!(stats.match_rate, 100.0);

    let enriched = std::fs::read_to_string(stats.enriched_path.unwrap()).unwrap();
    assert!(enriched.contains("T002|2024-12-02|P102|Mouse|4|500.0|C002|South|accessories|Logitech|4.2|True"));
}

#[tokio::test]
async fn test_analyze_missing_input_writes_empty_outputs() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.txt");

    let stats = commands::run(analyze_args(&missing, dir.path(), &["--offline"]))
        .await
        .unwrap();

    assert_eq!(stats.lines_read, 0);
    assert_eq!(stats.valid, 0);

    let report = std::fs::read_to_string(stats.report_path.unwrap()).unwrap();
    assert!(report.contains("Date Range:           N/A"));
}

#[tokio::test]
async fn test_analyze_rejects_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let input = write_sales_log(dir.path(), &[]);
    let config = dir.path().join("absent.json").display().to_string();

    let result = commands::run(analyze_args(
        &input,
        dir.path(),
        &["--offline", "--config", config.as_str()],
    ))
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_validate_command() {
    let dir = TempDir::new().unwrap();
    let input = write_sales_log(
        dir.path(),
        &[
            "T1|2024-01-01|P101|Widget|2|10.0|C1|North",
            "X9|2024-01-01|P102|Gadget|1|5.0|C2|South",
        ],
    );
    let input = input.display().to_string();

    let args = Args::try_parse_from(["sales-analytics", "validate", "-i", input.as_str(), "-q"])
        .unwrap();
    let stats = commands::run(args).await.unwrap();

    assert_eq!(stats.parsed, 2);
    assert_eq!(stats.valid, 1);
    assert_eq!(stats.invalid, 1);
    assert!(stats.report_path.is_none());
}
