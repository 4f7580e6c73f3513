//! Application constants for the sales analytics pipeline
//!
//! This module contains the file layout, wire-format markers and default
//! analysis parameters used throughout the application.

// =============================================================================
// Input Format
// =============================================================================

/// Field delimiter of the sales log
pub const FIELD_DELIMITER: char = '|';

/// Number of fields every sales line must split into
pub const SALES_FIELD_COUNT: usize = 8;

/// Default location of the sales log
pub const DEFAULT_SALES_FILE: &str = "data/sales_data.txt";

/// Leading characters required by the identifier validations
pub mod id_prefix {
    pub const TRANSACTION: &str = "T";
    pub const PRODUCT: &str = "P";
    pub const CUSTOMER: &str = "C";
}

// =============================================================================
// Output Files
// =============================================================================

/// Default location of the enriched data file
pub const DEFAULT_ENRICHED_FILE: &str = "data/enriched_sales_data.txt";

/// Default location of the text report
pub const DEFAULT_REPORT_FILE: &str = "output/sales_report.txt";

/// Header of the enriched data file
pub const ENRICHED_HEADER: &str = "TransactionID|Date|ProductID|ProductName|Quantity|UnitPrice|\
                                   CustomerID|Region|API_Category|API_Brand|API_Rating|API_Match";

/// Token written for catalog fields that are absent
pub const NULL_TOKEN: &str = "None";

/// Tokens written for the API_Match column
pub const MATCH_TRUE: &str = "True";
pub const MATCH_FALSE: &str = "False";

/// Currency symbol used in the report
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Width of the section rules in the report
pub const REPORT_RULE_WIDTH: usize = 44;

// =============================================================================
// Product Catalog
// =============================================================================

/// Reference catalog service
pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com/products";

/// Page size served by the reference catalog service
pub const DEFAULT_CATALOG_PAGE_SIZE: usize = 100;

/// Pages fetched per run (one page matches the reference behaviour)
pub const DEFAULT_CATALOG_MAX_PAGES: usize = 1;

/// Request timeout for catalog fetches
pub const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// Analysis Defaults
// =============================================================================

/// Number of products in the top-selling list
pub const DEFAULT_TOP_PRODUCTS: usize = 5;

/// Number of customers shown in the report
pub const DEFAULT_TOP_CUSTOMERS: usize = 5;

/// Products with a summed quantity below this are low performers
pub const DEFAULT_LOW_PERFORMER_THRESHOLD: i64 = 10;

// =============================================================================
// Environment and Config File
// =============================================================================

/// Environment variable overrides
pub mod env_vars {
    pub const INPUT: &str = "SALES_ANALYTICS_INPUT";
    pub const CATALOG_URL: &str = "SALES_ANALYTICS_CATALOG_URL";
    pub const OUTPUT_DIR: &str = "SALES_ANALYTICS_OUTPUT_DIR";
}

/// Directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "sales-analytics";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Total number of user-visible pipeline stages
pub const PIPELINE_STAGES: usize = 10;
