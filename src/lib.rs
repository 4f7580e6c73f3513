//! Sales Analytics Library
//!
//! A Rust library for turning a pipe-delimited sales transaction log into
//! grouped analytics, catalog-enriched records and a plain-text report.
//!
//! This library provides tools for:
//! - Reading sales logs with text-encoding fallback
//! - Parsing raw lines into typed transactions with malformed-line accounting
//! - Validating transactions and narrowing them by region and amount
//! - Aggregating revenue by region, product, customer and day
//! - Enriching transactions with product catalog metadata
//! - Writing the enriched data file and the sales report

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod analytics;
        pub mod product_catalog;
        pub mod record_processor;
        pub mod report_writer;
        pub mod sales_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{EnrichedTransaction, Transaction};
pub use config::Config;

/// Result type alias for the sales analytics pipeline
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for sales analytics operations
///
/// Malformed lines, failed validations and catalog outages never surface
/// here; they are absorbed into counters or empty results by the stage that
/// meets them. These variants cover the failures a caller has to see.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// None of the configured encodings could decode the input
    #[error("Could not decode '{path}' with any of: {tried}")]
    Encoding { path: String, tried: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Product catalog request failed
    #[error("Product catalog error: {message}")]
    Catalog {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// JSON payload could not be decoded
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Report or enriched data could not be written
    #[error("Report writing error for '{path}': {message}")]
    ReportWriting { path: String, message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an encoding error listing the encodings that were tried
    pub fn encoding(path: impl Into<String>, tried: impl Into<String>) -> Self {
        Self::Encoding {
            path: path.into(),
            tried: tried.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a catalog error, optionally wrapping the transport failure
    pub fn catalog(message: impl Into<String>, source: Option<reqwest::Error>) -> Self {
        Self::Catalog {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON decoding error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a report writing error
    pub fn report_writing(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ReportWriting {
            path: path.into(),
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Catalog {
            message: "Catalog request failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON decoding failed".to_string(),
            source: error,
        }
    }
}
