//! Configuration management and validation.
//!
//! Provides the configuration structures for input, catalog access, analysis
//! limits, output locations and logging, together with layered loading:
//! built-in defaults, then an optional JSON file, then environment variables.
//! Command-line flags are applied on top by the CLI.

use crate::app::services::sales_parser::TextEncoding;
use crate::constants::{self, env_vars};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where and how the sales log is read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path to the pipe-delimited sales log
    pub path: PathBuf,

    /// Encodings tried in order when decoding the file
    pub encodings: Vec<TextEncoding>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(constants::DEFAULT_SALES_FILE),
            encodings: TextEncoding::DEFAULT_ORDER.to_vec(),
        }
    }
}

/// Product catalog source selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Listing endpoint of the catalog service
    pub url: String,

    /// Read the catalog from this JSON file instead of the service
    pub file: Option<PathBuf>,

    /// Skip the catalog entirely
    pub offline: bool,

    /// Products requested per page
    pub page_size: usize,

    /// Maximum pages fetched per run
    pub max_pages: usize,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: constants::DEFAULT_CATALOG_URL.to_string(),
            file: None,
            offline: false,
            page_size: constants::DEFAULT_CATALOG_PAGE_SIZE,
            max_pages: constants::DEFAULT_CATALOG_MAX_PAGES,
            timeout_secs: constants::DEFAULT_CATALOG_TIMEOUT_SECS,
        }
    }
}

/// Ranking limits used by the analytics views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of products in the top-selling list
    pub top_products: usize,

    /// Number of customers shown in the report
    pub top_customers: usize,

    /// Products with a summed quantity strictly below this are low performers
    pub low_performer_threshold: i64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_products: constants::DEFAULT_TOP_PRODUCTS,
            top_customers: constants::DEFAULT_TOP_CUSTOMERS,
            low_performer_threshold: constants::DEFAULT_LOW_PERFORMER_THRESHOLD,
        }
    }
}

/// Output file locations and report formatting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Enriched 12-column data file
    pub enriched_path: PathBuf,

    /// Plain-text report
    pub report_path: PathBuf,

    /// Symbol prefixed to currency amounts in the report
    pub currency_symbol: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            enriched_path: PathBuf::from(constants::DEFAULT_ENRICHED_FILE),
            report_path: PathBuf::from(constants::DEFAULT_REPORT_FILE),
            currency_symbol: constants::DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

/// Logging defaults; `-v`/`-q` and `RUST_LOG` take precedence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base level for the crate's own targets
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Complete configuration for one run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub catalog: CatalogConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Set the sales log path
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input.path = path.into();
        self
    }

    /// Use the catalog service at `url`, dropping any configured catalog file
    pub fn with_catalog_url(mut self, url: impl Into<String>) -> Self {
        self.catalog.url = url.into();
        self.catalog.file = None;
        self
    }

    /// Read the catalog from a local JSON file
    pub fn with_catalog_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog.file = Some(path.into());
        self
    }

    /// Disable the catalog
    pub fn with_offline(mut self) -> Self {
        self.catalog.offline = true;
        self
    }

    /// Set the number of top-selling products
    pub fn with_top_products(mut self, n: usize) -> Self {
        self.analysis.top_products = n;
        self
    }

    /// Set the low performer threshold
    pub fn with_low_threshold(mut self, threshold: i64) -> Self {
        self.analysis.low_performer_threshold = threshold;
        self
    }

    /// Set the enriched data output path
    pub fn with_enriched_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output.enriched_path = path.into();
        self
    }

    /// Set the report output path
    pub fn with_report_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output.report_path = path.into();
        self
    }

    /// Place both output files in `dir`, keeping their file names
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        self.output.enriched_path = relocate(&self.output.enriched_path, dir);
        self.output.report_path = relocate(&self.output.report_path, dir);
        self
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.input.path.as_os_str().is_empty() {
            return Err(Error::configuration("input path must not be empty"));
        }
        if self.input.encodings.is_empty() {
            return Err(Error::configuration(
                "at least one input encoding must be configured",
            ));
        }

        let uses_service = !self.catalog.offline && self.catalog.file.is_none();
        if uses_service && self.catalog.url.trim().is_empty() {
            return Err(Error::configuration(
                "catalog url must not be empty unless offline or a catalog file is given",
            ));
        }
        if self.catalog.page_size == 0 {
            return Err(Error::configuration("catalog page_size must be at least 1"));
        }
        if self.catalog.max_pages == 0 {
            return Err(Error::configuration("catalog max_pages must be at least 1"));
        }
        if self.catalog.timeout_secs == 0 {
            return Err(Error::configuration(
                "catalog timeout_secs must be at least 1",
            ));
        }

        if self.output.enriched_path.as_os_str().is_empty()
            || self.output.report_path.as_os_str().is_empty()
        {
            return Err(Error::configuration("output paths must not be empty"));
        }

        Ok(())
    }

    /// Read a JSON configuration file; missing sections take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;

        serde_json::from_str(&text)
            .map_err(|e| Error::json(format!("Invalid config file {}", path.display()), e))
    }

    /// Defaults, then a config file, then environment variables
    ///
    /// An explicit path must exist. Without one, the per-user config file is
    /// used when present.
    pub fn load_layered(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::configuration(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                debug!("Loading configuration from {}", path.display());
                Self::from_file(path)?
            }
            None => match default_config_path() {
                Some(path) if path.exists() => {
                    debug!("Loading configuration from {}", path.display());
                    Self::from_file(&path)?
                }
                _ => Self::default(),
            },
        };

        config.apply_env_overrides_from(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Apply `SALES_ANALYTICS_*` overrides using the given lookup
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(input) = non_empty(env_vars::INPUT) {
            debug!("{} overrides input path", env_vars::INPUT);
            self.input.path = PathBuf::from(input);
        }
        if let Some(url) = non_empty(env_vars::CATALOG_URL) {
            debug!("{} overrides catalog url", env_vars::CATALOG_URL);
            self.catalog.url = url;
        }
        if let Some(dir) = non_empty(env_vars::OUTPUT_DIR) {
            debug!("{} overrides output directory", env_vars::OUTPUT_DIR);
            *self = std::mem::take(self).with_output_dir(dir);
        }
    }
}

/// Per-user config file location, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(constants::CONFIG_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME)
    })
}

fn relocate(path: &Path, dir: &Path) -> PathBuf {
    match path.file_name() {
        Some(name) => dir.join(name),
        None => dir.to_path_buf(),
    }
}
