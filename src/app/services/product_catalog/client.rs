//! Catalog sources: HTTP listing, local JSON file, or none
//!
//! Every source answers [`CatalogSource::fetch_products`] with a plain list.
//! Failures never escape a source: they are logged with `warn!` and reduce
//! to an empty list, so the run continues with every lookup missing.

use crate::app::models::CatalogProduct;
use crate::config::CatalogConfig;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::payload::{CatalogDocument, CatalogPage};

/// Something that can produce the product list for one run
pub trait CatalogSource {
    /// Fetch every product this source knows about, or an empty list
    fn fetch_products(&self) -> impl std::future::Future<Output = Vec<CatalogProduct>> + Send;
}

/// Paginated HTTP client for the product listing endpoint
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: String,
    page_size: usize,
    max_pages: usize,
}

impl HttpCatalogClient {
    /// Create a client with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::catalog("Failed to build HTTP client", Some(e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            page_size: crate::constants::DEFAULT_CATALOG_PAGE_SIZE,
            max_pages: crate::constants::DEFAULT_CATALOG_MAX_PAGES,
        })
    }

    /// Set the number of products requested per page
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Set the maximum number of pages fetched per run
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the page starting at `skip`
    pub fn page_url(&self, skip: usize) -> String {
        format!("{}?limit={}&skip={}", self.base_url, self.page_size, skip)
    }

    /// Fetch a single page
    pub async fn fetch_page(&self, skip: usize) -> Result<CatalogPage> {
        let url = self.page_url(skip);
        debug!("Requesting catalog page {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::catalog(format!("Request to {} failed", url), Some(e)))?
            .error_for_status()
            .map_err(|e| Error::catalog(format!("{} returned an error status", url), Some(e)))?;

        response
            .json::<CatalogPage>()
            .await
            .map_err(|e| Error::catalog(format!("Malformed catalog payload from {}", url), Some(e)))
    }

    /// Fetch up to `max_pages` pages, surfacing the first failure
    ///
    /// Stops early when a page comes back short or when the reported total
    /// has been reached.
    pub async fn try_fetch(&self) -> Result<Vec<CatalogProduct>> {
        let start = Instant::now();
        let mut products = Vec::new();
        let mut skip = 0usize;

        for _ in 0..self.max_pages {
            let page = self.fetch_page(skip).await?;
            let received = page.products.len();
            products.extend(page.products);
            skip += received;

            if received < self.page_size {
                break;
            }
            if page.total.is_some_and(|total| skip >= total) {
                break;
            }
        }

        info!(
            "Fetched {} catalog products from {} in {:.2?}",
            products.len(),
            self.base_url,
            start.elapsed()
        );

        Ok(products)
    }
}

impl CatalogSource for HttpCatalogClient {
    async fn fetch_products(&self) -> Vec<CatalogProduct> {
        match self.try_fetch().await {
            Ok(products) => products,
            Err(e) => {
                warn!("Product catalog unavailable, continuing without enrichment: {}", e);
                Vec::new()
            }
        }
    }
}

/// Catalog read from a local JSON file
///
/// Accepts the same page envelope the HTTP endpoint returns, or a bare array
/// of products.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the file, surfacing the failure
    pub fn try_load(&self) -> Result<Vec<CatalogProduct>> {
        if !self.path.exists() {
            return Err(Error::file_not_found(self.path.display().to_string()));
        }

        let text = fs::read_to_string(&self.path).map_err(|e| {
            Error::io(
                format!("Failed to read catalog file {}", self.path.display()),
                e,
            )
        })?;

        let document: CatalogDocument = serde_json::from_str(&text).map_err(|e| {
            Error::json(
                format!("Malformed catalog file {}", self.path.display()),
                e,
            )
        })?;

        let products = document.into_products();
        info!(
            "Loaded {} catalog products from {}",
            products.len(),
            self.path.display()
        );
        Ok(products)
    }
}

impl CatalogSource for FileCatalogSource {
    async fn fetch_products(&self) -> Vec<CatalogProduct> {
        match self.try_load() {
            Ok(products) => products,
            Err(e) => {
                warn!("Catalog file unusable, continuing without enrichment: {}", e);
                Vec::new()
            }
        }
    }
}

/// The catalog source selected for a run
#[derive(Debug, Clone)]
pub enum CatalogProvider {
    Http(HttpCatalogClient),
    File(FileCatalogSource),
    /// No catalog; every lookup misses
    Disabled,
}

impl CatalogProvider {
    /// Pick a source from configuration
    ///
    /// `offline` wins over everything, then a catalog file, then the URL.
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        if config.offline {
            return Ok(CatalogProvider::Disabled);
        }

        if let Some(file) = &config.file {
            return Ok(CatalogProvider::File(FileCatalogSource::new(file.clone())));
        }

        let client = HttpCatalogClient::new(
            config.url.clone(),
            Duration::from_secs(config.timeout_secs),
        )?
        .with_page_size(config.page_size)
        .with_max_pages(config.max_pages);

        Ok(CatalogProvider::Http(client))
    }

    /// Short label for logs and stage output
    pub fn describe(&self) -> String {
        match self {
            CatalogProvider::Http(client) => client.base_url().to_string(),
            CatalogProvider::File(source) => source.path().display().to_string(),
            CatalogProvider::Disabled => "disabled".to_string(),
        }
    }
}

impl CatalogSource for CatalogProvider {
    async fn fetch_products(&self) -> Vec<CatalogProduct> {
        match self {
            CatalogProvider::Http(client) => client.fetch_products().await,
            CatalogProvider::File(source) => source.fetch_products().await,
            CatalogProvider::Disabled => {
                info!("Product catalog disabled, skipping fetch");
                Vec::new()
            }
        }
    }
}
