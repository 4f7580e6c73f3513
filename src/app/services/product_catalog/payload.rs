//! JSON payloads accepted from catalog providers

use crate::app::models::CatalogProduct;
use serde::Deserialize;

/// One page of the catalog listing
///
/// Reads `products` and `total` from the `{"products", "total", "skip",
/// "limit"}` envelope. Pagination tracks its own offset, so the echoed
/// `skip` and `limit` are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub products: Vec<CatalogProduct>,

    #[serde(default)]
    pub total: Option<usize>,
}

/// Catalog file contents: a full page envelope or a bare product array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CatalogDocument {
    Page(CatalogPage),
    List(Vec<CatalogProduct>),
}

impl CatalogDocument {
    pub(crate) fn into_products(self) -> Vec<CatalogProduct> {
        match self {
            CatalogDocument::Page(page) => page.products,
            CatalogDocument::List(products) => products,
        }
    }
}
