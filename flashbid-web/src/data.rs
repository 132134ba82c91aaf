//! Listing data embedded at build time.
use flashbid_core::{Catalog, CatalogError, CatalogLoader, PageConfig, Storefront};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

const LISTINGS_JSON: &str = include_str!("../static/data/listings.json");
const PAGE_JSON: &str = include_str!("../static/data/page.json");

/// Loader that serves the static assets compiled into the bundle.
pub struct WebCatalogLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("Unknown config: {0}")]
    UnknownConfig(String),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl CatalogLoader for WebCatalogLoader {
    type Error = WebDataError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Ok(Catalog::from_json(LISTINGS_JSON)?)
    }

    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: DeserializeOwned,
    {
        let json = match config_name {
            flashbid_core::PAGE_CONFIG_NAME => PAGE_JSON,
            _ => return Err(WebDataError::UnknownConfig(config_name.to_string())),
        };
        serde_json::from_str(json).map_err(WebDataError::Json)
    }
}

static STOREFRONT: Lazy<Result<(Catalog, PageConfig), WebDataError>> =
    Lazy::new(|| Storefront::new(WebCatalogLoader).load());

/// The embedded listings and page config, parsed once per page load.
///
/// # Errors
///
/// Returns the load error if the embedded data failed to parse.
pub fn storefront() -> Result<&'static (Catalog, PageConfig), &'static WebDataError> {
    Lazy::force(&STOREFRONT).as_ref()
}
