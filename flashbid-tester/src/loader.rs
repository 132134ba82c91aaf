use std::fs;
use std::path::{Path, PathBuf};

use flashbid_core::{Catalog, CatalogError, CatalogLoader};
use serde::de::DeserializeOwned;

pub const LISTINGS_FILE: &str = "listings.json";

/// Reads `listings.json` and `<config>.json` from a data directory.
pub struct FileCatalogLoader {
    root: PathBuf,
}

impl FileCatalogLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The web crate's static data directory.
    pub fn default_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("flashbid-web")
            .join("static")
            .join("data")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, file_name: &str) -> Result<String, CatalogError> {
        let path = self.root.join(file_name);
        if !path.is_file() {
            return Err(CatalogError::Missing(path.display().to_string()));
        }
        Ok(fs::read_to_string(path)?)
    }
}

impl CatalogLoader for FileCatalogLoader {
    type Error = CatalogError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        let json = self.read(LISTINGS_FILE)?;
        Catalog::from_json(&json)
    }

    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: DeserializeOwned,
    {
        let json = self.read(&format!("{config_name}.json"))?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashbid_core::PageConfig;

    #[test]
    fn default_root_holds_shipped_data() {
        let loader = FileCatalogLoader::new(FileCatalogLoader::default_root());
        let catalog = loader.load_catalog().expect("shipped listings load");
        assert!(!catalog.is_empty());
        let config: PageConfig = loader.load_config("page").expect("page config loads");
        assert_eq!(config.tick_ms, 1_000);
    }

    #[test]
    fn missing_files_report_their_path() {
        let loader = FileCatalogLoader::new(std::env::temp_dir().join("flashbid-no-such-dir"));
        let err = loader.load_catalog().expect_err("missing dir fails");
        assert!(matches!(err, CatalogError::Missing(ref path) if path.ends_with(LISTINGS_FILE)));
    }
}
