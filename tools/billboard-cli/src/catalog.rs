//! Catalog loading for the CLI.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use billboard_commerce::catalog::{coffee_menu, Catalog, CatalogProvider};
use billboard_commerce::CatalogError;

/// Reads the menu from a JSON file, or falls back to the built-in menu.
#[derive(Debug, Clone)]
pub struct ConfiguredCatalog {
    path: Option<PathBuf>,
    delay: Duration,
}

impl ConfiguredCatalog {
    pub fn new(path: Option<PathBuf>, delay: Duration) -> Self {
        Self { path, delay }
    }
}

#[async_trait]
impl CatalogProvider for ConfiguredCatalog {
    async fn get_catalog(&self) -> Result<Catalog, CatalogError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let Some(path) = &self.path else {
            return Ok(coffee_menu());
        };

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            CatalogError::Unavailable(format!("{}: {}", path.display(), e))
        })?;
        let catalog = Catalog::from_json(&content)?;
        tracing::debug!(path = %path.display(), items = catalog.len(), "loaded catalog file");
        Ok(catalog)
    }
}
