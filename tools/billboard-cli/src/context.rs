//! CLI execution context.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use billboard_commerce::catalog::CatalogProvider;
use billboard_commerce::cart::{CartEvent, CartStateManager};
use billboard_kv::{FileStore, StoreKeys};

use crate::catalog::ConfiguredCatalog;
use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Path the config was loaded from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Path of the durable state file.
    pub fn store_path(&self) -> PathBuf {
        self.resolve_path(&self.config.store.path)
    }

    /// The configured catalog provider.
    pub fn catalog_provider(&self) -> ConfiguredCatalog {
        ConfiguredCatalog::new(
            self.config.catalog.path.as_deref().map(|p| self.resolve_path(p)),
            Duration::from_millis(self.config.catalog.load_delay_ms),
        )
    }

    /// Load the page: open the store, fetch the catalog and restore the cart.
    pub async fn open_manager(&self) -> Result<CartStateManager<FileStore>> {
        let store_path = self.store_path();
        let store = FileStore::open_or_reset(&store_path)
            .with_context(|| format!("Failed to open state file: {}", store_path.display()))?;

        let keys = StoreKeys::new(self.config.store.namespace.clone());
        let mut manager = CartStateManager::with_keys(store, keys);

        let output = self.output.clone();
        manager.subscribe(move |event| match event {
            CartEvent::PersistenceFailed { key, reason } => {
                output.warn(&format!("Could not save {}: {}", key, reason));
            }
            CartEvent::Restored(r) if r.cart_restored => {
                output.debug(&format!("Restored {} cart entries", r.entries));
            }
            _ => {}
        });

        let spinner = self.output.spinner("Loading menu...");
        let catalog = self.catalog_provider().get_catalog().await;
        spinner.finish_and_clear();
        let catalog = catalog.context("Failed to load catalog")?;

        manager.initialize(catalog)?;
        Ok(manager)
    }
}
