//! CLI configuration.

use anyhow::{Context, Result};
use billboard_kv::DEFAULT_NAMESPACE;
use serde::{Deserialize, Serialize};

/// File names searched for, nearest directory first.
pub const CONFIG_NAMES: [&str; 3] = ["billboard.toml", ".billboard.toml", "billboard.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Durable store settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Catalog source settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Rendering settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Where cart state lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON state file, relative to the working directory.
    #[serde(default = "default_store_path")]
    pub path: String,

    /// Prefix applied to every stored key.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

fn default_store_path() -> String {
    ".billboard/state.json".to_string()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            namespace: default_namespace(),
        }
    }
}

/// Where the menu comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file. The built-in coffee menu is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Artificial loading delay before the catalog is available.
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,
}

fn default_load_delay_ms() -> u64 {
    100
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            load_delay_ms: default_load_delay_ms(),
        }
    }
}

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Appended to every price.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "€".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Generate a default billboard.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Coffee Billboard configuration

[store]
path = "{path}"
namespace = "{namespace}"

[catalog]
# path = "menu.json"
load_delay_ms = {delay}

[display]
currency_symbol = "{symbol}"
"#,
        path = default_store_path(),
        namespace = DEFAULT_NAMESPACE,
        delay = default_load_delay_ms(),
        symbol = default_currency_symbol(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: CliConfig = toml::from_str("[display]\ncurrency_symbol = \"$\"\n").unwrap();
        assert_eq!(config.display.currency_symbol, "$");
        assert_eq!(config.store.namespace, "coffeeBillboard_");
        assert_eq!(config.catalog.load_delay_ms, 100);
        assert_eq!(config.catalog.path, None);
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("billboard.json");
        let path = path.to_str().unwrap();

        let mut config = CliConfig::default();
        config.catalog.path = Some("menu.json".to_string());
        config.save(path).unwrap();

        assert_eq!(CliConfig::load(path).unwrap(), config);
    }
}
