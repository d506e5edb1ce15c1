//! Configuration management with layered hierarchy

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::PriceColumn;
use crate::core::Project;
use crate::pricing::PricingContext;

/// VQT configuration with layered hierarchy: built-in defaults, then the
/// global user config, then the project config, then environment variables,
/// each layer overriding the previous one.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sell price column for this session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_list: Option<PriceColumn>,

    /// Catalog CSV path, relative to the project root unless absolute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,

    /// Recipient address for order export
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    /// Project name rendered into the order email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    /// City/state rendered into the order email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Contact phone rendered into the order email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// All configuration keys accepted by `vqt config set`.
pub const CONFIG_KEYS: [&str; 6] = [
    "price_list",
    "catalog",
    "recipient",
    "project_name",
    "city",
    "phone",
];

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/vqt/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            config.merge(Self::load_file(&global_path));
        }

        // 3. Project config (.vqt/config.yaml)
        if let Ok(project) = Project::discover() {
            config.merge(Self::load_file(&project.config_path()));
        }

        // 4. Environment variables
        if let Ok(price_list) = std::env::var("VQT_PRICE_LIST") {
            if let Ok(column) = price_list.parse() {
                config.price_list = Some(column);
            }
        }
        if let Ok(catalog) = std::env::var("VQT_CATALOG") {
            config.catalog = Some(catalog);
        }
        if let Ok(recipient) = std::env::var("VQT_RECIPIENT") {
            config.recipient = Some(recipient);
        }

        config
    }

    /// Load a single config file; missing or invalid files yield defaults.
    pub fn load_file(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|contents| serde_yml::from_str(&contents).ok())
            .unwrap_or_default()
    }

    /// Write this config as one layer's file.
    pub fn save_file(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
        let yaml = serde_yml::to_string(self)?;
        std::fs::write(path, yaml).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "vqt")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.price_list.is_some() {
            self.price_list = other.price_list;
        }
        if other.catalog.is_some() {
            self.catalog = other.catalog;
        }
        if other.recipient.is_some() {
            self.recipient = other.recipient;
        }
        if other.project_name.is_some() {
            self.project_name = other.project_name;
        }
        if other.city.is_some() {
            self.city = other.city;
        }
        if other.phone.is_some() {
            self.phone = other.phone;
        }
    }

    /// The selected sell column, defaulting to the list price.
    pub fn price_list(&self) -> PriceColumn {
        self.price_list.unwrap_or_default()
    }

    /// The pricing context for this session.
    pub fn pricing_context(&self) -> PricingContext {
        PricingContext::new(self.price_list())
    }

    /// Resolve the catalog path against the project root.
    pub fn catalog_path(&self, project: &Project) -> PathBuf {
        let raw = PathBuf::from(self.catalog.as_deref().unwrap_or("productos.csv"));
        if raw.is_absolute() {
            raw
        } else {
            project.root().join(raw)
        }
    }

    pub fn recipient(&self) -> &str {
        self.recipient.as_deref().unwrap_or("ventas@csventilacion.mx")
    }

    pub fn project_name(&self) -> &str {
        self.project_name.as_deref().unwrap_or("")
    }

    pub fn city(&self) -> &str {
        self.city.as_deref().unwrap_or("")
    }

    pub fn phone(&self) -> &str {
        self.phone.as_deref().unwrap_or("")
    }

    /// Get a key's value for `vqt config show`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "price_list" => self.price_list.map(|c| c.to_string()),
            "catalog" => self.catalog.clone(),
            "recipient" => self.recipient.clone(),
            "project_name" => self.project_name.clone(),
            "city" => self.city.clone(),
            "phone" => self.phone.clone(),
            _ => None,
        }
    }

    /// Set a key from its string value, validating where the key is typed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "price_list" => {
                self.price_list = Some(value.parse()?);
            }
            "catalog" => self.catalog = Some(value.to_string()),
            "recipient" => self.recipient = Some(value.to_string()),
            "project_name" => self.project_name = Some(value.to_string()),
            "city" => self.city = Some(value.to_string()),
            "phone" => self.phone = Some(value.to_string()),
            _ => {
                return Err(format!(
                    "Unknown config key: {}. Valid keys: {}",
                    key,
                    CONFIG_KEYS.join(", ")
                ))
            }
        }
        Ok(())
    }

    /// Remove a key's value.
    pub fn unset(&mut self, key: &str) -> Result<(), String> {
        match key {
            "price_list" => self.price_list = None,
            "catalog" => self.catalog = None,
            "recipient" => self.recipient = None,
            "project_name" => self.project_name = None,
            "city" => self.city = None,
            "phone" => self.phone = None,
            _ => {
                return Err(format!(
                    "Unknown config key: {}. Valid keys: {}",
                    key,
                    CONFIG_KEYS.join(", ")
                ))
            }
        }
        Ok(())
    }
}

/// Errors from reading or writing a config layer
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot write config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize config: {0}")]
    Yaml(#[from] serde_yml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.price_list(), PriceColumn::Lista);
        assert_eq!(config.recipient(), "ventas@csventilacion.mx");
        assert_eq!(config.project_name(), "");
    }

    #[test]
    fn test_merge_precedence() {
        let mut base = Config {
            price_list: Some(PriceColumn::Lista),
            catalog: Some("base.csv".to_string()),
            ..Config::default()
        };
        let overlay = Config {
            price_list: Some(PriceColumn::Contratista),
            ..Config::default()
        };

        base.merge(overlay);

        assert_eq!(base.price_list(), PriceColumn::Contratista);
        // Keys absent in the overlay keep the base value
        assert_eq!(base.catalog.as_deref(), Some("base.csv"));
    }

    #[test]
    fn test_set_validates_price_list() {
        let mut config = Config::default();
        assert!(config.set("price_list", "contratista").is_ok());
        assert_eq!(config.price_list(), PriceColumn::Contratista);
        assert!(config.set("price_list", "wholesale").is_err());
        assert!(config.set("nonsense", "x").is_err());
    }

    #[test]
    fn test_catalog_path_resolution() {
        let tmp = tempdir().unwrap();
        let project = Project::init(tmp.path()).unwrap();

        let config = Config::default();
        assert_eq!(
            config.catalog_path(&project),
            project.root().join("productos.csv")
        );

        let config = Config {
            catalog: Some("data/precios.csv".to_string()),
            ..Config::default()
        };
        assert_eq!(
            config.catalog_path(&project),
            project.root().join("data/precios.csv")
        );
    }

    #[test]
    fn test_file_roundtrip() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.yaml");

        let mut config = Config::default();
        config.set("price_list", "fabrica").unwrap();
        config.set("city", "Puebla").unwrap();
        config.save_file(&path).unwrap();

        let loaded = Config::load_file(&path);
        assert_eq!(loaded.price_list(), PriceColumn::Fabrica);
        assert_eq!(loaded.city(), "Puebla");
        assert_eq!(loaded.recipient, None);
    }

    #[test]
    fn test_load_file_tolerates_missing() {
        let loaded = Config::load_file(Path::new("/nonexistent/config.yaml"));
        assert_eq!(loaded.price_list, None);
    }
}
