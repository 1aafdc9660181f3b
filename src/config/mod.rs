//! # Configuration Management Module
//!
//! TOML-backed configuration for the Malango CLI and any embedding host.
//! Values are organized into sections, validated on load, and a starter file
//! can be written with [`Config::create_default`].
//!
//! ```toml
//! [app]
//! name = "Malango"
//! default_variant = "shimaore"
//!
//! [storage]
//! data_dir = "data/atlas"
//!
//! [world]
//! # seed_file = "data/world.json"   # omit to use the built-in Mayotte map
//!
//! [logging]
//! level = "info"
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tokio::fs;

use crate::lexicon::LanguageVariant;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub world: WorldConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub name: String,
    /// Variant used when a command does not pass `--variant`.
    pub default_variant: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the sled progress store.
    pub data_dir: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Optional JSON world seed. When unset the built-in map is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of: error, warn, info, debug, trace.
    pub level: String,
}

impl Config {
    /// Load and validate a configuration file.
    pub async fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("cannot read config {}: {}", path, e))?;
        let config: Config =
            toml::from_str(&contents).map_err(|e| anyhow!("invalid config {}: {}", path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Write a starter configuration file with defaults.
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let contents = toml::to_string_pretty(&config)?;
        fs::write(path, contents)
            .await
            .map_err(|e| anyhow!("cannot write config {}: {}", path, e))?;
        Ok(())
    }

    /// The configured default language variant.
    pub fn default_variant(&self) -> Result<LanguageVariant> {
        LanguageVariant::from_str(&self.app.default_variant).map_err(|e| anyhow!(e))
    }

    fn validate(&self) -> Result<()> {
        if self.app.name.trim().is_empty() {
            return Err(anyhow!("app.name must not be empty"));
        }
        self.default_variant()?;
        if self.storage.data_dir.trim().is_empty() {
            return Err(anyhow!("storage.data_dir must not be empty"));
        }
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            other => Err(anyhow!("unknown logging.level: {}", other)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig {
                name: "Malango".to_string(),
                default_variant: "shimaore".to_string(),
            },
            storage: StorageConfig {
                data_dir: "data/atlas".to_string(),
            },
            world: WorldConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}
