//! # Configuration
//!
//! Settings for a run, read from an optional JSON file. Every field has a default, so a file
//! only needs the keys it changes:
//!
//! ```json
//! {
//!   "channel_capacity": 64,
//!   "log_file": "logs/padaria.jsonl",
//!   "demo": { "showcase_category": "Doces" }
//! }
//! ```

use crate::model::{CategoryCreate, ProductCreate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadariaConfig {
    /// Request buffer of each store's channel.
    pub channel_capacity: usize,
    /// When set, event-log records are also appended to this file.
    pub log_file: Option<PathBuf>,
    pub seed: SeedConfig,
    pub demo: DemoConfig,
}

/// The catalog created at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub categories: Vec<CategoryCreate>,
    pub products: Vec<ProductCreate>,
}

/// Parameters of the demonstration run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Category listed in the "products by category" step.
    pub showcase_category: String,
    /// Amount added to each product's price in the batch update step.
    pub price_increase: f64,
    /// Products priced at or above this are left out of the batch update.
    pub price_ceiling: f64,
}

impl Default for PadariaConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            log_file: None,
            seed: SeedConfig::default(),
            demo: DemoConfig::default(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            categories: vec![
                CategoryCreate::new("Pães", "Pães frescos e artesanais"),
                CategoryCreate::new("Doces", "Doces e sobremesas deliciosas"),
                CategoryCreate::new("Salgados", "Salgados assados e fritos"),
                CategoryCreate::new("Bebidas", "Bebidas quentes e frias"),
            ],
            products: vec![
                ProductCreate::new("Pão Francês", 0.5, "Pães", "Pão francês tradicional"),
                ProductCreate::new("Pão de Açúcar", 4.5, "Pães", "Pão doce com açúcar"),
                ProductCreate::new("Brigadeiro", 2.0, "Doces", "Brigadeiro tradicional"),
                ProductCreate::new("Coxinha", 3.5, "Salgados", "Coxinha de frango tradicional"),
                ProductCreate::new("Café Expresso", 2.5, "Bebidas", "Café expresso tradicional"),
            ],
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            showcase_category: "Móveis".to_string(),
            price_increase: 10.0,
            price_ceiling: 1000.0,
        }
    }
}

impl PadariaConfig {
    /// Load and validate the config file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: PadariaConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_capacity == 0 {
            return Err(ConfigError::Invalid(
                "channel_capacity must be greater than zero".to_string(),
            ));
        }
        if !self.demo.price_increase.is_finite() {
            return Err(ConfigError::Invalid(
                "demo.price_increase must be a finite number".to_string(),
            ));
        }
        Ok(())
    }
}
