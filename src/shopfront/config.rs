//! # Configuration
//!
//! Stored as `config.json` in the data directory, next to the catalog.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `page-size` | `24` | Products per page in `browse`; `0` shows everything |

use crate::error::{Result, ShopError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PAGE_SIZE: usize = 24;

/// Keys accepted by [`ShopConfig::get`] and [`ShopConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["page-size"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShopConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ShopConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShopError::Io)?;
        let config: ShopConfig =
            serde_json::from_str(&content).map_err(ShopError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShopError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShopError::Serialization)?;
        fs::write(config_path, content).map_err(ShopError::Io)?;
        Ok(())
    }

    /// Display value of `key`, or `None` for an unknown key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "page-size" => Some(self.page_size.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "page-size" => {
                self.page_size = value
                    .parse()
                    .map_err(|_| format!("page-size must be a whole number, got '{}'", value))?;
                Ok(())
            }
            _ => Err(format!(
                "Unknown config key: {} (expected one of {})",
                key,
                CONFIG_KEYS.join(", ")
            )),
        }
    }
}
