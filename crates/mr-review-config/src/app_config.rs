//! Application configuration
//!
//! Configuration loaded from .mr-review.toml file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration loaded from .mr-review.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Largest diff accepted, in bytes (0 disables the check)
    #[serde(default = "default_max_diff_bytes")]
    pub max_diff_bytes: usize,

    /// Indent JSON output
    #[serde(default)]
    pub pretty: bool,

    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_max_diff_bytes() -> usize {
    16 * 1024 * 1024
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_diff_bytes: default_max_diff_bytes(),
            pretty: false,
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::from_toml(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("{:#}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Load config from an explicit path; errors are returned, not defaulted
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = crate::read_config_file(path)?;
        Self::from_toml(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Size limit in bytes, `None` when disabled
    pub fn max_diff_bytes(&self) -> Option<usize> {
        (self.max_diff_bytes > 0).then_some(self.max_diff_bytes)
    }
}
