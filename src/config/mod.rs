//! Printer configuration

use crate::error::{PrintError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration stored in ~/.kubeprint/config.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterConfig {
    /// Default tracing level when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether log lines include the event target
    #[serde(default)]
    pub log_target: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_target: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Get the kubeprint config directory (~/.kubeprint)
pub fn config_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|h| h.join(".kubeprint"))
        .ok_or_else(|| PrintError::Config("Could not determine home directory".to_string()))
}

/// Load config from ~/.kubeprint/config.toml, falling back to defaults
pub fn load_config() -> Result<PrinterConfig> {
    let path = config_dir()?.join("config.toml");
    if path.exists() {
        load_config_from(&path)
    } else {
        Ok(PrinterConfig::default())
    }
}

/// Load config from an explicit file
pub fn load_config_from(path: &Path) -> Result<PrinterConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}
