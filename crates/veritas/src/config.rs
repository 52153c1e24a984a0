// File: src/config.rs
// Purpose: Validator configuration parsing from veritas.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "veritas.toml";

/// Validator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub email: EmailConfig,

    #[serde(default)]
    pub url: UrlConfig,
}

/// Email validation options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Lowercase addresses before matching (default: true)
    #[serde(default = "default_true")]
    pub lowercase: bool,
}

/// URL validation options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlConfig {
    /// Send a HEAD request after the format check (default: false)
    #[serde(default = "default_false")]
    pub check_reachability: bool,

    /// Probe timeout in seconds (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl UrlConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// Default values
fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            lowercase: default_true(),
        }
    }
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            check_reachability: default_false(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./veritas.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ValidatorConfig = toml::from_str(content).context("Invalid veritas configuration")?;
        Ok(config)
    }
}
