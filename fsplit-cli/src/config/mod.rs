//! Configuration module

use crate::error::CliError;
use crate::output::ReportFormat;
use anyhow::Result;
use fsplit_core::config::defaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Transfer configuration
    #[serde(default)]
    pub transfer: TransferConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Transfer-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct TransferConfig {
    /// Bytes to read and write at a time; non-positive values are ignored
    pub block_size: i64,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            block_size: defaults::BLOCK_SIZE as i64,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default report format
    pub format: ReportFormat,

    /// Show a progress bar while chunks are written or merged
    pub progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            progress: true,
        }
    }
}

impl CliConfig {
    /// Read a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| {
            CliError::ConfigError(format!("failed to read {}: {err}", path.display()))
        })?;

        let config = toml::from_str(&content)
            .map_err(|err| CliError::ConfigError(format!("{}: {err}", path.display())))?;

        Ok(config)
    }

    /// Read `path` if given, otherwise use the built-in defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}
