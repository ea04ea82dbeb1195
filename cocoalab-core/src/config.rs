//! Pipeline configuration.
//!
//! Paths default to the conventional repository layout and may be
//! externalized through a TOML file or CLI overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Input and output locations for one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Daily price/weather table.
    pub daily_path: PathBuf,
    /// Monthly search-trend table.
    pub trend_path: PathBuf,
    /// Destination for the monthly aggregate table.
    pub output_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            daily_path: PathBuf::from("data/cocoa.csv"),
            trend_path: PathBuf::from("data/multiTimeline.csv"),
            output_path: PathBuf::from("monthly_data.csv"),
        }
    }
}

impl PipelineConfig {
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }
}
