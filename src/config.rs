//! Configuration for render statistics

use crate::{RenderStatError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ReportConfig {
    #[serde(default)]
    pub summary: SummaryConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SummaryConfig {
    /// Categories reported when none are given on the command line
    #[serde(default)]
    pub categories: Vec<String>,
    /// Report destination: unset logs, `-` is stdout, otherwise a file
    #[serde(default)]
    pub destination: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheConfig {
    #[serde(default = "default_geometry_cache_mb")]
    pub geometry_cache_mb: u64,
    #[serde(default = "default_nef_cache_mb")]
    pub nef_cache_mb: u64,
}

fn default_geometry_cache_mb() -> u64 { 100 }
fn default_nef_cache_mb() -> u64 { 100 }

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            geometry_cache_mb: default_geometry_cache_mb(),
            nef_cache_mb: default_nef_cache_mb(),
        }
    }
}

/// Load configuration, falling back to defaults when `path` does not exist
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ReportConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ReportConfig::default());
    }
    let contents = std::fs::read_to_string(path)?;
    let config: ReportConfig = toml::from_str(&contents)
        .map_err(|e| RenderStatError::Configuration(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &ReportConfig) -> Result<()> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| RenderStatError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
