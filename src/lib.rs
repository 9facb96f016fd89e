//! Render statistics for computed geometry
//!
//! Summarises a finished geometry result (shape metrics, cache occupancy,
//! elapsed time, camera framing) through one of two renderers: an
//! interactive line log or a structured JSON document.

pub mod cli;
pub mod config;
pub mod core;
pub mod report;
pub mod utils;

pub use crate::config::{load_config, save_config, ReportConfig};
pub use crate::core::{
    BoundingBox, CacheSet, CacheSnapshot, CacheStats, Camera, Category, CategoryFilter,
    GeometryVariant, MemoryCache, ReportClock,
};
pub use crate::report::{Destination, RenderStatistic, StatisticRenderer};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderStatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report destination unavailable: {path}: {source}")]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid scene: {0}")]
    Scene(String),
}

pub type Result<T> = std::result::Result<T, RenderStatError>;

impl From<serde_json::Error> for RenderStatError {
    fn from(err: serde_json::Error) -> Self {
        RenderStatError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for RenderStatError {
    fn from(err: toml::de::Error) -> Self {
        RenderStatError::Configuration(err.to_string())
    }
}

impl From<toml::ser::Error> for RenderStatError {
    fn from(err: toml::ser::Error) -> Self {
        RenderStatError::Configuration(err.to_string())
    }
}
