//! Render statistics reporting
//!
//! A [`StatisticRenderer`] is driven through a fixed sequence by
//! [`RenderStatistic`]: cache occupancy, elapsed time, geometry summary,
//! camera, finish. Two renderers exist:
//!
//! - [`LogRenderer`] emits human readable lines immediately through a
//!   [`LogSink`]
//! - [`JsonRenderer`] accumulates a document and writes it once on finish

pub mod json;
pub mod log;
pub mod statistic;

pub use json::JsonRenderer;
pub use log::{ConsoleSink, LogRenderer, LogSink, MemorySink, Severity, TracingSink};
pub use statistic::RenderStatistic;

use crate::core::{CacheSet, Camera, GeometryVariant};
use crate::Result;
use std::path::PathBuf;
use std::time::Duration;

/// Receives the sections of one statistics report
pub trait StatisticRenderer {
    fn print_cache_statistic(&mut self, caches: &CacheSet<'_>) -> Result<()>;

    fn print_rendering_time(&mut self, elapsed: Duration) -> Result<()>;

    fn print_geometry(&mut self, geometry: &GeometryVariant) -> Result<()>;

    fn print_camera(&mut self, camera: &Camera) -> Result<()>;

    /// Flush whatever the renderer accumulated
    fn finish(&mut self) -> Result<()>;
}

/// Where a report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Interactive line log
    Log,
    /// JSON document on standard output
    Stdout,
    /// JSON document written to a file
    File(PathBuf),
}

impl Destination {
    /// Unset or empty selects the log, `-` selects standard output,
    /// anything else names a file.
    pub fn parse(selector: Option<&str>) -> Self {
        match selector {
            None | Some("") => Destination::Log,
            Some("-") => Destination::Stdout,
            Some(path) => Destination::File(PathBuf::from(path)),
        }
    }
}
