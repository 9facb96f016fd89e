//! Report orchestration: renderer selection and the fixed section sequence

use crate::core::{CacheSet, Camera, CategoryFilter, GeometryVariant, ReportClock};
use crate::report::{Destination, JsonRenderer, LogRenderer, LogSink, StatisticRenderer};
use crate::Result;
use std::time::Duration;

/// Produces render statistics for one computation.
///
/// Owns the start instant; caches and the log sink are borrowed from the
/// caller for the lifetime of the reporter.
pub struct RenderStatistic<'a> {
    clock: ReportClock,
    caches: CacheSet<'a>,
    sink: &'a dyn LogSink,
}

impl<'a> RenderStatistic<'a> {
    pub fn new(caches: CacheSet<'a>, sink: &'a dyn LogSink) -> Self {
        Self {
            clock: ReportClock::new(),
            caches,
            sink,
        }
    }

    /// Restart the rendering timer
    pub fn start(&mut self) {
        self.clock.start();
    }

    /// Time since construction or the last `start`
    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    /// Log cache occupancy on its own, e.g. for progress reporting
    pub fn print_cache_statistic(&self) {
        LogRenderer::new(CategoryFilter::none(), self.sink).cache_statistic(&self.caches);
    }

    /// Log the elapsed time on its own
    pub fn print_rendering_time(&self) {
        LogRenderer::new(CategoryFilter::none(), self.sink).rendering_time(self.elapsed());
    }

    /// Report everything to `destination`: unset or empty logs, `-` writes a
    /// JSON document to stdout, anything else writes it to that file.
    pub fn print_all<S: AsRef<str>>(
        &self,
        geometry: Option<&GeometryVariant>,
        camera: &Camera,
        categories: &[S],
        destination: Option<&str>,
    ) -> Result<()> {
        let filter = CategoryFilter::new(categories.iter().map(|c| c.as_ref().to_string()));
        let mut renderer: Box<dyn StatisticRenderer + '_> = match Destination::parse(destination) {
            Destination::Log => Box::new(LogRenderer::new(filter, self.sink)),
            Destination::Stdout => Box::new(JsonRenderer::stdout(filter)),
            Destination::File(path) => Box::new(JsonRenderer::create(filter, &path)?),
        };
        self.report(renderer.as_mut(), geometry, camera)
    }

    /// Drive `renderer` through cache, time, geometry, camera, finish.
    ///
    /// Geometry is skipped entirely when absent or empty.
    pub fn report(
        &self,
        renderer: &mut dyn StatisticRenderer,
        geometry: Option<&GeometryVariant>,
        camera: &Camera,
    ) -> Result<()> {
        renderer.print_cache_statistic(&self.caches)?;
        renderer.print_rendering_time(self.elapsed())?;
        match geometry {
            Some(geometry) if !geometry.is_empty() => renderer.print_geometry(geometry)?,
            _ => tracing::debug!("no geometry to summarise"),
        }
        renderer.print_camera(camera)?;
        renderer.finish()
    }
}
