//! Line oriented statistics log
//!
//! Every fact becomes one line handed to a [`LogSink`] as soon as it is
//! known. Line wording is fixed since downstream tools scrape it.

use crate::core::{
    BoundingBox, CacheSet, Camera, Category, CategoryFilter, GeometrySummary, GeometryVariant,
    ManifoldSummary,
};
use crate::report::StatisticRenderer;
use crate::utils::{format_coords, ElapsedTime};
use crate::Result;
use colored::*;
use parking_lot::Mutex;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// Destination for log lines
pub trait LogSink {
    fn emit(&self, severity: Severity, line: &str);
}

/// Info lines to stdout, warnings to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn emit(&self, severity: Severity, line: &str) {
        match severity {
            Severity::Info => println!("{}", line),
            Severity::Warning => eprintln!("{} {}", "WARNING:".yellow().bold(), line.yellow()),
        }
    }
}

/// Forwards lines as tracing events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, severity: Severity, line: &str) {
        match severity {
            Severity::Info => tracing::info!(target: "renderstat::report", "{}", line),
            Severity::Warning => tracing::warn!(target: "renderstat::report", "{}", line),
        }
    }
}

/// Keeps every line in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Severity, String)> {
        self.lines.lock().clone()
    }

    /// Just the text, in emission order
    pub fn text(&self) -> Vec<String> {
        self.lines.lock().iter().map(|(_, line)| line.clone()).collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .filter(|(severity, _)| *severity == Severity::Warning)
            .map(|(_, line)| line.clone())
            .collect()
    }
}

impl LogSink for MemorySink {
    fn emit(&self, severity: Severity, line: &str) {
        self.lines.lock().push((severity, line.to_string()));
    }
}

pub struct LogRenderer<'a> {
    filter: CategoryFilter,
    sink: &'a dyn LogSink,
}

impl<'a> LogRenderer<'a> {
    pub fn new(filter: CategoryFilter, sink: &'a dyn LogSink) -> Self {
        Self { filter, sink }
    }

    fn info(&self, line: impl AsRef<str>) {
        self.sink.emit(Severity::Info, line.as_ref());
    }

    fn warning(&self, line: impl AsRef<str>) {
        self.sink.emit(Severity::Warning, line.as_ref());
    }

    fn print_bounding_box<const N: usize>(&self, bb: &BoundingBox<N>) {
        if self.filter.enables(Category::BoundingBox) {
            self.info("Bounding box:");
            self.info(format!("   Min:  {}", format_coords(&bb.min)));
            self.info(format!("   Max:  {}", format_coords(&bb.max)));
            self.info(format!("   Size: {}", format_coords(&bb.size())));
        }
    }

    fn print_manifold(&self, nef: &ManifoldSummary) {
        self.info("Top level object is a 3D object:");
        self.info(format!("   Simple:     {:>6}", if nef.simple { "yes" } else { "no" }));
        self.info(format!("   Vertices:   {:6}", nef.vertices));
        self.info(format!("   Halfedges:  {:6}", nef.halfedges));
        self.info(format!("   Edges:      {:6}", nef.edges));
        self.info(format!("   Halffacets: {:6}", nef.halffacets));
        self.info(format!("   Facets:     {:6}", nef.facets));
        self.info(format!("   Volumes:    {:6}", nef.volumes));
        if !nef.simple {
            self.warning("Object may not be a valid 2-manifold and may need repair!");
        }
        self.print_bounding_box(&nef.bounding_box);
    }

    /// Entry count and byte usage per cache, whatever the filter says
    pub fn cache_statistic(&self, caches: &CacheSet<'_>) {
        for snapshot in caches.snapshots() {
            self.info(format!("{} in cache: {}", snapshot.item_label, snapshot.entry_count));
            self.info(format!(
                "{} cache size in bytes: {}",
                snapshot.title, snapshot.bytes_used
            ));
        }
    }

    /// Elapsed time line, whatever the filter says
    pub fn rendering_time(&self, elapsed: Duration) {
        self.info(format!("Total rendering time: {}", ElapsedTime::from(elapsed)));
    }

    pub fn geometry(&self, geometry: &GeometryVariant) {
        let Some(summary) = GeometrySummary::of(geometry) else {
            return;
        };
        match summary {
            GeometrySummary::List { objects } => {
                self.info("Top level object is a list of objects:");
                self.info(format!("   Objects:    {}", objects));
            }
            GeometrySummary::Polygon(poly) => {
                self.info("Top level object is a 2D object:");
                self.info(format!("   Contours:   {:6}", poly.contours));
                self.print_bounding_box(&poly.bounding_box);
                if self.filter.enables(Category::Area) {
                    self.info("Measurements:");
                    self.info(format!("   Area: {:.2}", poly.area));
                }
            }
            GeometrySummary::Solid(solid) => {
                self.info("Top level object is a 3D object:");
                self.info(format!("   Facets:     {:6}", solid.facets));
                self.print_bounding_box(&solid.bounding_box);
            }
            GeometrySummary::Manifold(nef) => self.print_manifold(&nef),
        }
    }

    pub fn camera(&self, camera: &Camera) {
        if self.filter.enables(Category::Camera) {
            self.info("Camera:");
            self.info(format!("   Translation: {}", format_coords(&camera.translation)));
            self.info(format!("   Rotation:    {}", format_coords(&camera.rotation)));
            self.info(format!("   Distance:    {:.2}", camera.distance));
            self.info(format!("   FOV:         {:.2}", camera.fov));
        }
    }
}

// Sink output cannot fail, so every section succeeds
impl StatisticRenderer for LogRenderer<'_> {
    fn print_cache_statistic(&mut self, caches: &CacheSet<'_>) -> Result<()> {
        self.cache_statistic(caches);
        Ok(())
    }

    fn print_rendering_time(&mut self, elapsed: Duration) -> Result<()> {
        self.rendering_time(elapsed);
        Ok(())
    }

    fn print_geometry(&mut self, geometry: &GeometryVariant) -> Result<()> {
        self.geometry(geometry);
        Ok(())
    }

    fn print_camera(&mut self, camera: &Camera) -> Result<()> {
        self.camera(camera);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
