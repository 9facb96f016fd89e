//! Structured statistics document
//!
//! Sections are collected into one JSON object keyed by category and written
//! to the destination in a single write on [`StatisticRenderer::finish`].
//! Every section, including cache and time, is gated by the category filter.

use crate::core::{
    BoundingBox, CacheSet, Camera, Category, CategoryFilter, GeometrySummary, GeometryVariant,
};
use crate::report::StatisticRenderer;
use crate::utils::ElapsedTime;
use crate::{RenderStatError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Serialize)]
struct CacheJson {
    entries: usize,
    bytes: u64,
    max_size: u64,
}

#[derive(Serialize)]
struct TimeJson {
    time: String,
    total: u64,
    milliseconds: u64,
    seconds: u64,
    minutes: u64,
    hours: u64,
}

#[derive(Serialize)]
struct BoundingBoxJson {
    min: Vec<f64>,
    max: Vec<f64>,
    size: Vec<f64>,
}

impl<const N: usize> From<&BoundingBox<N>> for BoundingBoxJson {
    fn from(bb: &BoundingBox<N>) -> Self {
        Self {
            min: bb.min.to_vec(),
            max: bb.max.to_vec(),
            size: bb.size().to_vec(),
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum GeometryJson {
    Polygon {
        dimensions: u8,
        convex: bool,
        contours: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        bounding_box: Option<BoundingBoxJson>,
    },
    Solid {
        dimensions: u8,
        convex: bool,
        facets: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        bounding_box: Option<BoundingBoxJson>,
    },
    Manifold {
        dimensions: u8,
        simple: bool,
        vertices: usize,
        edges: usize,
        facets: usize,
        volumes: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        bounding_box: Option<BoundingBoxJson>,
    },
}

#[derive(Serialize)]
struct CameraJson {
    translation: [f64; 3],
    rotation: [f64; 3],
    distance: f64,
    fov: f64,
}

pub struct JsonRenderer<W: Write> {
    filter: CategoryFilter,
    document: Option<Map<String, Value>>,
    writer: W,
    target: PathBuf,
}

impl<W: Write> JsonRenderer<W> {
    /// Render into an arbitrary writer; `target` names it in errors
    pub fn new(filter: CategoryFilter, writer: W, target: impl Into<PathBuf>) -> Self {
        Self {
            filter,
            document: Some(Map::new()),
            writer,
            target: target.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn enabled(&self, category: Category) -> bool {
        self.filter.enables(category)
    }

    fn insert<T: Serialize>(&mut self, category: Category, section: &T) -> Result<()> {
        let value = serde_json::to_value(section)?;
        match self.document.as_mut() {
            Some(document) => {
                document.insert(category.name().to_string(), value);
            }
            None => tracing::debug!(%category, "report already written, dropping section"),
        }
        Ok(())
    }

    fn unavailable(&self, source: io::Error) -> RenderStatError {
        RenderStatError::DestinationUnavailable {
            path: self.target.clone(),
            source,
        }
    }
}

impl JsonRenderer<Stdout> {
    pub fn stdout(filter: CategoryFilter) -> Self {
        Self::new(filter, io::stdout(), "-")
    }
}

impl JsonRenderer<File> {
    /// Open `path` for writing, truncating any previous report
    pub fn create(filter: CategoryFilter, path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|source| RenderStatError::DestinationUnavailable {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(filter, file, path))
    }
}

impl<W: Write> StatisticRenderer for JsonRenderer<W> {
    fn print_cache_statistic(&mut self, caches: &CacheSet<'_>) -> Result<()> {
        if !self.enabled(Category::Cache) {
            return Ok(());
        }
        let mut section = Map::new();
        for snapshot in caches.snapshots() {
            let cache = CacheJson {
                entries: snapshot.entry_count,
                bytes: snapshot.bytes_used,
                max_size: snapshot.byte_capacity,
            };
            section.insert(snapshot.name, serde_json::to_value(&cache)?);
        }
        self.insert(Category::Cache, &section)
    }

    fn print_rendering_time(&mut self, elapsed: Duration) -> Result<()> {
        if !self.enabled(Category::Time) {
            return Ok(());
        }
        let t = ElapsedTime::from(elapsed);
        let section = TimeJson {
            time: t.to_string(),
            total: t.total,
            milliseconds: t.milliseconds,
            seconds: t.seconds,
            minutes: t.minutes,
            hours: t.hours,
        };
        self.insert(Category::Time, &section)
    }

    fn print_geometry(&mut self, geometry: &GeometryVariant) -> Result<()> {
        if !self.enabled(Category::Geometry) {
            return Ok(());
        }
        let with_bb = self.enabled(Category::BoundingBox);
        let section = match GeometrySummary::of(geometry) {
            // Lists have no structured form
            None | Some(GeometrySummary::List { .. }) => return Ok(()),
            Some(GeometrySummary::Polygon(poly)) => GeometryJson::Polygon {
                dimensions: 2,
                convex: poly.convex,
                contours: poly.contours,
                bounding_box: with_bb.then(|| BoundingBoxJson::from(&poly.bounding_box)),
            },
            Some(GeometrySummary::Solid(solid)) => GeometryJson::Solid {
                dimensions: 3,
                convex: solid.convex,
                facets: solid.facets,
                bounding_box: with_bb.then(|| BoundingBoxJson::from(&solid.bounding_box)),
            },
            Some(GeometrySummary::Manifold(nef)) => {
                if !nef.simple {
                    tracing::warn!("object may not be a valid 2-manifold and may need repair");
                }
                GeometryJson::Manifold {
                    dimensions: 3,
                    simple: nef.simple,
                    vertices: nef.vertices,
                    edges: nef.edges,
                    facets: nef.facets,
                    volumes: nef.volumes,
                    bounding_box: with_bb.then(|| BoundingBoxJson::from(&nef.bounding_box)),
                }
            }
        };
        self.insert(Category::Geometry, &section)
    }

    fn print_camera(&mut self, camera: &Camera) -> Result<()> {
        if !self.enabled(Category::Camera) {
            return Ok(());
        }
        let section = CameraJson {
            translation: camera.translation,
            rotation: camera.rotation,
            distance: camera.distance,
            fov: camera.fov,
        };
        self.insert(Category::Camera, &section)
    }

    fn finish(&mut self) -> Result<()> {
        let Some(document) = self.document.take() else {
            return Ok(());
        };
        let bytes = serde_json::to_vec(&Value::Object(document))?;
        tracing::debug!(path = %self.target.display(), bytes = bytes.len(), "writing statistics report");
        self.writer
            .write_all(&bytes)
            .and_then(|_| self.writer.flush())
            .map_err(|e| self.unavailable(e))
    }
}
