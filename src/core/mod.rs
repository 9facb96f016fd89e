//! Data model consumed by the reporting layer

pub mod cache;
pub mod camera;
pub mod category;
pub mod clock;
pub mod geometry;
pub mod summary;

pub use cache::{CacheLabels, CacheSet, CacheSnapshot, CacheStats, MemoryCache};
pub use camera::Camera;
pub use category::{Category, CategoryFilter};
pub use clock::ReportClock;
pub use geometry::{BoundingBox, BoundingBox2, BoundingBox3, GeometryVariant, NefSolid3D, Polygon2D, Solid3D};
pub use summary::{GeometrySummary, ManifoldSummary, PolygonSummary, SolidSummary};
