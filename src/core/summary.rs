//! Shape metrics extracted from a geometry result
//!
//! One flat dispatch over [`GeometryVariant`]; renderers only ever see the
//! resulting [`GeometrySummary`].

use crate::core::geometry::{BoundingBox2, BoundingBox3, GeometryVariant};

#[derive(Debug, Clone, PartialEq)]
pub enum GeometrySummary {
    /// Composite result, children are counted but not summarised
    List { objects: usize },
    Polygon(PolygonSummary),
    Solid(SolidSummary),
    Manifold(ManifoldSummary),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolygonSummary {
    pub contours: usize,
    pub area: f64,
    pub convex: bool,
    pub bounding_box: BoundingBox2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolidSummary {
    pub facets: usize,
    pub convex: bool,
    pub bounding_box: BoundingBox3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ManifoldSummary {
    pub simple: bool,
    pub vertices: usize,
    pub halfedges: usize,
    pub edges: usize,
    pub halffacets: usize,
    pub facets: usize,
    pub volumes: usize,
    pub bounding_box: BoundingBox3,
}

impl GeometrySummary {
    /// Summarise a geometry result.
    ///
    /// Returns `None` for variants with nothing to report: the empty
    /// geometry and nef polyhedra that are not three dimensional.
    pub fn of(geometry: &GeometryVariant) -> Option<Self> {
        match geometry {
            GeometryVariant::Empty => None,
            GeometryVariant::List { children } => Some(GeometrySummary::List {
                objects: children.len(),
            }),
            GeometryVariant::Polygon2D(poly) => Some(GeometrySummary::Polygon(PolygonSummary {
                contours: poly.outlines,
                area: poly.area,
                convex: poly.convex,
                bounding_box: poly.bounding_box,
            })),
            GeometryVariant::Solid3D(solid) => Some(GeometrySummary::Solid(SolidSummary {
                facets: solid.facets,
                convex: solid.convex,
                bounding_box: solid.bounding_box,
            })),
            GeometryVariant::NefSolid3D(nef) if nef.dimension == 3 => {
                Some(GeometrySummary::Manifold(ManifoldSummary {
                    simple: nef.simple,
                    vertices: nef.vertices,
                    halfedges: nef.halfedges,
                    edges: nef.edges,
                    halffacets: nef.halffacets,
                    facets: nef.facets,
                    volumes: nef.volumes,
                    bounding_box: nef.bounding_box,
                }))
            }
            GeometryVariant::NefSolid3D(nef) => {
                tracing::debug!(dimension = nef.dimension, "skipping non-3D nef polyhedron");
                None
            }
        }
    }

    /// Spatial dimension of the summarised shape, `None` for lists
    pub fn dimensions(&self) -> Option<u8> {
        match self {
            GeometrySummary::List { .. } => None,
            GeometrySummary::Polygon(_) => Some(2),
            GeometrySummary::Solid(_) | GeometrySummary::Manifold(_) => Some(3),
        }
    }
}
