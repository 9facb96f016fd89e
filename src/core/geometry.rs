//! Read-only views of computed geometry, as handed to the reporting layer

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in 2 or 3 dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox<const N: usize> {
    #[serde(with = "axes")]
    pub min: [f64; N],
    #[serde(with = "axes")]
    pub max: [f64; N],
}

pub type BoundingBox2 = BoundingBox<2>;
pub type BoundingBox3 = BoundingBox<3>;

impl<const N: usize> BoundingBox<N> {
    pub fn new(min: [f64; N], max: [f64; N]) -> Self {
        Self { min, max }
    }

    /// Component-wise `max - min`
    pub fn size(&self) -> [f64; N] {
        std::array::from_fn(|i| self.max[i] - self.min[i])
    }
}

/// Serde support for const-generic float arrays
mod axes {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer, const N: usize>(v: &[f64; N], s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(v.iter())
    }

    pub fn deserialize<'de, D: Deserializer<'de>, const N: usize>(d: D) -> Result<[f64; N], D::Error> {
        let values = Vec::<f64>::deserialize(d)?;
        let len = values.len();
        values
            .try_into()
            .map_err(|_| D::Error::invalid_length(len, &format!("{} coordinates", N).as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon2D {
    pub outlines: usize,
    pub area: f64,
    pub convex: bool,
    pub bounding_box: BoundingBox2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solid3D {
    pub facets: usize,
    pub convex: bool,
    pub bounding_box: BoundingBox3,
}

/// Nef polyhedron counts, only produced by builds carrying the nef backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NefSolid3D {
    #[serde(default = "default_nef_dimension")]
    pub dimension: u8,
    pub simple: bool,
    pub vertices: usize,
    pub halfedges: usize,
    pub edges: usize,
    pub halffacets: usize,
    pub facets: usize,
    pub volumes: usize,
    pub bounding_box: BoundingBox3,
}

fn default_nef_dimension() -> u8 {
    3
}

/// Closed set of geometry representations the reporting layer understands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeometryVariant {
    Empty,
    List { children: Vec<GeometryVariant> },
    #[serde(rename = "polygon2d")]
    Polygon2D(Polygon2D),
    #[serde(rename = "solid3d")]
    Solid3D(Solid3D),
    #[serde(rename = "nef_solid3d")]
    NefSolid3D(NefSolid3D),
}

impl GeometryVariant {
    pub fn list(children: Vec<GeometryVariant>) -> Self {
        GeometryVariant::List { children }
    }

    /// Whether the geometry has nothing worth summarising.
    ///
    /// A list is empty when every child is empty.
    pub fn is_empty(&self) -> bool {
        match self {
            GeometryVariant::Empty => true,
            GeometryVariant::List { children } => children.iter().all(GeometryVariant::is_empty),
            GeometryVariant::Polygon2D(poly) => poly.outlines == 0,
            GeometryVariant::Solid3D(solid) => solid.facets == 0,
            GeometryVariant::NefSolid3D(nef) => nef.vertices == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit_cube() -> GeometryVariant {
        GeometryVariant::Solid3D(Solid3D {
            facets: 12,
            convex: true,
            bounding_box: BoundingBox::new([0.0; 3], [1.0; 3]),
        })
    }

    #[test]
    fn test_size() {
        let bb = BoundingBox::new([-1.0, 2.0], [3.0, 2.5]);
        assert_eq!(bb.size(), [4.0, 0.5]);
    }

    #[test]
    fn test_is_empty() {
        assert!(GeometryVariant::Empty.is_empty());
        assert!(GeometryVariant::list(vec![]).is_empty());
        assert!(GeometryVariant::list(vec![GeometryVariant::Empty]).is_empty());
        assert!(!GeometryVariant::list(vec![GeometryVariant::Empty, unit_cube()]).is_empty());
        assert!(!unit_cube().is_empty());

        let flat = GeometryVariant::Polygon2D(Polygon2D {
            outlines: 0,
            area: 0.0,
            convex: false,
            bounding_box: BoundingBox::new([0.0; 2], [0.0; 2]),
        });
        assert!(flat.is_empty());
    }

    #[test]
    fn test_deserialize_tagged() {
        let json = r#"{
            "kind": "solid3d",
            "facets": 12,
            "convex": true,
            "bounding_box": { "min": [0, 0, 0], "max": [1, 1, 1] }
        }"#;
        let geometry: GeometryVariant = serde_json::from_str(json).unwrap();
        assert_eq!(geometry, unit_cube());
    }

    #[test]
    fn test_deserialize_rejects_wrong_arity() {
        let json = r#"{
            "kind": "solid3d",
            "facets": 12,
            "convex": true,
            "bounding_box": { "min": [0, 0], "max": [1, 1] }
        }"#;
        assert!(serde_json::from_str::<GeometryVariant>(json).is_err());
    }

    #[test]
    fn test_nef_dimension_defaults_to_three() {
        let json = r#"{
            "kind": "nef_solid3d",
            "simple": true,
            "vertices": 8, "halfedges": 24, "edges": 12,
            "halffacets": 12, "facets": 6, "volumes": 2,
            "bounding_box": { "min": [0, 0, 0], "max": [1, 1, 1] }
        }"#;
        match serde_json::from_str::<GeometryVariant>(json).unwrap() {
            GeometryVariant::NefSolid3D(nef) => assert_eq!(nef.dimension, 3),
            other => panic!("unexpected variant {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn size_is_max_minus_min(
            min in proptest::array::uniform3(-1e6f64..1e6),
            extent in proptest::array::uniform3(0f64..1e6)
        ) {
            let max: [f64; 3] = std::array::from_fn(|i| min[i] + extent[i]);
            let bb3 = BoundingBox::new(min, max);
            let bb2 = BoundingBox::new([min[0], min[1]], [max[0], max[1]]);
            for i in 0..3 {
                prop_assert_eq!(bb3.size()[i], max[i] - min[i]);
            }
            for i in 0..2 {
                prop_assert_eq!(bb2.size()[i], bb3.size()[i]);
            }
        }
    }
}
