//! Camera framing reported alongside the geometry

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Viewport translation
    #[serde(default)]
    pub translation: [f64; 3],
    /// Viewport rotation in degrees
    #[serde(default = "default_rotation")]
    pub rotation: [f64; 3],
    /// Zoom expressed as distance from the target
    #[serde(default = "default_distance")]
    pub distance: f64,
    /// Field of view in degrees
    #[serde(default = "default_fov")]
    pub fov: f64,
}

fn default_rotation() -> [f64; 3] {
    [55.0, 0.0, 25.0]
}
fn default_distance() -> f64 {
    140.0
}
fn default_fov() -> f64 {
    22.5
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            translation: [0.0; 3],
            rotation: default_rotation(),
            distance: default_distance(),
            fov: default_fov(),
        }
    }
}
