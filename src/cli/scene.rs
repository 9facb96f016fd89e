//! Scene files: the computed geometry and camera handed to the reporter

use crate::core::{Camera, GeometryVariant};
use crate::{RenderStatError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub geometry: Option<GeometryVariant>,
    #[serde(default)]
    pub camera: Camera,
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RenderStatError::Scene(e.to_string()))
    }
}

/// Read a scene from `path`, or from stdin when `path` is `-`
pub fn load_scene(path: &str) -> Result<Scene> {
    let contents = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Scene::from_json(&contents)
}
