//! JSON shapes for CLI input and output.

use std::collections::BTreeMap;

use nalgebra::Vector2;
use sections::mesh::Mesh;
use sections::shapes::generic_snap_points;
use serde::{Deserialize, Serialize};

/// Custom polygon file: `{"points": [[x, y], ...], "holes": [[[x, y], ...]]}`.
#[derive(Debug, Deserialize)]
pub struct PolygonInput {
    pub points: Vec<[f64; 2]>,
    #[serde(default)]
    pub holes: Vec<Vec<[f64; 2]>>,
}

impl PolygonInput {
    pub fn ring(points: &[[f64; 2]]) -> Vec<Vector2<f64>> {
        points.iter().map(|&[x, y]| Vector2::new(x, y)).collect()
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BBoxOut {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MeshReport {
    pub name: String,
    pub num_vertices: usize,
    pub vertices: Vec<[f64; 2]>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub holes: Vec<Vec<[f64; 2]>>,
    pub area: f64,
    pub bbox: BBoxOut,
    pub snap_points: BTreeMap<String, [f64; 2]>,
}

fn xy(p: &Vector2<f64>) -> [f64; 2] {
    [p.x, p.y]
}

impl MeshReport {
    pub fn new(name: &str, mesh: &Mesh) -> Self {
        let bb = mesh.bounding_box();
        let snap_points = generic_snap_points(mesh)
            .iter()
            .map(|(n, p)| (n.to_string(), xy(&p)))
            .collect();
        Self {
            name: name.to_string(),
            num_vertices: mesh.num_vertices(),
            vertices: mesh.vertices().iter().map(xy).collect(),
            holes: mesh
                .holes()
                .iter()
                .map(|h| h.iter().map(xy).collect())
                .collect(),
            area: mesh.area(),
            bbox: BBoxOut {
                min: xy(&bb.min),
                max: xy(&bb.max),
            },
            snap_points,
        }
    }
}
