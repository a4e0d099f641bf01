//! Named snap points derived from a mesh's bounding box.
//!
//! A snap point is the translation that moves one reference location of the
//! section (a corner, an edge midpoint, the centroid) onto the member axis,
//! so each value is the negated reference location. Edge midpoints and the
//! centroid sit on the bounding-box centre lines. For the doubly symmetric
//! generated sections that centre is the area centroid and the origin.

use nalgebra::Vector2;

use crate::mesh::{BBox, Mesh};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapPoints {
    pub centroid: Vector2<f64>,
    pub top_center: Vector2<f64>,
    pub top_left: Vector2<f64>,
    pub top_right: Vector2<f64>,
    pub center_left: Vector2<f64>,
    pub center_right: Vector2<f64>,
    pub bottom_center: Vector2<f64>,
    pub bottom_left: Vector2<f64>,
    pub bottom_right: Vector2<f64>,
}

impl SnapPoints {
    pub const NAMES: [&'static str; 9] = [
        "centroid",
        "top_center",
        "top_left",
        "top_right",
        "center_left",
        "center_right",
        "bottom_center",
        "bottom_left",
        "bottom_right",
    ];

    pub fn from_bbox(bb: &BBox) -> Self {
        let (xmin, ymin) = (bb.min.x, bb.min.y);
        let (xmax, ymax) = (bb.max.x, bb.max.y);
        let c = bb.center();
        let at = |x: f64, y: f64| -Vector2::new(x, y);
        Self {
            centroid: -c,
            top_center: at(c.x, ymax),
            top_left: at(xmin, ymax),
            top_right: at(xmax, ymax),
            center_left: at(xmin, c.y),
            center_right: at(xmax, c.y),
            bottom_center: at(c.x, ymin),
            bottom_left: at(xmin, ymin),
            bottom_right: at(xmax, ymin),
        }
    }

    pub fn get(&self, name: &str) -> Option<Vector2<f64>> {
        let p = match name {
            "centroid" => self.centroid,
            "top_center" => self.top_center,
            "top_left" => self.top_left,
            "top_right" => self.top_right,
            "center_left" => self.center_left,
            "center_right" => self.center_right,
            "bottom_center" => self.bottom_center,
            "bottom_left" => self.bottom_left,
            "bottom_right" => self.bottom_right,
            _ => return None,
        };
        Some(p)
    }

    /// `(name, offset)` pairs in `NAMES` order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Vector2<f64>)> + '_ {
        Self::NAMES
            .iter()
            .filter_map(move |&n| self.get(n).map(|p| (n, p)))
    }
}

/// Snap points of any generated section.
pub fn generic_snap_points(mesh: &Mesh) -> SnapPoints {
    SnapPoints::from_bbox(&mesh.bounding_box())
}
