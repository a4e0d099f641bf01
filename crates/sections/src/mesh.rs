//! Validated section outline (`Mesh`) and the meshing pipeline.
//!
//! Purpose
//! - Run edge list → half-edges → loops → classification → sanity checks and
//!   keep only what downstream code needs: one counterclockwise outer ring
//!   (plus clockwise holes when enabled) and its bounding box.
//!
//! Assumptions and conventions
//! - The outer ring is always counterclockwise (positive shoelace area),
//!   whatever the winding of the input.
//! - Half-edges and loops are transient; only coordinates survive in `Mesh`.

use nalgebra::Vector2;
use tracing::debug;

use crate::error::{MeshError, Result};
use crate::geometry::{point_in_ring, shoelace_area};
use crate::halfedge::{build_halfedges, classify_loops, sanity_checks, trace_loops};
use crate::planar::{EdgeList, MeshCfg};

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl BBox {
    /// Box around `points`; `None` when empty.
    pub fn from_points(points: &[Vector2<f64>]) -> Option<Self> {
        let first = *points.first()?;
        let mut min = first;
        let mut max = first;
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self { min, max })
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        (self.min + self.max) * 0.5
    }
}

/// Validated section outline.
///
/// Invariants:
/// - `outer` has at least 3 points and positive signed area.
/// - every ring in `holes` has negative signed area.
#[derive(Clone, Debug)]
pub struct Mesh {
    outer: Vec<Vector2<f64>>,
    holes: Vec<Vec<Vector2<f64>>>,
    bbox: BBox,
}

impl Mesh {
    /// Build from raw rings, normalizing the outer ring to counterclockwise
    /// and holes to clockwise.
    pub fn from_rings(
        mut outer: Vec<Vector2<f64>>,
        mut holes: Vec<Vec<Vector2<f64>>>,
    ) -> Result<Self> {
        if outer.len() < 3 {
            return Err(MeshError::invalid_param(
                "outer",
                outer.len(),
                "ring needs at least 3 points",
            ));
        }
        if shoelace_area(&outer) < 0.0 {
            outer.reverse();
        }
        for h in holes.iter_mut() {
            if shoelace_area(h) > 0.0 {
                h.reverse();
            }
        }
        let bbox = BBox::from_points(&outer).ok_or_else(|| {
            MeshError::invalid_param("outer", 0, "ring needs at least 3 points")
        })?;
        Ok(Self { outer, holes, bbox })
    }

    /// Counterclockwise outer boundary.
    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.outer
    }
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.outer.len()
    }
    /// Clockwise hole boundaries (empty unless holes were enabled).
    #[inline]
    pub fn holes(&self) -> &[Vec<Vector2<f64>>] {
        &self.holes
    }
    #[inline]
    pub fn bounding_box(&self) -> BBox {
        self.bbox
    }

    /// Enclosed area: outer ring minus holes.
    pub fn area(&self) -> f64 {
        shoelace_area(&self.outer) + self.holes.iter().map(|h| shoelace_area(h)).sum::<f64>()
    }

    /// Inside the outer ring and outside every hole.
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        point_in_ring(p, &self.outer) && !self.holes.iter().any(|h| point_in_ring(p, h))
    }
}

/// Mesh an arbitrary edge list.
///
/// Errors from every stage propagate unchanged; see `MeshError::kind` to tell
/// malformed input from engine defects.
pub fn generate(input: &EdgeList, cfg: MeshCfg) -> Result<Mesh> {
    let set = build_halfedges(input, cfg)?;
    let loops = trace_loops(&set)?;
    let cls = classify_loops(&set, loops, cfg)?;
    sanity_checks(&set, &cls, cfg)?;
    let holes = cls.internal.iter().map(|l| l.points(&set)).collect();
    let mesh = Mesh::from_rings(cls.external.points(&set), holes)?;
    debug!(
        vertices = mesh.num_vertices(),
        holes = mesh.holes().len(),
        area = mesh.area(),
        "generated mesh"
    );
    Ok(mesh)
}

/// Mesh the closed polyline through `points`.
pub fn from_polyline(points: &[Vector2<f64>], cfg: MeshCfg) -> Result<Mesh> {
    generate(&EdgeList::from_polyline(points), cfg)
}
