//! Section generators: standard structural shapes as validated meshes.
//!
//! Purpose
//! - Map a few physical parameters (widths, thicknesses, diameter, point
//!   count) to a counterclockwise outline, mesh it, and derive snap points.
//!
//! Why this design
//! - Each generator is a pure function; `SectionShape` bundles the parameters
//!   so callers (the CLI, benches) can dispatch over shapes uniformly.
//! - Hollow sections are a single ring with a hairline slit instead of an
//!   outer ring plus a hole, so they pass the default no-holes pipeline.
//!
//! Code cross-refs: `mesh::from_polyline`, `snap::generic_snap_points`.

mod profiles;
mod snap;

pub use profiles::{
    hss_circ_mesh, hss_circ_vertices, hss_rect_mesh, hss_rect_vertices, rect_mesh, rect_vertices,
    w_fillet_radius, w_mesh, w_vertices,
};
pub use snap::{generic_snap_points, SnapPoints};

use nalgebra::Vector2;

use crate::error::Result;
use crate::mesh::{from_polyline, Mesh};
use crate::planar::MeshCfg;

/// Half-width of the slit joining outer and inner boundaries of hollow
/// sections. The two seam vertices on each side sit `2 · SEAM_OFFSET` apart,
/// so no edge has zero length and no coordinate is shared by two vertices.
/// The slit removes `2 · SEAM_OFFSET · t` of area.
pub const SEAM_OFFSET: f64 = 1e-6;

/// Missing fillet area used when a wide flange has no usable target area.
pub const FILLET_AREA_FLOOR: f64 = 1e-4;

/// Radius scale compensating the material kept by four-chord fillet arcs.
pub const FILLET_ARC_CORRECTION: f64 = 0.9565;

/// Default point count per circle for circular hollow sections.
pub const DEFAULT_CIRC_POINTS: usize = 64;

/// Parameters of one standard section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SectionShape {
    WideFlange {
        b: f64,
        h: f64,
        tw: f64,
        tf: f64,
        target_area: Option<f64>,
    },
    HssRect {
        ht: f64,
        b: f64,
        t: f64,
    },
    HssCirc {
        od: f64,
        tdes: f64,
        n_pts: usize,
    },
    Rect {
        b: f64,
        h: f64,
    },
}

impl SectionShape {
    pub fn name(&self) -> &'static str {
        match self {
            SectionShape::WideFlange { .. } => "W",
            SectionShape::HssRect { .. } => "HSS_rect",
            SectionShape::HssCirc { .. } => "HSS_circ",
            SectionShape::Rect { .. } => "rect",
        }
    }

    /// Counterclockwise outline before meshing.
    pub fn vertices(&self) -> Result<Vec<Vector2<f64>>> {
        match *self {
            SectionShape::WideFlange {
                b,
                h,
                tw,
                tf,
                target_area,
            } => w_vertices(b, h, tw, tf, target_area),
            SectionShape::HssRect { ht, b, t } => hss_rect_vertices(ht, b, t),
            SectionShape::HssCirc { od, tdes, n_pts } => hss_circ_vertices(od, tdes, n_pts),
            SectionShape::Rect { b, h } => rect_vertices(b, h),
        }
    }

    pub fn mesh(&self) -> Result<Mesh> {
        self.mesh_with(MeshCfg::default())
    }

    pub fn mesh_with(&self, cfg: MeshCfg) -> Result<Mesh> {
        from_polyline(&self.vertices()?, cfg)
    }

    /// Mesh plus snap points.
    pub fn section(&self, cfg: MeshCfg) -> Result<Section> {
        let mesh = self.mesh_with(cfg)?;
        let snap_points = generic_snap_points(&mesh);
        Ok(Section {
            name: self.name(),
            mesh,
            snap_points,
        })
    }
}

/// A generated section: its mesh and snap points.
#[derive(Clone, Debug)]
pub struct Section {
    pub name: &'static str,
    pub mesh: Mesh,
    pub snap_points: SnapPoints,
}

#[cfg(test)]
mod tests;
