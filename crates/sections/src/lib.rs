//! Planar half-edge mesher for structural cross-sections.
//!
//! Pipeline: parametric outline (`shapes`) → edge list (`planar`) →
//! half-edges, loops, classification and checks (`halfedge`) → validated
//! counterclockwise `mesh::Mesh` with bounding box and snap points.
//!
//! API Policy
//! - Modules are public so tests, benches and the CLI can reach every stage.
//!   `api` lists the names callers normally need.

pub mod api;
pub mod error;
pub mod geometry;
pub mod halfedge;
pub mod mesh;
pub mod planar;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{ErrorKind, MeshError, Result};
pub use mesh::{generate, BBox, Mesh};
pub use nalgebra::Vector2 as Vec2;
pub use planar::MeshCfg;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{ErrorKind, MeshError};
    pub use crate::mesh::{from_polyline, generate, BBox, Mesh};
    pub use crate::planar::{Edge, EdgeList, MeshCfg, Vertex, VertexId};
    pub use crate::shapes::{generic_snap_points, Section, SectionShape, SnapPoints};
    pub use nalgebra::Vector2 as Vec2;
}
