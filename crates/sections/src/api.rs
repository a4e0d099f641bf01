//! Curated surface for callers of the mesher.
//!
//! Prefer these re-exports over deep paths; stage-level items (half-edge
//! sets, loop classification) stay reachable through their modules.

// Input model
pub use crate::planar::rand::{draw_star_polygon, RadialCfg, ReplayToken, VertexCount};
pub use crate::planar::{define_edges, Edge, EdgeId, EdgeList, MeshCfg, Vertex, VertexId};
// Pipeline
pub use crate::halfedge::{
    build_halfedges, classify_loops, sanity_checks, trace_loops, LoopClassification, Winding,
};
pub use crate::mesh::{from_polyline, generate, BBox, Mesh};
// Errors
pub use crate::error::{ErrorKind, MeshError, Result as MeshResult};
// Section generators
pub use crate::shapes::{
    generic_snap_points, hss_circ_mesh, hss_rect_mesh, rect_mesh, w_fillet_radius, w_mesh,
    Section, SectionShape, SnapPoints, DEFAULT_CIRC_POINTS, FILLET_AREA_FLOOR, SEAM_OFFSET,
};
