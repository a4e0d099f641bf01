//! Half-edge engine: builder, loop tracer, loop classifier and sanity checks.
//!
//! Purpose
//! - Turn an undirected edge list into directed half-edges with resolved
//!   `twin`/`next` links, walk them into closed loops, and reduce the loops
//!   to one counterclockwise outer boundary (plus holes when enabled).
//!
//! Pipeline
//! - `build_halfedges` → `trace_loops` → `classify_loops` → `sanity_checks`.
//!   `mesh::generate` runs all four; they are public so callers and tests can
//!   inspect intermediate results.
//!
//! Conventions
//! - Edge `i` owns half-edges `2i` (v1→v2) and `2i+1` (v2→v1); twins differ
//!   in the lowest bit.
//! - Bounded faces are traced counterclockwise (positive shoelace area); the
//!   walk around the outside of a boundary is clockwise.
//! - Only degree-2 vertices are accepted by default. Junctions (degree >= 4)
//!   resolve by angular order when `MeshCfg::allow_junctions` is set.
//!
//! Code cross-refs: `planar::{EdgeList, MeshCfg}`, `geometry::{shoelace_area, point_in_ring}`.

mod build;
mod classify;
mod sanity;
mod trace;
mod types;

pub use build::build_halfedges;
pub use classify::{classify_loops, LoopClassification};
pub use sanity::sanity_checks;
pub use trace::trace_loops;
pub use types::{HalfEdge, HalfEdgeId, HalfEdgeSet, Loop, Winding};
