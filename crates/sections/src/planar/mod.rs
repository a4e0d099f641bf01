//! Planar input model (vertices, undirected edges, tolerances).
//!
//! Purpose
//! - Provide the raw input of the mesher: an arena of `Vertex` points and a
//!   list of undirected `Edge`s referencing them by `VertexId`.
//! - Keep identity explicit: two vertices at equal coordinates are still two
//!   vertices unless the caller merges them.
//!
//! Code cross-refs: `halfedge::build_halfedges` consumes `EdgeList`;
//! `MeshCfg` is threaded through the whole pipeline.

pub mod rand;
mod types;
mod util;

pub use types::{Edge, EdgeId, EdgeList, MeshCfg, Vertex, VertexId};
pub use util::{angle_of, define_edges};
