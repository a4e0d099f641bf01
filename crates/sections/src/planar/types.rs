//! Basic planar types and tolerances used by the mesher.
//!
//! - `MeshCfg`: centralizes the area epsilon and the topology switches.
//! - `Vertex`, `Edge`: immutable input records.
//! - `EdgeList`: vertex arena plus edges; the unit handed to the builder.

use nalgebra::Vector2;

/// Mesher configuration (tolerances and topology switches).
#[derive(Clone, Copy, Debug)]
pub struct MeshCfg {
    /// Loops with `|area|` below this are trivial.
    pub eps_area: f64,
    /// Keep hole loops instead of rejecting them in the sanity check.
    pub allow_holes: bool,
    /// Resolve vertices of degree >= 4 by angular order instead of failing.
    pub allow_junctions: bool,
}

impl Default for MeshCfg {
    fn default() -> Self {
        Self {
            eps_area: 1e-6,
            allow_holes: false,
            allow_junctions: false,
        }
    }
}

impl MeshCfg {
    pub fn with_eps_area(mut self, eps_area: f64) -> Self {
        self.eps_area = eps_area;
        self
    }
    pub fn with_holes(mut self, allow: bool) -> Self {
        self.allow_holes = allow;
        self
    }
    pub fn with_junctions(mut self, allow: bool) -> Self {
        self.allow_junctions = allow;
        self
    }
}

/// Identifier types for clarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

/// A point of the section outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub coords: Vector2<f64>,
}

impl Vertex {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            coords: Vector2::new(x, y),
        }
    }

    /// Coordinate comparison for callers that merge coincident points.
    #[inline]
    pub fn approx_eq(&self, other: &Vertex, tol: f64) -> bool {
        (self.coords - other.coords).norm() <= tol
    }
}

impl From<Vector2<f64>> for Vertex {
    fn from(coords: Vector2<f64>) -> Self {
        Self { coords }
    }
}

/// Undirected boundary segment between two vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub v1: VertexId,
    pub v2: VertexId,
}

impl Edge {
    #[inline]
    pub fn new(v1: VertexId, v2: VertexId) -> Self {
        Self { v1, v2 }
    }
}

/// Vertex arena plus the undirected edges that reference it.
///
/// No validation happens here; `halfedge::build_halfedges` checks indices,
/// degenerate edges and vertex degrees.
#[derive(Clone, Debug, Default)]
pub struct EdgeList {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

impl EdgeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closed polyline through `points` (consecutive pairs plus last→first).
    pub fn from_polyline(points: &[Vector2<f64>]) -> Self {
        let vertices: Vec<Vertex> = points.iter().copied().map(Vertex::from).collect();
        let edges = super::util::define_edges(vertices.len());
        Self { vertices, edges }
    }

    pub fn push_vertex(&mut self, v: Vertex) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(v);
        id
    }

    pub fn push_edge(&mut self, v1: VertexId, v2: VertexId) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge::new(v1, v2));
        id
    }

    /// Append another closed polyline (e.g. a separate hole outline).
    pub fn push_polyline(&mut self, points: &[Vector2<f64>]) {
        let base = self.vertices.len();
        self.vertices
            .extend(points.iter().copied().map(Vertex::from));
        self.edges.extend(
            super::util::define_edges(points.len())
                .into_iter()
                .map(|e| Edge::new(VertexId(e.v1.0 + base), VertexId(e.v2.0 + base))),
        );
    }

    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.0]
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }
}
