//! Data types for the half-edge structure and traced loops.
//!
//! Kept small and explicit to make `build`, `trace` and `classify` easy to read.

use nalgebra::Vector2;

use crate::geometry::shoelace_area;
use crate::planar::{EdgeId, EdgeList, VertexId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfEdgeId(pub usize);

impl HalfEdgeId {
    /// Half-edge of `edge` running v1→v2 (`reversed == false`) or v2→v1.
    #[inline]
    pub fn of_edge(edge: EdgeId, reversed: bool) -> Self {
        HalfEdgeId(2 * edge.0 + usize::from(reversed))
    }
    #[inline]
    pub fn twin(self) -> Self {
        HalfEdgeId(self.0 ^ 1)
    }
    #[inline]
    pub fn edge(self) -> EdgeId {
        EdgeId(self.0 / 2)
    }
}

/// Directed traversal of one input edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HalfEdge {
    pub origin: VertexId,
    pub twin: HalfEdgeId,
    /// Successor around the face to the left of this half-edge.
    pub next: HalfEdgeId,
    pub edge: EdgeId,
}

/// Half-edges of one edge list with twins and successors resolved.
///
/// Borrows the input so loops can be turned back into coordinates.
#[derive(Clone, Debug)]
pub struct HalfEdgeSet<'a> {
    pub(crate) input: &'a EdgeList,
    pub(crate) halfedges: Vec<HalfEdge>,
}

impl<'a> HalfEdgeSet<'a> {
    #[inline]
    pub fn len(&self) -> usize {
        self.halfedges.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.halfedges.is_empty()
    }
    #[inline]
    pub fn input(&self) -> &'a EdgeList {
        self.input
    }
    #[inline]
    pub fn halfedge(&self, id: HalfEdgeId) -> &HalfEdge {
        &self.halfedges[id.0]
    }
    #[inline]
    pub fn origin(&self, id: HalfEdgeId) -> VertexId {
        self.halfedges[id.0].origin
    }
    #[inline]
    pub fn dest(&self, id: HalfEdgeId) -> VertexId {
        self.halfedges[self.halfedges[id.0].twin.0].origin
    }
    #[inline]
    pub fn next(&self, id: HalfEdgeId) -> HalfEdgeId {
        self.halfedges[id.0].next
    }
    #[inline]
    pub fn position(&self, v: VertexId) -> Vector2<f64> {
        self.input.vertex(v).coords
    }
    /// Direction vector origin→destination.
    #[inline]
    pub fn direction(&self, id: HalfEdgeId) -> Vector2<f64> {
        self.position(self.dest(id)) - self.position(self.origin(id))
    }
    /// All ids in stable order (input edge order, then direction).
    pub fn ids(&self) -> impl Iterator<Item = HalfEdgeId> {
        (0..self.halfedges.len()).map(HalfEdgeId)
    }
}

/// Orientation of a traced loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    /// `|area|` below the configured epsilon.
    Degenerate,
}

/// Closed walk of half-edges; each one's destination is the next one's origin.
#[derive(Clone, Debug)]
pub struct Loop {
    pub halfedges: Vec<HalfEdgeId>,
    /// Signed shoelace area over the origin sequence.
    pub area: f64,
}

impl Loop {
    pub fn new(halfedges: Vec<HalfEdgeId>, set: &HalfEdgeSet<'_>) -> Self {
        let pts: Vec<Vector2<f64>> = halfedges
            .iter()
            .map(|&h| set.position(set.origin(h)))
            .collect();
        let area = shoelace_area(&pts);
        Self { halfedges, area }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.halfedges.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.halfedges.is_empty()
    }

    /// Vertex sequence (origins of the half-edges, in walk order).
    pub fn vertices(&self, set: &HalfEdgeSet<'_>) -> Vec<VertexId> {
        self.halfedges.iter().map(|&h| set.origin(h)).collect()
    }

    pub fn points(&self, set: &HalfEdgeSet<'_>) -> Vec<Vector2<f64>> {
        self.halfedges
            .iter()
            .map(|&h| set.position(set.origin(h)))
            .collect()
    }

    pub fn winding(&self, eps_area: f64) -> Winding {
        if self.area.abs() < eps_area {
            Winding::Degenerate
        } else if self.area > 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }

    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.area > 0.0
    }

    /// True when this loop walks exactly the twins of `other`'s half-edges.
    pub fn is_twin_walk_of(&self, other: &Loop) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut mine: Vec<usize> = self.halfedges.iter().map(|h| h.twin().0).collect();
        let mut theirs: Vec<usize> = other.halfedges.iter().map(|h| h.0).collect();
        mine.sort_unstable();
        theirs.sort_unstable();
        mine == theirs
    }
}
