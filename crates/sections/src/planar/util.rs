use nalgebra::Vector2;

use super::types::{Edge, VertexId};

#[inline]
pub fn angle_of(d: Vector2<f64>) -> f64 {
    d.y.atan2(d.x)
}

/// Edges of a closed polyline over `n` vertices: `i → i+1` and `n-1 → 0`.
///
/// Returns no edges for `n < 2`; a single vertex cannot close a boundary.
pub fn define_edges(n: usize) -> Vec<Edge> {
    if n < 2 {
        return Vec::new();
    }
    let mut edges = Vec::with_capacity(n);
    for i in 0..n - 1 {
        edges.push(Edge::new(VertexId(i), VertexId(i + 1)));
    }
    edges.push(Edge::new(VertexId(n - 1), VertexId(0)));
    edges
}
