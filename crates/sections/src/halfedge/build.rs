//! Half-edge construction from an undirected edge list.

use tracing::debug;

use crate::error::{MeshError, Result};
use crate::planar::{angle_of, EdgeId, EdgeList, MeshCfg, VertexId};

use super::types::{HalfEdge, HalfEdgeId, HalfEdgeSet};

/// Build twins and successors for every edge of `input`.
///
/// Each vertex's outgoing half-edges are sorted counterclockwise by angle
/// (ties by id). The successor of an incoming half-edge `h` is the outgoing
/// half-edge immediately clockwise of `twin(h)`, which keeps the face on the
/// left of every half-edge and traces bounded faces counterclockwise. At a
/// degree-2 vertex this is simply the other edge.
///
/// Errors
/// - `EmptyInput`, `InvalidVertexIndex`, `DegenerateEdge` for bad edges.
/// - `BadDegree` for vertices of degree 0, 1 or any odd degree.
/// - `Junction` for even degree >= 4 unless `cfg.allow_junctions`.
pub fn build_halfedges(input: &EdgeList, cfg: MeshCfg) -> Result<HalfEdgeSet<'_>> {
    if input.edges.is_empty() {
        return Err(MeshError::EmptyInput);
    }
    let nv = input.num_vertices();
    for (ei, e) in input.edges.iter().enumerate() {
        for v in [e.v1, e.v2] {
            if v.0 >= nv {
                return Err(MeshError::InvalidVertexIndex {
                    edge: ei,
                    vertex: v.0,
                    count: nv,
                });
            }
        }
        if e.v1 == e.v2 {
            return Err(MeshError::DegenerateEdge {
                edge: ei,
                vertex: e.v1.0,
            });
        }
    }

    // Twin pairs first; `next` is patched below.
    let mut halfedges: Vec<HalfEdge> = Vec::with_capacity(2 * input.num_edges());
    let mut outgoing: Vec<Vec<HalfEdgeId>> = vec![Vec::new(); nv];
    for (ei, e) in input.edges.iter().enumerate() {
        let fwd = HalfEdgeId::of_edge(EdgeId(ei), false);
        let bwd = fwd.twin();
        halfedges.push(HalfEdge {
            origin: e.v1,
            twin: bwd,
            next: fwd,
            edge: EdgeId(ei),
        });
        halfedges.push(HalfEdge {
            origin: e.v2,
            twin: fwd,
            next: bwd,
            edge: EdgeId(ei),
        });
        outgoing[e.v1.0].push(fwd);
        outgoing[e.v2.0].push(bwd);
    }

    for (vi, out) in outgoing.iter().enumerate() {
        check_degree(input, cfg, VertexId(vi), out.len())?;
    }

    let mut set = HalfEdgeSet { input, halfedges };

    // Counterclockwise fan per vertex.
    for out in outgoing.iter_mut() {
        if out.len() > 2 {
            out.sort_by(|&a, &b| {
                let aa = angle_of(set.direction(a));
                let bb = angle_of(set.direction(b));
                aa.partial_cmp(&bb)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(a.cmp(&b))
            });
        }
    }

    for h in 0..set.halfedges.len() {
        let hid = HalfEdgeId(h);
        let twin = hid.twin();
        let fan = &outgoing[set.dest(hid).0];
        let pos = fan.iter().position(|&o| o == twin).ok_or_else(|| {
            MeshError::invariant(format!(
                "twin of half-edge {} missing from the fan of vertex {}",
                h,
                set.dest(hid).0
            ))
        })?;
        set.halfedges[h].next = fan[(pos + fan.len() - 1) % fan.len()];
    }

    debug!(
        vertices = nv,
        edges = input.num_edges(),
        halfedges = set.len(),
        "built half-edges"
    );
    Ok(set)
}

fn check_degree(input: &EdgeList, cfg: MeshCfg, v: VertexId, degree: usize) -> Result<()> {
    let p = input.vertex(v).coords;
    if degree < 2 || degree % 2 == 1 {
        return Err(MeshError::BadDegree {
            vertex: v.0,
            x: p.x,
            y: p.y,
            degree,
        });
    }
    if degree > 2 && !cfg.allow_junctions {
        return Err(MeshError::Junction {
            vertex: v.0,
            x: p.x,
            y: p.y,
            degree,
        });
    }
    Ok(())
}
