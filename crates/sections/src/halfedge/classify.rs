//! Loop classification into external, internal, complement and trivial.

use std::collections::HashSet;

use nalgebra::Vector2;
use tracing::debug;

use crate::error::{MeshError, Result};
use crate::geometry::point_in_ring;
use crate::planar::{MeshCfg, VertexId};

use super::types::{HalfEdgeSet, Loop};

/// Every traced loop, sorted into exactly one bucket.
///
/// - `external`: the counterclockwise outer boundary (largest positive area).
/// - `internal`: clockwise hole boundaries, orientation untouched.
/// - `complement`: walks bounding the face on the far side of a retained
///   boundary: the clockwise walk around the outside of `external` and the
///   counterclockwise walk inside each hole.
/// - `trivial`: `|area| < eps_area`, discarded.
#[derive(Clone, Debug)]
pub struct LoopClassification {
    pub external: Loop,
    pub internal: Vec<Loop>,
    pub complement: Vec<Loop>,
    pub trivial: Vec<Loop>,
}

impl LoopClassification {
    /// All loops, external first.
    pub fn loops(&self) -> impl Iterator<Item = &Loop> {
        std::iter::once(&self.external)
            .chain(self.internal.iter())
            .chain(self.complement.iter())
            .chain(self.trivial.iter())
    }

    pub fn num_loops(&self) -> usize {
        1 + self.internal.len() + self.complement.len() + self.trivial.len()
    }

    pub fn num_halfedges(&self) -> usize {
        self.loops().map(Loop::len).sum()
    }
}

/// Classify traced loops by signed area and nesting.
///
/// 1. `|area| < cfg.eps_area` → trivial.
/// 2. The counterclockwise loop with the largest area is external (the first
///    one discovered wins ties). None → `NoExternalLoop`.
/// 3. Every other counterclockwise loop is ranked by how many other
///    counterclockwise rings enclose it (tested at its first vertex not on
///    the enclosing ring). An odd depth is the void inside a hole and goes to
///    `complement`. An even depth (a disjoint region, or material sitting
///    inside a hole) → `MultipleExternalLoops` (external area listed first).
/// 4. A clockwise loop made of exactly the twins of the external loop is the
///    outside walk → `complement`; every other clockwise loop is a hole.
pub fn classify_loops(
    set: &HalfEdgeSet<'_>,
    loops: Vec<Loop>,
    cfg: MeshCfg,
) -> Result<LoopClassification> {
    let total = loops.len();
    let (trivial, mut rest): (Vec<Loop>, Vec<Loop>) = loops
        .into_iter()
        .partition(|l| l.area.abs() < cfg.eps_area);

    let mut best: Option<usize> = None;
    for (i, l) in rest.iter().enumerate() {
        if !l.is_ccw() {
            continue;
        }
        let better = match best {
            Some(b) => l.area > rest[b].area,
            None => true,
        };
        if better {
            best = Some(i);
        }
    }
    let Some(best) = best else {
        return Err(MeshError::NoExternalLoop {
            loops: total,
            trivial: trivial.len(),
        });
    };
    let external = rest.remove(best);

    let (positive, negative): (Vec<Loop>, Vec<Loop>) =
        rest.into_iter().partition(Loop::is_ccw);
    let rings: Vec<Ring> = std::iter::once(&external)
        .chain(positive.iter())
        .map(|l| Ring::of(l, set))
        .collect();

    let mut internal = Vec::new();
    let mut complement = Vec::new();
    let mut stray: Vec<f64> = Vec::new();
    for (i, l) in positive.into_iter().enumerate() {
        let depth = enclosing_depth(&rings, i + 1);
        if depth % 2 == 1 {
            complement.push(l);
        } else {
            stray.push(l.area);
        }
    }
    for l in negative {
        if l.is_twin_walk_of(&external) {
            complement.push(l);
        } else {
            internal.push(l);
        }
    }
    if !stray.is_empty() {
        let mut areas = Vec::with_capacity(stray.len() + 1);
        areas.push(external.area);
        areas.extend(stray);
        return Err(MeshError::MultipleExternalLoops { areas });
    }

    debug!(
        external_area = external.area,
        internal = internal.len(),
        complement = complement.len(),
        trivial = trivial.len(),
        "classified loops"
    );
    Ok(LoopClassification {
        external,
        internal,
        complement,
        trivial,
    })
}

/// Coordinates and vertex identity of one counterclockwise loop.
struct Ring {
    vertices: Vec<VertexId>,
    members: HashSet<VertexId>,
    points: Vec<Vector2<f64>>,
}

impl Ring {
    fn of(l: &Loop, set: &HalfEdgeSet<'_>) -> Self {
        let vertices = l.vertices(set);
        Self {
            members: vertices.iter().copied().collect(),
            points: l.points(set),
            vertices,
        }
    }
}

/// Number of rings other than `rings[idx]` that contain it.
///
/// A ring sharing every vertex with `rings[idx]` does not count.
fn enclosing_depth(rings: &[Ring], idx: usize) -> usize {
    let me = &rings[idx];
    rings
        .iter()
        .enumerate()
        .filter(|&(j, other)| {
            j != idx
                && me
                    .vertices
                    .iter()
                    .position(|v| !other.members.contains(v))
                    .is_some_and(|k| point_in_ring(me.points[k], &other.points))
        })
        .count()
}
