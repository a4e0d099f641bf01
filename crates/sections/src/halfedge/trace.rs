//! Loop tracing over resolved `next` links.

use tracing::{debug, trace};

use crate::error::{MeshError, Result};

use super::types::{HalfEdgeId, HalfEdgeSet, Loop};

/// Walk every half-edge into exactly one closed loop.
///
/// Starts are taken in id order (input edge order, then direction), so loop
/// discovery order is reproducible. Reaching a visited half-edge that is not
/// the start of the current walk means `next` is not a permutation, which
/// is an engine defect and reported as `MeshError::Invariant`.
pub fn trace_loops(set: &HalfEdgeSet<'_>) -> Result<Vec<Loop>> {
    let n = set.len();
    let mut visited = vec![false; n];
    let mut loops: Vec<Loop> = Vec::new();
    for start in set.ids() {
        if visited[start.0] {
            continue;
        }
        let mut walk: Vec<HalfEdgeId> = Vec::new();
        let mut cur = start;
        loop {
            if visited[cur.0] {
                return Err(MeshError::invariant(format!(
                    "half-edge {} reached twice while tracing from {}",
                    cur.0, start.0
                )));
            }
            visited[cur.0] = true;
            walk.push(cur);
            cur = set.next(cur);
            if cur == start {
                break;
            }
        }
        let lp = Loop::new(walk, set);
        trace!(start = start.0, len = lp.len(), area = lp.area, "traced loop");
        loops.push(lp);
    }
    debug!(loops = loops.len(), halfedges = n, "traced loops");
    Ok(loops)
}
