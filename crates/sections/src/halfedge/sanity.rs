//! Final consistency checks before a mesh is handed out.

use nalgebra::Vector2;

use crate::error::{MeshError, Result};
use crate::geometry::segments_intersect;
use crate::planar::{EdgeId, MeshCfg, VertexId};

use super::classify::LoopClassification;
use super::types::HalfEdgeSet;

/// Validate a classification against the half-edge set it came from.
///
/// - The external loop is counterclockwise and above the area threshold.
/// - Every half-edge appears in exactly one loop and the loops cover
///   `2 × edges` half-edges (`Invariant` otherwise).
/// - Retained boundary edges that share no vertex do not touch or cross
///   (`SelfIntersection`, lowest edge pair first).
/// - No holes unless `cfg.allow_holes` (`UnexpectedHoles`).
pub fn sanity_checks(
    set: &HalfEdgeSet<'_>,
    cls: &LoopClassification,
    cfg: MeshCfg,
) -> Result<()> {
    if cls.external.area < cfg.eps_area {
        return Err(MeshError::invariant(format!(
            "external loop has area {} below the threshold {}",
            cls.external.area, cfg.eps_area
        )));
    }

    let expected = 2 * set.input().num_edges();
    if set.len() != expected {
        return Err(MeshError::invariant(format!(
            "{} half-edges for {} edges",
            set.len(),
            set.input().num_edges()
        )));
    }
    let mut seen = vec![false; set.len()];
    for lp in cls.loops() {
        for &h in &lp.halfedges {
            let slot = seen.get_mut(h.0).ok_or_else(|| {
                MeshError::invariant(format!("loop references unknown half-edge {}", h.0))
            })?;
            if *slot {
                return Err(MeshError::invariant(format!(
                    "half-edge {} appears in two loops",
                    h.0
                )));
            }
            *slot = true;
        }
    }
    if let Some(missing) = seen.iter().position(|s| !s) {
        return Err(MeshError::invariant(format!(
            "half-edge {missing} is not part of any loop"
        )));
    }

    check_simple(set, cls)?;

    if !cls.internal.is_empty() && !cfg.allow_holes {
        return Err(MeshError::UnexpectedHoles {
            count: cls.internal.len(),
            areas: cls.internal.iter().map(|l| l.area).collect(),
        });
    }
    Ok(())
}

struct Segment {
    edge: EdgeId,
    ends: [VertexId; 2],
    a: Vector2<f64>,
    b: Vector2<f64>,
}

/// Pairwise test over the external and hole boundaries. Quadratic in the
/// number of boundary edges.
fn check_simple(set: &HalfEdgeSet<'_>, cls: &LoopClassification) -> Result<()> {
    let mut segs: Vec<Segment> = std::iter::once(&cls.external)
        .chain(cls.internal.iter())
        .flat_map(|l| l.halfedges.iter())
        .map(|&h| {
            let (o, d) = (set.origin(h), set.dest(h));
            Segment {
                edge: h.edge(),
                ends: [o, d],
                a: set.position(o),
                b: set.position(d),
            }
        })
        .collect();
    segs.sort_by_key(|s| s.edge);

    for (i, s) in segs.iter().enumerate() {
        for t in &segs[i + 1..] {
            if s.ends.iter().any(|v| t.ends.contains(v)) {
                continue;
            }
            if segments_intersect(s.a, s.b, t.a, t.b) {
                return Err(MeshError::SelfIntersection {
                    first: s.edge.0,
                    second: t.edge.0,
                });
            }
        }
    }
    Ok(())
}
