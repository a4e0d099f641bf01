//! Parametric outlines of standard cross-sections.
//!
//! Every `*_vertices` function returns a closed ring, counterclockwise, centred
//! on the origin; the matching `*_mesh` runs it through `mesh::from_polyline`
//! with the default `MeshCfg`.
//!
//! References
//! - Wide flange fillets: material in one corner is `r² (1 − π/4)`, so four
//!   fillets add `r² (4 − π)`. Four chords per arc keep slightly more material
//!   than the true arc, which `FILLET_ARC_CORRECTION` compensates.
//! - Circular hollow sections: an `n`-point ring over `[0, 2π]` has `n − 1`
//!   chords, so its area is `π r² · sin(x)/x` with `x = 2π/(n − 1)`.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_8, PI};

use nalgebra::Vector2;
use tracing::{debug, warn};

use crate::error::{MeshError, Result};
use crate::mesh::{from_polyline, Mesh};
use crate::planar::MeshCfg;

use super::{FILLET_ARC_CORRECTION, FILLET_AREA_FLOOR, SEAM_OFFSET};

fn positive(name: &'static str, v: f64) -> Result<f64> {
    if !v.is_finite() {
        return Err(MeshError::invalid_param(name, v, "must be finite"));
    }
    if v <= 0.0 {
        return Err(MeshError::invalid_param(name, v, "must be positive"));
    }
    Ok(v)
}

/// Fillet radius of a wide flange whose outline should enclose `target_area`.
///
/// Without a target, or when flanges and web alone already exceed it, the
/// missing area falls back to `FILLET_AREA_FLOOR` and the radius is tiny.
pub fn w_fillet_radius(b: f64, h: f64, tw: f64, tf: f64, target_area: Option<f64>) -> f64 {
    let nominal = 2.0 * b * tf + (h - 2.0 * tf) * tw;
    let area_diff = match target_area {
        Some(a) if a - nominal >= 0.0 => a - nominal,
        Some(a) => {
            warn!(
                target_area = a,
                nominal, "flanges and web exceed the target area; using minimal fillets"
            );
            FILLET_AREA_FLOOR
        }
        None => FILLET_AREA_FLOOR,
    };
    (area_diff / (4.0 - PI)).sqrt() * FILLET_ARC_CORRECTION
}

/// Three interior points of a fillet arc, stepping clockwise from `start`.
fn fillet_arc(center: Vector2<f64>, r: f64, start: f64) -> [Vector2<f64>; 3] {
    [1.0, 2.0, 3.0].map(|j| {
        let th = start - j * FRAC_PI_8;
        center + Vector2::new(th.cos(), th.sin()) * r
    })
}

/// Wide-flange (I) outline with filleted web-to-flange corners: 28 points.
///
/// `b` flange width, `h` depth, `tw` web thickness, `tf` flange thickness.
pub fn w_vertices(
    b: f64,
    h: f64,
    tw: f64,
    tf: f64,
    target_area: Option<f64>,
) -> Result<Vec<Vector2<f64>>> {
    positive("b", b)?;
    positive("h", h)?;
    positive("tw", tw)?;
    positive("tf", tf)?;
    if let Some(a) = target_area {
        positive("target_area", a)?;
    }
    if 2.0 * tf >= h {
        return Err(MeshError::invalid_param(
            "tf",
            tf,
            "flanges must be thinner than half the depth",
        ));
    }
    if tw >= b {
        return Err(MeshError::invalid_param(
            "tw",
            tw,
            "web must be thinner than the flange width",
        ));
    }

    let r = w_fillet_radius(b, h, tw, tf, target_area);
    let k = (b - 2.0 * r - tw) / 2.0;
    if k <= 0.0 {
        return Err(MeshError::invalid_param(
            "target_area",
            target_area.unwrap_or(0.0),
            "fillets do not fit between web and flange tips",
        ));
    }
    if h - 2.0 * tf <= 2.0 * r {
        return Err(MeshError::invalid_param(
            "target_area",
            target_area.unwrap_or(0.0),
            "fillets do not fit along the web",
        ));
    }

    let x = b / 2.0;
    let y = h / 2.0;
    let yf = y - tf;
    let v = Vector2::<f64>::new;

    let mut pts = Vec::with_capacity(28);
    pts.extend([v(x, y), v(-x, y), v(-x, yf), v(-x + k, yf)]);
    pts.extend(fillet_arc(v(-x + k, yf - r), r, FRAC_PI_2));
    pts.extend([v(-x + k + r, yf - r), v(-x + k + r, -yf + r)]);
    pts.extend(fillet_arc(v(-x + k, -yf + r), r, 0.0));
    pts.extend([
        v(-x + k, -yf),
        v(-x, -yf),
        v(-x, -y),
        v(x, -y),
        v(x, -yf),
        v(x - k, -yf),
    ]);
    pts.extend(fillet_arc(v(x - k, -yf + r), r, 3.0 * FRAC_PI_2));
    pts.extend([v(x - k - r, -yf + r), v(x - k - r, yf - r)]);
    pts.extend(fillet_arc(v(x - k, yf - r), r, PI));
    pts.extend([v(x - k, yf), v(x, yf)]);

    debug!(b, h, tw, tf, r, k, "wide flange outline");
    Ok(pts)
}

pub fn w_mesh(b: f64, h: f64, tw: f64, tf: f64, target_area: Option<f64>) -> Result<Mesh> {
    from_polyline(&w_vertices(b, h, tw, tf, target_area)?, MeshCfg::default())
}

/// Rectangular hollow section: 12 points.
///
/// The outer and inner boundaries are one ring joined through a slit of
/// half-width `SEAM_OFFSET` at the bottom centre. `ht` is the depth, `b` the
/// width and `t` the wall thickness.
pub fn hss_rect_vertices(ht: f64, b: f64, t: f64) -> Result<Vec<Vector2<f64>>> {
    positive("ht", ht)?;
    positive("b", b)?;
    positive("t", t)?;
    let a = b / 2.0;
    let c = ht / 2.0;
    let u = a - t;
    let w = c - t;
    if u <= SEAM_OFFSET {
        return Err(MeshError::invalid_param(
            "t",
            t,
            "wall must be thinner than half the width",
        ));
    }
    if w <= 0.0 {
        return Err(MeshError::invalid_param(
            "t",
            t,
            "wall must be thinner than half the depth",
        ));
    }
    let e = SEAM_OFFSET;
    let v = Vector2::<f64>::new;
    Ok(vec![
        v(e, -c),
        v(a, -c),
        v(a, c),
        v(-a, c),
        v(-a, -c),
        v(-e, -c),
        v(-e, -w),
        v(-u, -w),
        v(-u, w),
        v(u, w),
        v(u, -w),
        v(e, -w),
    ])
}

pub fn hss_rect_mesh(ht: f64, b: f64, t: f64) -> Result<Mesh> {
    from_polyline(&hss_rect_vertices(ht, b, t)?, MeshCfg::default())
}

/// Circular hollow section approximated by `n_pts` points per circle.
///
/// The outer circle (radius `od/2`) starts at the bottom and runs
/// counterclockwise over `[0, 2π]`; the inner circle (radius `od/2 − tdes`)
/// follows in reverse. The duplicated seam points are pushed apart by
/// `SEAM_OFFSET` so no edge collapses.
pub fn hss_circ_vertices(od: f64, tdes: f64, n_pts: usize) -> Result<Vec<Vector2<f64>>> {
    positive("od", od)?;
    positive("tdes", tdes)?;
    if n_pts < 4 {
        return Err(MeshError::invalid_param("n_pts", n_pts, "need at least 4 points"));
    }
    let ro = od / 2.0;
    let ri = ro - tdes;
    if ri <= SEAM_OFFSET {
        return Err(MeshError::invalid_param(
            "tdes",
            tdes,
            "wall must be thinner than the outer radius",
        ));
    }

    let step = 2.0 * PI / (n_pts - 1) as f64;
    let circle = |r: f64| -> Vec<Vector2<f64>> {
        (0..n_pts)
            .map(|i| {
                let th = i as f64 * step;
                Vector2::new(th.sin(), -th.cos()) * r
            })
            .collect()
    };
    let mut outer = circle(ro);
    let mut inner = circle(ri);
    inner.reverse();
    let last = n_pts - 1;
    outer[0].x += SEAM_OFFSET;
    outer[last].x -= SEAM_OFFSET;
    inner[0].x -= SEAM_OFFSET;
    inner[last].x += SEAM_OFFSET;

    outer.extend(inner);
    Ok(outer)
}

pub fn hss_circ_mesh(od: f64, tdes: f64, n_pts: usize) -> Result<Mesh> {
    from_polyline(&hss_circ_vertices(od, tdes, n_pts)?, MeshCfg::default())
}

/// Solid `b × h` rectangle.
pub fn rect_vertices(b: f64, h: f64) -> Result<Vec<Vector2<f64>>> {
    positive("b", b)?;
    positive("h", h)?;
    let (x, y) = (b / 2.0, h / 2.0);
    Ok(vec![
        Vector2::new(x, y),
        Vector2::new(-x, y),
        Vector2::new(-x, -y),
        Vector2::new(x, -y),
    ])
}

pub fn rect_mesh(b: f64, h: f64) -> Result<Mesh> {
    from_polyline(&rect_vertices(b, h)?, MeshCfg::default())
}
