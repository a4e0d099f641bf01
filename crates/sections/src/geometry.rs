use nalgebra::{Matrix2, Vector2};

/// Pre: `a` and `b` are 2D column vectors.
/// Post: returns the signed area of the parallelogram spanned by (a,b).
pub fn parallelogram_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    // determinant of [a b]
    let m = Matrix2::from_columns(&[a, b]);
    m.determinant()
}

/// Signed area of a closed ring (shoelace). Positive for counterclockwise order.
///
/// The ring is implicitly closed: the last point connects back to the first.
pub fn shoelace_area(ring: &[Vector2<f64>]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for (i, p) in ring.iter().enumerate() {
        let q = ring[(i + 1) % ring.len()];
        twice += parallelogram_area(*p, q);
    }
    0.5 * twice
}

/// Even-odd ray casting. Points exactly on the boundary may land either way.
pub fn point_in_ring(p: Vector2<f64>, ring: &[Vector2<f64>]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (ring[i], ring[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Twice the signed area of triangle (a, b, c). Positive when c is left of a→b.
pub fn orient(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    parallelogram_area(b - a, c - a)
}

/// `p` lies within the bounding box of segment `a`-`b`. Only meaningful for
/// collinear points.
fn within_segment(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Closed segments `a`-`b` and `c`-`d` share at least one point.
///
/// Proper crossings, an endpoint touching the other segment and collinear
/// overlap all count.
pub fn segments_intersect(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
) -> bool {
    let o1 = orient(a, b, c);
    let o2 = orient(a, b, d);
    let o3 = orient(c, d, a);
    let o4 = orient(c, d, b);

    if (o1 == 0.0 && within_segment(c, a, b))
        || (o2 == 0.0 && within_segment(d, a, b))
        || (o3 == 0.0 && within_segment(a, c, d))
        || (o4 == 0.0 && within_segment(b, c, d))
    {
        return true;
    }
    let ab = (o1 > 0.0 && o2 < 0.0) || (o1 < 0.0 && o2 > 0.0);
    let cd = (o3 > 0.0 && o4 < 0.0) || (o3 < 0.0 && o4 > 0.0);
    ab && cd
}
