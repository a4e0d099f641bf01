//! Generator smoke tests with a few catalogue sections.

use super::*;
use crate::error::{ErrorKind, MeshError};
use crate::geometry::shoelace_area;
use nalgebra::vector;
use std::f64::consts::{FRAC_PI_8, PI};

fn fillet_material(r: f64) -> f64 {
    // four corners, each an r×r square minus a four-chord quarter fan
    4.0 * r * r * (1.0 - 2.0 * FRAC_PI_8.sin())
}

#[test]
fn w14x22_hits_target_area() {
    let (b, h, tw, tf, a) = (5.0, 13.7, 0.23, 0.335, 6.49);
    let pts = w_vertices(b, h, tw, tf, Some(a)).unwrap();
    assert_eq!(pts.len(), 28);
    assert!(shoelace_area(&pts) > 0.0);

    let m = w_mesh(b, h, tw, tf, Some(a)).unwrap();
    assert_eq!(m.num_vertices(), 28);
    let r = w_fillet_radius(b, h, tw, tf, Some(a));
    let nominal = 2.0 * b * tf + (h - 2.0 * tf) * tw;
    assert!((m.area() - (nominal + fillet_material(r))).abs() < 1e-9);
    assert!((m.area() - a).abs() / a < 5e-3);

    let bb = m.bounding_box();
    assert!((bb.min - vector![-2.5, -6.85]).norm() < 1e-12);
    assert!((bb.max - vector![2.5, 6.85]).norm() < 1e-12);
    // web faces sit at ±tw/2
    assert!(m.contains(vector![0.0, 0.0]));
    assert!(!m.contains(vector![0.2, 0.0]));
}

#[test]
fn w14x426_falls_back_to_floor() {
    let (b, h, tw, tf, a) = (16.7, 18.7, 1.88, 3.04, 125.0);
    let nominal = 2.0 * b * tf + (h - 2.0 * tf) * tw;
    assert!(nominal > a);
    let r = w_fillet_radius(b, h, tw, tf, Some(a));
    let floor_r = (FILLET_AREA_FLOOR / (4.0 - PI)).sqrt() * FILLET_ARC_CORRECTION;
    assert_eq!(r, floor_r);
    assert!(r > 0.0 && r < 0.02);
    assert_eq!(w_fillet_radius(b, h, tw, tf, None), floor_r);

    let m = w_mesh(b, h, tw, tf, Some(a)).unwrap();
    assert!((m.area() - (nominal + fillet_material(r))).abs() < 1e-9);
}

#[test]
fn w_rejects_bad_dimensions() {
    let err = w_vertices(5.0, 13.7, 0.23, 7.0, None).unwrap_err();
    assert!(matches!(err, MeshError::InvalidParameter { name: "tf", .. }));
    let err = w_vertices(-5.0, 13.7, 0.23, 0.3, None).unwrap_err();
    assert!(matches!(err, MeshError::InvalidParameter { name: "b", .. }));
    let err = w_vertices(5.0, f64::NAN, 0.23, 0.3, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    let err = w_vertices(5.0, 13.7, 6.0, 0.3, None).unwrap_err();
    assert!(matches!(err, MeshError::InvalidParameter { name: "tw", .. }));
    // fillets wider than the flange overhang
    let err = w_vertices(1.0, 13.7, 0.23, 0.3, Some(50.0)).unwrap_err();
    assert!(matches!(
        err,
        MeshError::InvalidParameter {
            name: "target_area",
            ..
        }
    ));
}

#[test]
fn hss_rect_area_and_slit() {
    let (ht, b, t) = (8.0, 4.0, 0.25);
    let pts = hss_rect_vertices(ht, b, t).unwrap();
    assert_eq!(pts.len(), 12);
    let m = hss_rect_mesh(ht, b, t).unwrap();
    let expect = b * ht - (b - 2.0 * t) * (ht - 2.0 * t) - 2.0 * SEAM_OFFSET * t;
    assert!((m.area() - expect).abs() < 1e-9);
    assert!(m.holes().is_empty());

    let bb = m.bounding_box();
    assert_eq!(bb.min, vector![-2.0, -4.0]);
    assert_eq!(bb.max, vector![2.0, 4.0]);
    assert!(m.contains(vector![1.9, 0.0]));
    assert!(!m.contains(vector![0.0, 0.0]));
}

#[test]
fn hss_rect_rejects_thick_wall() {
    let err = hss_rect_vertices(8.0, 4.0, 2.0).unwrap_err();
    assert!(matches!(err, MeshError::InvalidParameter { name: "t", .. }));
    let err = hss_rect_vertices(1.0, 4.0, 0.5).unwrap_err();
    assert!(matches!(err, MeshError::InvalidParameter { name: "t", .. }));
    assert!(hss_rect_vertices(8.0, 4.0, 0.0).is_err());
}

#[test]
fn hss_circ_area_converges() {
    let (od, tdes) = (6.625, 0.261);
    let ro = od / 2.0;
    let ri = ro - tdes;
    let exact = PI * (ro * ro - ri * ri);
    let rel_err = |n: usize| {
        let m = hss_circ_mesh(od, tdes, n).unwrap();
        assert_eq!(m.num_vertices(), 2 * n);
        ((m.area() - exact) / exact).abs()
    };
    let e64 = rel_err(DEFAULT_CIRC_POINTS);
    let e128 = rel_err(128);
    assert!(e64 < 2e-3, "n=64 relative error {e64}");
    assert!(e128 < e64);

    let m = hss_circ_mesh(od, tdes, 64).unwrap();
    assert!(!m.contains(vector![0.0, 0.0]));
    assert!(m.contains(vector![ro - tdes / 2.0, 0.0]));
    let bb = m.bounding_box();
    assert!((bb.min.y + ro).abs() < 1e-12);
}

#[test]
fn hss_circ_seam_points_are_distinct() {
    let pts = hss_circ_vertices(2.0, 0.1, 8).unwrap();
    for (i, p) in pts.iter().enumerate() {
        for q in &pts[i + 1..] {
            assert!((p - q).norm() > SEAM_OFFSET);
        }
    }
    assert!((pts[0].x - SEAM_OFFSET).abs() < 1e-15);
    assert!((pts[0].y + 1.0).abs() < 1e-15);
}

#[test]
fn hss_circ_rejects_bad_parameters() {
    let err = hss_circ_vertices(2.0, 0.1, 3).unwrap_err();
    assert!(matches!(err, MeshError::InvalidParameter { name: "n_pts", .. }));
    let err = hss_circ_vertices(2.0, 1.0, 16).unwrap_err();
    assert!(matches!(err, MeshError::InvalidParameter { name: "tdes", .. }));
}

#[test]
fn rect_snap_points() {
    let m = rect_mesh(10.0, 4.0).unwrap();
    assert!((m.area() - 40.0).abs() < 1e-12);
    let sp = generic_snap_points(&m);
    assert_eq!(sp.centroid, vector![0.0, 0.0]);
    assert_eq!(sp.top_right, vector![-5.0, -2.0]);
    assert_eq!(sp.top_left, vector![5.0, -2.0]);
    assert_eq!(sp.bottom_left, vector![5.0, 2.0]);
    assert_eq!(sp.bottom_right, vector![-5.0, 2.0]);
    assert_eq!(sp.top_center, vector![0.0, -2.0]);
    assert_eq!(sp.bottom_center, vector![0.0, 2.0]);
    assert_eq!(sp.center_left, vector![5.0, 0.0]);
    assert_eq!(sp.center_right, vector![-5.0, 0.0]);

    assert_eq!(sp.get("top_right"), Some(sp.top_right));
    assert_eq!(sp.get("middle"), None);
    let names: Vec<&str> = sp.iter().map(|(n, _)| n).collect();
    assert_eq!(names, SnapPoints::NAMES.to_vec());
}

#[test]
fn off_centre_outline_snaps_to_its_own_centre_lines() {
    let pts = [
        vector![2.0, 1.0],
        vector![12.0, 1.0],
        vector![12.0, 5.0],
        vector![2.0, 5.0],
    ];
    let m = crate::mesh::from_polyline(&pts, crate::planar::MeshCfg::default()).unwrap();
    let sp = generic_snap_points(&m);
    assert_eq!(sp.centroid, vector![-7.0, -3.0]);
    assert_eq!(sp.top_center, vector![-7.0, -5.0]);
    assert_eq!(sp.bottom_center, vector![-7.0, -1.0]);
    assert_eq!(sp.center_left, vector![-2.0, -3.0]);
    assert_eq!(sp.center_right, vector![-12.0, -3.0]);
    assert_eq!(sp.bottom_left, vector![-2.0, -1.0]);
}

#[test]
fn shape_dispatch() {
    let shapes = [
        SectionShape::WideFlange {
            b: 5.0,
            h: 13.7,
            tw: 0.23,
            tf: 0.335,
            target_area: Some(6.49),
        },
        SectionShape::HssRect {
            ht: 8.0,
            b: 4.0,
            t: 0.25,
        },
        SectionShape::HssCirc {
            od: 6.625,
            tdes: 0.261,
            n_pts: 32,
        },
        SectionShape::Rect { b: 10.0, h: 4.0 },
    ];
    let names: Vec<&str> = shapes.iter().map(SectionShape::name).collect();
    assert_eq!(names, ["W", "HSS_rect", "HSS_circ", "rect"]);
    for s in &shapes {
        let m = s.mesh().unwrap();
        assert!(shoelace_area(m.vertices()) > 0.0);
        assert_eq!(m.num_vertices(), s.vertices().unwrap().len());
        let sec = s.section(MeshCfg::default()).unwrap();
        assert_eq!(sec.name, s.name());
        let bb = sec.mesh.bounding_box();
        assert_eq!(sec.snap_points.top_right, -bb.max);
    }
}

#[test]
fn tight_threshold_rejects_tiny_rect() {
    let s = SectionShape::Rect { b: 5e-4, h: 5e-4 };
    let err = s.mesh().unwrap_err();
    assert!(matches!(err, MeshError::NoExternalLoop { .. }));
    assert!(s.mesh_with(MeshCfg::default().with_eps_area(1e-9)).is_ok());
}
