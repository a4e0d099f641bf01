//! Criterion microbenches for the section generators.
//!
//! - Fixed-size shapes: wide flange (28 points), rectangular HSS (12 points).
//! - Circular HSS with n_pts in {16, 64, 256}.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sections::shapes::{generic_snap_points, SectionShape};

fn bench_fixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes");
    let w = SectionShape::WideFlange {
        b: 5.0,
        h: 13.7,
        tw: 0.23,
        tf: 0.335,
        target_area: Some(6.49),
    };
    let hss = SectionShape::HssRect {
        ht: 8.0,
        b: 4.0,
        t: 0.25,
    };
    for shape in [w, hss] {
        group.bench_function(BenchmarkId::new("mesh", shape.name()), |b| {
            b.iter(|| {
                let m = shape.mesh().unwrap();
                let _sp = generic_snap_points(&m);
            })
        });
    }
    group.finish();
}

fn bench_circ(c: &mut Criterion) {
    let mut group = c.benchmark_group("hss_circ");
    for &n in &[16usize, 64, 256] {
        let shape = SectionShape::HssCirc {
            od: 6.625,
            tdes: 0.261,
            n_pts: n,
        };
        group.bench_with_input(BenchmarkId::new("vertices", n), &shape, |b, s| {
            b.iter(|| {
                let _v = s.vertices().unwrap();
            })
        });
        group.bench_with_input(BenchmarkId::new("mesh", n), &shape, |b, s| {
            b.iter(|| {
                let _m = s.mesh().unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fixed, bench_circ);
criterion_main!(benches);
