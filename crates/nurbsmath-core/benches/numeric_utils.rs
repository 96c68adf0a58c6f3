//! Benchmarks for the numeric utility functions.
//!
//! These operations sit on the hot path of curve and surface evaluation,
//! so the point of this suite is catching regressions in the scalar loop
//! of `binomial` and in the generic vector construction of the
//! coordinate conversions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::{Vector3, Vector4};
use nurbsmath_core::{binomial, cartesian_to_homogeneous, homogeneous_to_cartesian};

fn bench_binomial(c: &mut Criterion) {
    let mut group = c.benchmark_group("binomial");
    for n in [8_u64, 16, 32, 60] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| binomial(black_box(n), black_box(n / 2)));
        });
    }
    group.finish();
}

fn bench_conversions(c: &mut Criterion) {
    let pt = Vector3::new(1.0_f64, 2.0, 3.0);
    c.bench_function("cartesian_to_homogeneous", |b| {
        b.iter(|| cartesian_to_homogeneous(black_box(&pt), black_box(2.0)));
    });

    let hpt = Vector4::new(2.0_f64, 4.0, 6.0, 2.0);
    c.bench_function("homogeneous_to_cartesian", |b| {
        b.iter(|| homogeneous_to_cartesian(black_box(&hpt)));
    });
}

criterion_group!(benches, bench_binomial, bench_conversions);
criterion_main!(benches);
