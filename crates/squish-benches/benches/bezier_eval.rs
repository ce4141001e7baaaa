// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

// criterion_group!/criterion_main! expand to undocumented functions that cannot
// carry #[allow] (attributes on macro invocations are ignored). Crate-level
// suppress is required for benchmark binaries using Criterion.
#![allow(missing_docs)]
//! Bezier volume evaluation: reference vs contracted, and bulk throughput.
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use squish_benches::{jittered_lattice, parametric_cloud};
use squish_core::{evaluate, evaluate_bulk, evaluate_reference};
use squish_geom::SurfaceVertex;
use squish_math::Vec3;
use std::hint::black_box;

fn bench_single_point(c: &mut Criterion) {
    let lattice = jittered_lattice(0.3);
    let p = Vec3::new(0.3, 0.6, 0.9);
    let mut group = c.benchmark_group("bezier_point");
    group.bench_function("reference", |b| b.iter(|| evaluate_reference(black_box(&lattice), black_box(p))));
    group.bench_function("contracted", |b| b.iter(|| evaluate(black_box(&lattice), black_box(p))));
    group.finish();
}

fn bench_bulk(c: &mut Criterion) {
    let lattice = jittered_lattice(0.3);
    let mut group = c.benchmark_group("bezier_bulk");
    for &n in &[1_000usize, 10_000] {
        let params = parametric_cloud(n);
        let mut out = vec![SurfaceVertex::default(); n];
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &params, |b, params| {
            b.iter(|| {
                evaluate_bulk(black_box(&lattice), params, &mut out);
                black_box(&out);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_point, bench_bulk);
criterion_main!(benches);
