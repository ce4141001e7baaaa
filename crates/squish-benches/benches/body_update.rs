// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

// criterion_group!/criterion_main! expand to undocumented functions that cannot
// carry #[allow] (attributes on macro invocations are ignored). Crate-level
// suppress is required for benchmark binaries using Criterion.
#![allow(missing_docs)]
//! One `FfdBody::update` per iteration across tessellations.
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use squish_core::FfdBody;
use squish_dry_tests::BodyBuilder;
use squish_math::Vec3;
use std::hint::black_box;

const DT: f32 = 1.0 / 60.0;

fn sphere(stacks: u32, slices: u32) -> Option<FfdBody> {
    BodyBuilder::sphere(1.0).tessellation(stacks, slices).build().ok()
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("body_update");
    for &(stacks, slices) in &[(8u32, 16u32), (12, 24), (32, 64)] {
        let Some(body) = sphere(stacks, slices) else {
            continue;
        };
        group.throughput(Throughput::Elements(body.vertices().len() as u64));
        group.bench_with_input(BenchmarkId::new("rest", body.vertices().len()), &body, |b, body| {
            b.iter_batched(
                || body.clone(),
                |mut body| {
                    body.update(DT);
                    black_box(body)
                },
                BatchSize::SmallInput,
            );
        });
        let mut dented = body.clone();
        dented.nudge_control_point(13, Vec3::new(0.3, 0.1, 0.0));
        dented.apply_control_velocity_change(4, Vec3::new(0.0, 2.0, 0.0));
        group.bench_with_input(BenchmarkId::new("dented", body.vertices().len()), &dented, |b, body| {
            b.iter_batched(
                || body.clone(),
                |mut body| {
                    body.update(DT);
                    black_box(body)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
