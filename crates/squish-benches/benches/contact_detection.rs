// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

// criterion_group!/criterion_main! expand to undocumented functions that cannot
// carry #[allow] (attributes on macro invocations are ignored). Crate-level
// suppress is required for benchmark binaries using Criterion.
#![allow(missing_docs)]
//! Broad + narrow phase on sphere pairs, and a full scene step at impact.
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use squish_core::FfdBody;
use squish_dry_tests::{head_on_pair, BodyBuilder};
use squish_geom::detect_contacts;
use squish_math::Vec3;
use std::hint::black_box;

fn pair(gap: f32) -> Option<(FfdBody, FfdBody)> {
    let a = BodyBuilder::sphere(1.0).at(Vec3::new(-gap, 0.0, 0.0)).build().ok()?;
    let b = BodyBuilder::sphere(1.0).at(Vec3::new(gap, 0.0, 0.0)).build().ok()?;
    Some((a, b))
}

fn bench_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("contact_detection");
    for (label, gap) in [("overlapping", 0.9_f32), ("disjoint", 3.0)] {
        let Some((a, b)) = pair(gap) else {
            continue;
        };
        group.bench_function(label, |bench| {
            bench.iter(|| {
                black_box(detect_contacts(
                    a.physx_triangles(),
                    &a.world_box(),
                    b.physx_triangles(),
                    &b.world_box(),
                ))
            });
        });
    }
    group.finish();
}

fn bench_scene_step(c: &mut Criterion) {
    let Ok(mut scene) = head_on_pair() else {
        return;
    };
    // Advance to just before impact so every measured step resolves contacts.
    for _ in 0..24 {
        scene.step(1.0 / 60.0);
    }
    c.bench_function("scene_step_at_impact", |b| {
        b.iter_batched(
            || scene.clone(),
            |mut scene| black_box(scene.step(1.0 / 60.0)),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_detection, bench_scene_step);
criterion_main!(benches);
