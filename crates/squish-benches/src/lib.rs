// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Shared setup for Squish benchmarks.

use squish_core::{ControlLattice, ParametricVertex};
use squish_math::{Prng, Vec3};

/// Regular lattice over a 2×2×2 box with every point jittered by up to
/// `amount` from a fixed seed.
pub fn jittered_lattice(amount: f32) -> ControlLattice {
    let mut rng = Prng::from_seed_u64(0x5157_1511);
    let mut lattice = ControlLattice::regular(Vec3::splat(2.0));
    for p in lattice.points_mut() {
        *p += rng.next_vec3(Vec3::splat(-amount), Vec3::splat(amount));
    }
    lattice
}

/// `n` parametric vertices spread over the unit cube from a fixed seed.
pub fn parametric_cloud(n: usize) -> Vec<ParametricVertex> {
    let mut rng = Prng::from_seed_u64(0xB0D1_E5E5);
    (0..n)
        .map(|_| {
            let coords = rng.next_vec3(Vec3::ZERO, Vec3::splat(1.0));
            ParametricVertex::new(coords, Vec3::UNIT_Y)
        })
        .collect()
}
