// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! The contracted evaluator must agree with the straight triple sum on
//! arbitrary bent lattices.

use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};
use squish_core::bezier::evaluate_reference_derivative;
use squish_core::{
    evaluate, evaluate_bulk, evaluate_reference, evaluate_with_frame, ControlLattice, ParametricVertex,
    CONTROL_POINTS,
};
use squish_geom::SurfaceVertex;
use squish_math::Vec3;

const TOLERANCE: f32 = 1e-4;

fn bent_lattice(span: [f32; 3], offsets: &[[f32; 3]]) -> ControlLattice {
    let mut lattice = ControlLattice::regular(Vec3::from(span));
    for (idx, off) in offsets.iter().enumerate() {
        lattice[idx] += Vec3::from(*off);
    }
    lattice
}

fn lattice_strategy() -> impl Strategy<Value = ControlLattice> {
    (
        prop::array::uniform3(0.5f32..4.0),
        prop::collection::vec(prop::array::uniform3(-0.4f32..0.4), CONTROL_POINTS),
    )
        .prop_map(|(span, offsets)| bent_lattice(span, &offsets))
}

#[test]
fn fast_path_agrees_with_reference_pinned_seed() {
    const SEED_BYTES: [u8; 32] = [
        0x5a, 0x17, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0,
    ];
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    let mut runner = TestRunner::new_with_rng(PropConfig::default(), rng);
    let strategy = (lattice_strategy(), prop::array::uniform3(0.0f32..=1.0));

    let result = runner.run(&strategy, |(lattice, p)| {
        let p = Vec3::from(p);
        let fast = evaluate(&lattice, p);
        let slow = evaluate_reference(&lattice, p);
        for axis in 0..3 {
            prop_assert!(
                (fast.component(axis) - slow.component(axis)).abs() <= TOLERANCE,
                "axis {axis}: {fast:?} vs {slow:?}"
            );
        }

        let (framed, frame) = evaluate_with_frame(&lattice, p);
        prop_assert_eq!(framed, fast);
        for axis in 0..3 {
            let reference = evaluate_reference_derivative(&lattice, p, axis);
            if reference.length() > 0.1 {
                let want = reference.normalize();
                prop_assert!(frame.col(axis).distance_squared(&want) <= 1e-6, "axis {axis}");
            }
        }
        Ok(())
    });
    assert!(result.is_ok(), "{result:?}");
}

proptest! {
    #[test]
    fn bulk_pass_matches_per_vertex_pass(
        lattice in lattice_strategy(),
        coords in prop::collection::vec(prop::array::uniform3(0.0f32..=1.0), 1..40),
    ) {
        let params: Vec<ParametricVertex> = coords
            .iter()
            .map(|c| ParametricVertex::new(Vec3::from(*c), Vec3::UNIT_Z))
            .collect();
        let mut out = vec![SurfaceVertex::default(); params.len()];
        evaluate_bulk(&lattice, &params, &mut out);
        for (v, p) in out.iter().zip(&params) {
            let slow = evaluate_reference(&lattice, p.coords);
            prop_assert!(v.position.distance_squared(&slow) <= TOLERANCE * TOLERANCE);
        }
    }
}
