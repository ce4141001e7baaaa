// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Shape generators producing triangle lists of [`SurfaceVertex`].

use core::f32::consts::{PI, TAU};

use squish_math::Vec3;

use crate::types::vertex::SurfaceVertex;

/// Default latitude band count used by scenes and fixtures.
pub const DEFAULT_STACKS: u32 = 12;
/// Default longitude segment count used by scenes and fixtures.
pub const DEFAULT_SLICES: u32 = 24;

/// Tessellated UV sphere centered at the origin, poles on ±Y.
///
/// Returns a triangle list (three vertices per triangle) with outward unit
/// normals and counter-clockwise winding seen from outside. Pole caps emit a
/// single triangle per slice, so the result holds `2·slices·(stacks − 1)`
/// triangles. An even `stacks` count places vertices exactly on the ±X/±Z
/// extremes.
///
/// Returns an empty list when `radius ≤ 0`, `stacks < 2` or `slices < 3`.
pub fn uv_sphere(radius: f32, stacks: u32, slices: u32) -> Vec<SurfaceVertex> {
    if !(radius > 0.0) || stacks < 2 || slices < 3 {
        return Vec::new();
    }
    let point = |stack: u32, slice: u32| {
        let phi = PI * stack as f32 / stacks as f32;
        let theta = TAU * (slice % slices) as f32 / slices as f32;
        let (sp, cp) = phi.sin_cos();
        let (st, ct) = theta.sin_cos();
        let normal = Vec3::new(sp * ct, cp, sp * st);
        SurfaceVertex::new(normal.scale(radius), normal)
    };

    let mut out = Vec::with_capacity((6 * slices * (stacks - 1)) as usize);
    for i in 0..stacks {
        for j in 0..slices {
            let p00 = point(i, j);
            let p01 = point(i, j + 1);
            let p10 = point(i + 1, j);
            let p11 = point(i + 1, j + 1);
            if i != 0 {
                out.extend([p00, p01, p11]);
            }
            if i != stacks - 1 {
                out.extend([p00, p11, p10]);
            }
        }
    }
    out
}
