// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Extra triangle-list surfaces.

use squish_geom::{uv_sphere, SurfaceVertex, DEFAULT_SLICES, DEFAULT_STACKS};
use squish_math::Vec3;

/// Axis-aligned box centered at the origin: 12 outward-wound triangles with
/// flat face normals.
pub fn box_surface(half: Vec3) -> Vec<SurfaceVertex> {
    let mut out = Vec::with_capacity(36);
    for axis in 0..3 {
        let (u, v) = ((axis + 1) % 3, (axis + 2) % 3);
        for sign in [-1.0_f32, 1.0] {
            let normal = Vec3::ZERO.with_component(axis, sign);
            let corner = |a: f32, b: f32| {
                Vec3::ZERO
                    .with_component(axis, sign * half.component(axis))
                    .with_component(u, a * half.component(u))
                    .with_component(v, b * half.component(v))
            };
            let quad = [corner(-1.0, -1.0), corner(1.0, -1.0), corner(1.0, 1.0), corner(-1.0, 1.0)];
            // (u, v, axis) is right-handed, so counter-clockwise in (u, v)
            // faces +axis; flip for the negative face.
            let order: [usize; 6] = if sign > 0.0 { [0, 1, 2, 0, 2, 3] } else { [0, 2, 1, 0, 3, 2] };
            out.extend(order.iter().map(|&i| SurfaceVertex::new(quad[i], normal)));
        }
    }
    out
}

/// UV sphere stretched by `radii`; normals follow the stretch.
pub fn ellipsoid(radii: Vec3) -> Vec<SurfaceVertex> {
    let inv = Vec3::new(1.0 / radii.x(), 1.0 / radii.y(), 1.0 / radii.z());
    uv_sphere(1.0, DEFAULT_STACKS, DEFAULT_SLICES)
        .into_iter()
        .map(|v| SurfaceVertex::new(v.position.hadamard(&radii), v.normal.hadamard(&inv).normalize()))
        .collect()
}
