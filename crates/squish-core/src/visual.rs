// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Debug-visual helpers: control-point marker instances and box wireframes.

use squish_geom::Aabb;
use squish_math::{Mat4, Vec3};

use crate::body::FfdBody;
use crate::lattice::CONTROL_POINTS;

/// Default uniform scale of a control-point marker.
pub const CONTROL_MARKER_SCALE: f32 = 0.05;

/// One world transform per control point: translate to the point, scale the
/// unit marker by `marker_scale`.
pub fn control_point_transforms(body: &FfdBody, marker_scale: f32) -> Vec<Mat4> {
    let center = body.center();
    (0..CONTROL_POINTS)
        .map(|idx| Mat4::from_translation_scale(body.lattice()[idx] + center, marker_scale))
        .collect()
}

/// Line list (12 edges, 24 points) outlining `aabb`.
pub fn box_line_list(aabb: &Aabb) -> Vec<Vec3> {
    aabb.edge_lines()
}
