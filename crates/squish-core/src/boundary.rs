// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Static boundary volume.

use squish_geom::{Aabb, SurfaceVertex};
use squish_math::{Mat4, Vec3};

use crate::body::FfdBody;
use crate::params::PhysicsParams;
use crate::resolve::{resolve_collision_interior, BoundaryOutcome};
use crate::traits::{Renderable, Updatable};
use crate::visual::box_line_list;

/// The static box bodies are kept inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryVolume {
    aabb: Aabb,
}

impl BoundaryVolume {
    /// Wraps a world-space box.
    pub const fn new(aabb: Aabb) -> Self {
        Self { aabb }
    }

    /// The box.
    pub const fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Keeps `body` inside this volume (see
    /// [`resolve_collision_interior`](crate::resolve_collision_interior)).
    pub fn contain(&self, body: &mut FfdBody, params: &PhysicsParams) -> BoundaryOutcome {
        resolve_collision_interior(body, &self.aabb, params)
    }
}

impl Updatable for BoundaryVolume {
    // Static.
    fn update(&mut self, _dt: f32) {}
}

impl Renderable for BoundaryVolume {
    fn vertices(&self) -> &[SurfaceVertex] {
        &[]
    }

    fn model_matrix(&self) -> Mat4 {
        Mat4::identity()
    }

    fn debug_lines(&self) -> Vec<Vec3> {
        box_line_list(&self.aabb)
    }
}
