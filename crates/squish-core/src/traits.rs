// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Capability traits shared by scene objects.
//!
//! Renderers consume [`Renderable`] without knowing whether an object is a
//! deformable body or a static volume. The scene runs its integration phase
//! through [`Updatable`] over the same objects.

use squish_geom::SurfaceVertex;
use squish_math::{Mat4, Vec3};

use crate::body::FfdBody;
use crate::visual::{box_line_list, control_point_transforms, CONTROL_MARKER_SCALE};

/// Something that advances with simulated time.
pub trait Updatable {
    /// Advance by `dt` seconds.
    fn update(&mut self, dt: f32);
}

/// Something a renderer can draw.
pub trait Renderable {
    /// Triangle list in model space. Empty for wireframe-only objects.
    fn vertices(&self) -> &[SurfaceVertex];

    /// Model-to-world transform for [`Renderable::vertices`].
    fn model_matrix(&self) -> Mat4;

    /// World-space line list (pairs of points) for debug overlays.
    fn debug_lines(&self) -> Vec<Vec3>;

    /// Per-instance transforms for debug markers (e.g. control points).
    fn instance_transforms(&self) -> Vec<Mat4> {
        Vec::new()
    }
}

impl Updatable for FfdBody {
    fn update(&mut self, dt: f32) {
        FfdBody::update(self, dt);
    }
}

impl Renderable for FfdBody {
    fn vertices(&self) -> &[SurfaceVertex] {
        FfdBody::vertices(self)
    }

    fn model_matrix(&self) -> Mat4 {
        let c = self.center();
        Mat4::translation(c.x(), c.y(), c.z())
    }

    fn debug_lines(&self) -> Vec<Vec3> {
        box_line_list(&self.world_box())
    }

    fn instance_transforms(&self) -> Vec<Mat4> {
        control_point_transforms(self, CONTROL_MARKER_SCALE)
    }
}
