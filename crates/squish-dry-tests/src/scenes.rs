// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scene builder and canonical scenarios.

use squish_core::{BodyError, FfdBody, PhysicsParams, Scene};
use squish_geom::Aabb;
use squish_math::Vec3;

use crate::bodies::BodyBuilder;

/// Closing speed of each body in [`head_on_pair`].
pub const HEAD_ON_SPEED: f32 = 5.0;
/// Half extent of the room used by [`boundary_drop`].
pub const ROOM_HALF_EXTENT: f32 = 20.0;

/// Builder for [`Scene`] fixtures.
#[derive(Debug, Clone, Default)]
pub struct SceneBuilder {
    params: PhysicsParams,
    boundary: Option<Aabb>,
    bodies: Vec<BodyBuilder>,
}

impl SceneBuilder {
    /// Empty scene with default constants and no boundary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the physics constants (applied to every body).
    pub fn params(mut self, params: PhysicsParams) -> Self {
        self.params = params;
        self
    }

    /// Encloses the scene in a cube of the given half extent.
    pub fn room(mut self, half_extent: f32) -> Self {
        self.boundary = Some(Aabb::from_center_half_extents(
            Vec3::ZERO,
            half_extent,
            half_extent,
            half_extent,
        ));
        self
    }

    /// Adds a body.
    pub fn body(mut self, body: BodyBuilder) -> Self {
        self.bodies.push(body);
        self
    }

    /// Builds the scene.
    pub fn build(self) -> Result<Scene, BodyError> {
        let mut scene = Scene::new(self.params);
        if let Some(b) = self.boundary {
            scene = scene.with_boundary(b);
        }
        for body in self.bodies {
            let built: FfdBody = body.params(self.params).build()?;
            scene.add_body(built);
        }
        Ok(scene)
    }
}

/// Two unit spheres at `x = ∓3` closing at [`HEAD_ON_SPEED`] each.
pub fn head_on_pair() -> Result<Scene, BodyError> {
    SceneBuilder::new()
        .body(
            BodyBuilder::sphere(1.0)
                .at(Vec3::new(-3.0, 0.0, 0.0))
                .moving(Vec3::new(HEAD_ON_SPEED, 0.0, 0.0)),
        )
        .body(
            BodyBuilder::sphere(1.0)
                .at(Vec3::new(3.0, 0.0, 0.0))
                .moving(Vec3::new(-HEAD_ON_SPEED, 0.0, 0.0)),
        )
        .build()
}

/// One unit sphere falling at 10 units/s toward the floor of a
/// `[-20, 20]³` room.
pub fn boundary_drop() -> Result<Scene, BodyError> {
    SceneBuilder::new()
        .room(ROOM_HALF_EXTENT)
        .body(
            BodyBuilder::sphere(1.0)
                .at(Vec3::new(0.0, -15.0, 0.0))
                .moving(Vec3::new(0.0, -10.0, 0.0)),
        )
        .build()
}
