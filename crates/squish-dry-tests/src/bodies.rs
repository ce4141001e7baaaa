// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Body builder for tests.

use squish_core::{BodyError, FfdBody, PhysicsParams};
use squish_geom::{uv_sphere, SurfaceVertex, DEFAULT_SLICES, DEFAULT_STACKS};
use squish_math::Vec3;

use crate::surfaces::{box_surface, ellipsoid};

#[derive(Debug, Clone)]
enum Shape {
    Sphere { radius: f32, stacks: u32, slices: u32 },
    Ellipsoid(Vec3),
    Box(Vec3),
    Custom(Vec<SurfaceVertex>),
}

/// Builder for [`FfdBody`] fixtures.
///
/// # Example
///
/// ```
/// use squish_dry_tests::BodyBuilder;
/// use squish_math::Vec3;
///
/// let body = BodyBuilder::sphere(1.0)
///     .at(Vec3::new(-3.0, 0.0, 0.0))
///     .moving(Vec3::new(5.0, 0.0, 0.0))
///     .build();
/// assert!(body.is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct BodyBuilder {
    shape: Shape,
    center: Vec3,
    velocity: Vec3,
    params: PhysicsParams,
}

impl BodyBuilder {
    fn with_shape(shape: Shape) -> Self {
        Self {
            shape,
            center: Vec3::ZERO,
            velocity: Vec3::ZERO,
            params: PhysicsParams::default(),
        }
    }

    /// Sphere with the default tessellation.
    pub fn sphere(radius: f32) -> Self {
        Self::with_shape(Shape::Sphere {
            radius,
            stacks: DEFAULT_STACKS,
            slices: DEFAULT_SLICES,
        })
    }

    /// Ellipsoid with per-axis radii.
    pub fn ellipsoid(radii: Vec3) -> Self {
        Self::with_shape(Shape::Ellipsoid(radii))
    }

    /// Axis-aligned box with the given half extents.
    pub fn cuboid(half: Vec3) -> Self {
        Self::with_shape(Shape::Box(half))
    }

    /// Caller-supplied triangle list.
    pub fn surface(vertices: Vec<SurfaceVertex>) -> Self {
        Self::with_shape(Shape::Custom(vertices))
    }

    /// Overrides the sphere tessellation. Ignored for other shapes.
    pub fn tessellation(mut self, new_stacks: u32, new_slices: u32) -> Self {
        if let Shape::Sphere { stacks, slices, .. } = &mut self.shape {
            *stacks = new_stacks;
            *slices = new_slices;
        }
        self
    }

    /// Sets the center.
    pub fn at(mut self, center: Vec3) -> Self {
        self.center = center;
        self
    }

    /// Sets the initial velocity.
    pub fn moving(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets the physics constants.
    pub fn params(mut self, params: PhysicsParams) -> Self {
        self.params = params;
        self
    }

    /// Builds the body.
    pub fn build(self) -> Result<FfdBody, BodyError> {
        let surface = match self.shape {
            Shape::Sphere { radius, stacks, slices } => uv_sphere(radius, stacks, slices),
            Shape::Ellipsoid(radii) => ellipsoid(radii),
            Shape::Box(half) => box_surface(half),
            Shape::Custom(vertices) => vertices,
        };
        Ok(FfdBody::new(self.center, &surface, &self.params)?.with_velocity(self.velocity))
    }
}
