// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Free-form-deformation soft body.
//!
//! A body owns a 27-point control lattice expressed relative to its center.
//! Every surface vertex is bound once to lattice-local coordinates; each tick
//! the control points relax toward rest as damped springs and the surface is
//! re-evaluated from the bent lattice. The world-space triangle soup used for
//! collision (`physx`) is the evaluated surface offset by the center.
//!
//! Invariants:
//! - `vertices.len() == parametric.len() == physx.len()`, a multiple of three.
//! - `|lattice[i] − rest_position(i)| ≤ restsize · clamp_ratio` after every
//!   update.
//! - An undisturbed body keeps its lattice bit-identical to rest.

use squish_geom::{Aabb, SurfaceVertex};
use squish_math::{clamp, Vec3, EPSILON};
use tracing::debug;

use crate::bezier::{evaluate_bulk, ParametricVertex};
use crate::error::BodyError;
use crate::lattice::{ControlLattice, CONTROL_POINTS};
use crate::params::PhysicsParams;
use crate::spring::SpringDamper;

/// A deformable body.
#[derive(Debug, Clone)]
pub struct FfdBody {
    lattice: ControlLattice,
    rest: ControlLattice,
    origin: Vec3,
    control_velocities: [Vec3; CONTROL_POINTS],
    center: Vec3,
    velocity: Vec3,
    local_box: Aabb,
    restsize: f32,
    clamp_ratio: f32,
    drag: f32,
    spring: SpringDamper,
    parametric: Vec<ParametricVertex>,
    vertices: Vec<SurfaceVertex>,
    physx: Vec<Vec3>,
}

impl FfdBody {
    /// Builds a body at `center` from a center-relative triangle list.
    ///
    /// The lattice is fitted to the surface's bounding box: point `(i, j, k)`
    /// rests at `min + (i, j, k)/2 ⊙ span`. Each vertex's lattice-local
    /// coordinates are `(position − min) / span`.
    pub fn new(center: Vec3, surface: &[SurfaceVertex], params: &PhysicsParams) -> Result<Self, BodyError> {
        if surface.is_empty() {
            return Err(BodyError::EmptyMesh);
        }
        if surface.len() % 3 != 0 {
            return Err(BodyError::NotTriangulated { len: surface.len() });
        }
        if !center.is_finite() || surface.iter().any(|v| !v.position.is_finite() || !v.normal.is_finite()) {
            return Err(BodyError::NonFiniteInput);
        }
        let positions: Vec<Vec3> = surface.iter().map(|v| v.position).collect();
        let bounds = Aabb::from_points(&positions).ok_or(BodyError::EmptyMesh)?;
        let span = bounds.extent();
        if (0..3).any(|axis| span.component(axis) <= EPSILON) {
            return Err(BodyError::DegenerateExtent { span: span.to_array() });
        }

        let origin = bounds.min();
        let rest = ControlLattice::regular(span);
        let parametric = surface
            .iter()
            .map(|v| {
                let local = v.position.sub(&origin).div_elements(&span);
                let coords = Vec3::new(
                    clamp(local.x(), 0.0, 1.0),
                    clamp(local.y(), 0.0, 1.0),
                    clamp(local.z(), 0.0, 1.0),
                );
                ParametricVertex::new(coords, v.normal.normalize())
            })
            .collect();

        let mut body = Self {
            lattice: rest.translated(origin),
            rest,
            origin,
            control_velocities: [Vec3::ZERO; CONTROL_POINTS],
            center,
            velocity: Vec3::ZERO,
            local_box: bounds,
            restsize: span.length(),
            clamp_ratio: params.clamp_ratio,
            drag: params.drag,
            spring: params.spring(),
            parametric,
            vertices: surface.to_vec(),
            physx: vec![Vec3::ZERO; surface.len()],
        };
        body.refresh();
        debug!(
            vertices = body.vertices.len(),
            restsize = body.restsize,
            center = ?body.center.to_array(),
            "ffd body built"
        );
        Ok(body)
    }

    /// Same body with an initial whole-body velocity.
    #[must_use]
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Rest position of control point `idx`, relative to the center.
    #[inline]
    pub fn rest_position(&self, idx: usize) -> Vec3 {
        self.origin + self.rest[idx]
    }

    /// Advances the body by `dt` seconds.
    ///
    /// Order: spring-integrate and clamp every control point, apply drag to
    /// the whole-body velocity, move the center, then recompute the box,
    /// the evaluated surface and the world-space collision triangles.
    /// Non-positive or non-finite `dt` leaves the body untouched.
    pub fn update(&mut self, dt: f32) {
        if !(dt > 0.0) || !dt.is_finite() {
            return;
        }
        let step = self.spring.coefficients(dt);
        let limit = self.restsize * self.clamp_ratio;
        for idx in 0..CONTROL_POINTS {
            let rest = self.rest_position(idx);
            let (mut disp, vel) = step.apply(self.displacement(idx), self.control_velocities[idx]);
            let len = disp.length();
            if len > limit {
                disp = disp.scale(limit / len);
            }
            self.lattice[idx] = rest + disp;
            self.control_velocities[idx] = vel;
        }
        self.velocity += self.velocity.scale(-self.drag) * dt;
        self.center += self.velocity * dt;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.local_box = self.lattice.bounds();
        evaluate_bulk(&self.lattice, &self.parametric, &mut self.vertices);
        let center = self.center;
        for (slot, v) in self.physx.iter_mut().zip(&self.vertices) {
            *slot = v.position + center;
        }
    }

    /// Center in world space.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Whole-body velocity.
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Overwrites the whole-body velocity.
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Adds `delta` to the whole-body velocity.
    pub fn apply_velocity_change(&mut self, delta: Vec3) {
        self.velocity += delta;
    }

    /// Moves the body (center and collision triangles) by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        self.center += offset;
        for p in &mut self.physx {
            *p += offset;
        }
    }

    /// Control lattice relative to the center.
    pub fn lattice(&self) -> &ControlLattice {
        &self.lattice
    }

    /// Rest configuration relative to the rest box's minimum corner.
    pub fn rest_lattice(&self) -> &ControlLattice {
        &self.rest
    }

    /// Displacement of control point `idx` from its rest position.
    pub fn displacement(&self, idx: usize) -> Vec3 {
        self.lattice[idx] - self.rest_position(idx)
    }

    /// All control-point velocities in lattice order.
    pub fn control_velocities(&self) -> &[Vec3; CONTROL_POINTS] {
        &self.control_velocities
    }

    /// Velocity of control point `idx`.
    pub fn control_velocity(&self, idx: usize) -> Vec3 {
        self.control_velocities[idx]
    }

    /// Adds `delta` to control point `idx`'s velocity.
    pub fn apply_control_velocity_change(&mut self, idx: usize, delta: Vec3) {
        self.control_velocities[idx] += delta;
    }

    /// Displaces control point `idx` by `offset` from its current position.
    /// The next update clamps and relaxes it like any other displacement.
    pub fn nudge_control_point(&mut self, idx: usize, offset: Vec3) {
        self.lattice[idx] += offset;
    }

    /// Index of the control point nearest to a world-space point.
    pub fn closest_control_point(&self, world: &Vec3) -> usize {
        self.lattice.closest_to(&world.sub(&self.center))
    }

    /// Control-point box relative to the center; contains the surface.
    pub fn local_box(&self) -> Aabb {
        self.local_box
    }

    /// Control-point box in world space.
    pub fn world_box(&self) -> Aabb {
        self.local_box.translated(self.center)
    }

    /// Diagonal length of the rest box.
    pub fn restsize(&self) -> f32 {
        self.restsize
    }

    /// Largest allowed control-point displacement from rest.
    pub fn displacement_limit(&self) -> f32 {
        self.restsize * self.clamp_ratio
    }

    /// Evaluated surface relative to the center.
    pub fn vertices(&self) -> &[SurfaceVertex] {
        &self.vertices
    }

    /// Lattice-local coordinates of every surface vertex.
    pub fn parametric_vertices(&self) -> &[ParametricVertex] {
        &self.parametric
    }

    /// World-space collision triangle soup.
    pub fn physx_triangles(&self) -> &[Vec3] {
        &self.physx
    }

    /// `true` when every control point sits exactly at rest and is still.
    pub fn is_at_rest(&self) -> bool {
        (0..CONTROL_POINTS)
            .all(|idx| self.lattice[idx] == self.rest_position(idx) && self.control_velocities[idx] == Vec3::ZERO)
    }
}
