// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scene: an ordered set of bodies, an optional boundary, and the tick loop.
//!
//! One [`Scene::step`] runs three phases in a fixed order so identical
//! scenes replay identically:
//! 1. every unordered body pair `(i, j)` with `i < j`, in index order, goes
//!    through [`resolve_collision`];
//! 2. every body, in index order, is contained by the boundary;
//! 3. every [`Updatable`] (bodies, then the boundary) advances by `dt`.

use squish_geom::{uv_sphere, Aabb, DEFAULT_SLICES, DEFAULT_STACKS};
use squish_math::{Prng, Vec3};
use tracing::{debug, instrument};

use crate::body::FfdBody;
use crate::boundary::BoundaryVolume;
use crate::error::BodyError;
use crate::params::PhysicsParams;
use crate::resolve::resolve_collision;
use crate::traits::{Renderable, Updatable};

/// Per-step counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Tick number this report belongs to (zero-based).
    pub tick: u64,
    /// Body pairs that went through detection.
    pub pairs_checked: usize,
    /// Body pairs that received impulses.
    pub body_collisions: usize,
    /// Bodies reflected off the boundary.
    pub boundary_collisions: usize,
    /// Clustered contacts across all resolved body pairs.
    pub contacts: usize,
}

/// A simulated world.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    params: PhysicsParams,
    bodies: Vec<FfdBody>,
    boundary: Option<BoundaryVolume>,
    tick: u64,
}

impl Scene {
    /// Empty scene with the given constants.
    pub fn new(params: PhysicsParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Same scene enclosed by `boundary`.
    #[must_use]
    pub fn with_boundary(mut self, boundary: Aabb) -> Self {
        self.boundary = Some(BoundaryVolume::new(boundary));
        self
    }

    /// Physics constants.
    pub fn params(&self) -> &PhysicsParams {
        &self.params
    }

    /// Boundary volume, when set.
    pub fn boundary(&self) -> Option<&BoundaryVolume> {
        self.boundary.as_ref()
    }

    /// Appends a body and returns its index.
    pub fn add_body(&mut self, body: FfdBody) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// All bodies in index order.
    pub fn bodies(&self) -> &[FfdBody] {
        &self.bodies
    }

    /// Body at `idx`.
    pub fn body(&self, idx: usize) -> Option<&FfdBody> {
        self.bodies.get(idx)
    }

    /// Mutable body at `idx`.
    pub fn body_mut(&mut self, idx: usize) -> Option<&mut FfdBody> {
        self.bodies.get_mut(idx)
    }

    /// Number of completed steps.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Spawns `count` spheres of `radius` at random centers inside `region`
    /// (shrunk by the radius where it fits) with velocity components drawn
    /// from `[−max_speed, max_speed)`. Returns the new indices.
    ///
    /// The caller owns the generator, so a given seed always yields the same
    /// scene.
    pub fn spawn_spheres(
        &mut self,
        rng: &mut Prng,
        count: usize,
        radius: f32,
        region: &Aabb,
        max_speed: f32,
    ) -> Result<Vec<usize>, BodyError> {
        let surface = uv_sphere(radius, DEFAULT_STACKS, DEFAULT_SLICES);
        let (lo, hi) = (region.min() + Vec3::splat(radius), region.max() - Vec3::splat(radius));
        let mid = region.center();
        let mut pick_lo = lo;
        let mut pick_hi = hi;
        for axis in 0..3 {
            if lo.component(axis) > hi.component(axis) {
                pick_lo = pick_lo.with_component(axis, mid.component(axis));
                pick_hi = pick_hi.with_component(axis, mid.component(axis));
            }
        }
        let speed = Vec3::splat(max_speed.abs());
        let mut spawned = Vec::with_capacity(count);
        for _ in 0..count {
            let center = rng.next_vec3(pick_lo, pick_hi);
            let velocity = rng.next_vec3(-speed, speed);
            let body = FfdBody::new(center, &surface, &self.params)?.with_velocity(velocity);
            spawned.push(self.add_body(body));
        }
        debug!(count, radius, "spawned spheres");
        Ok(spawned)
    }

    /// Advances the scene by `dt` seconds.
    #[instrument(level = "debug", skip(self), fields(tick = self.tick, bodies = self.bodies.len()))]
    pub fn step(&mut self, dt: f32) -> StepReport {
        let mut report = StepReport {
            tick: self.tick,
            ..StepReport::default()
        };

        for i in 0..self.bodies.len() {
            let (head, tail) = self.bodies.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                report.pairs_checked += 1;
                let outcome = resolve_collision(a, b, &self.params);
                if outcome.is_resolved() {
                    report.body_collisions += 1;
                    report.contacts += outcome.contact_count();
                }
            }
        }

        if let Some(boundary) = &self.boundary {
            for body in &mut self.bodies {
                if boundary.contain(body, &self.params).is_resolved() {
                    report.boundary_collisions += 1;
                }
            }
        }

        for item in self.updatables_mut() {
            item.update(dt);
        }

        self.tick += 1;
        if report.body_collisions + report.boundary_collisions > 0 {
            debug!(
                body_collisions = report.body_collisions,
                boundary_collisions = report.boundary_collisions,
                contacts = report.contacts,
                "step resolved contacts"
            );
        }
        report
    }

    /// Everything that advances with time, bodies first, then the boundary.
    pub fn updatables_mut(&mut self) -> Vec<&mut dyn Updatable> {
        let mut out: Vec<&mut dyn Updatable> = self.bodies.iter_mut().map(|b| b as &mut dyn Updatable).collect();
        if let Some(boundary) = &mut self.boundary {
            out.push(boundary);
        }
        out
    }

    /// Everything a renderer should draw: bodies first, then the boundary.
    pub fn renderables(&self) -> Vec<&dyn Renderable> {
        let mut out: Vec<&dyn Renderable> = self.bodies.iter().map(|b| b as &dyn Renderable).collect();
        if let Some(boundary) = &self.boundary {
            out.push(boundary);
        }
        out
    }

    /// Sum of whole-body velocities (every body has unit mass).
    pub fn total_momentum(&self) -> Vec3 {
        self.bodies.iter().fold(Vec3::ZERO, |acc, b| acc + b.velocity())
    }
}
