// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! JSON scene configuration.
//!
//! A config names the physics constants, the boundary, explicit bodies and
//! optionally a seeded batch of random spheres. Every field has a default,
//! so `{}` is a valid config describing the stock head-on demo.

use std::path::Path;

use serde::{Deserialize, Serialize};
use squish_geom::{uv_sphere, Aabb, DEFAULT_SLICES, DEFAULT_STACKS};
use squish_math::{Prng, Vec3};
use tracing::info;

use crate::body::FfdBody;
use crate::error::ConfigError;
use crate::params::PhysicsParams;
use crate::scene::Scene;

/// One explicitly placed sphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BodySpec {
    /// World-space center.
    pub center: Vec3,
    /// Initial whole-body velocity.
    pub velocity: Vec3,
    /// Sphere radius.
    pub radius: f32,
    /// Latitude bands.
    pub stacks: u32,
    /// Longitude segments.
    pub slices: u32,
}

impl Default for BodySpec {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            velocity: Vec3::ZERO,
            radius: 1.0,
            stacks: DEFAULT_STACKS,
            slices: DEFAULT_SLICES,
        }
    }
}

/// Static boundary box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundarySpec {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

/// Seeded batch of random spheres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RandomBodies {
    /// How many spheres to spawn.
    pub count: usize,
    /// Radius of every sphere.
    pub radius: f32,
    /// Largest velocity component magnitude.
    pub max_speed: f32,
}

impl Default for RandomBodies {
    fn default() -> Self {
        Self {
            count: 8,
            radius: 1.0,
            max_speed: 5.0,
        }
    }
}

/// Complete scene description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Seed for the random batch.
    pub seed: u64,
    /// Fixed timestep in seconds.
    pub dt: f32,
    /// Steps to run.
    pub ticks: u64,
    /// Physics constants.
    pub physics: PhysicsParams,
    /// Enclosing box, if any.
    pub boundary: Option<BoundarySpec>,
    /// Explicit bodies, added first in listed order.
    pub bodies: Vec<BodySpec>,
    /// Random bodies, added after the explicit ones.
    pub random: Option<RandomBodies>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            dt: 1.0 / 60.0,
            ticks: 240,
            physics: PhysicsParams::default(),
            boundary: Some(BoundarySpec {
                min: Vec3::splat(-20.0),
                max: Vec3::splat(20.0),
            }),
            bodies: vec![
                BodySpec {
                    center: Vec3::new(-3.0, 0.0, 0.0),
                    velocity: Vec3::new(5.0, 0.0, 0.0),
                    ..BodySpec::default()
                },
                BodySpec {
                    center: Vec3::new(3.0, 0.0, 0.0),
                    velocity: Vec3::new(-5.0, 0.0, 0.0),
                    ..BodySpec::default()
                },
            ],
            random: None,
        }
    }
}

impl SceneConfig {
    /// Parses and validates JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_json_slice(&bytes)
    }

    /// Pretty JSON for this config.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        if !(self.dt > 0.0) || !self.dt.is_finite() {
            return Err(ConfigError::Invalid(format!("dt must be positive and finite, got {}", self.dt)));
        }
        if let Some(b) = &self.boundary {
            let ok = (0..3).all(|axis| b.min.component(axis) < b.max.component(axis));
            if !ok || !b.min.is_finite() || !b.max.is_finite() {
                return Err(ConfigError::Invalid("boundary min must be below max on every axis".into()));
            }
        }
        for (index, body) in self.bodies.iter().enumerate() {
            if !(body.radius > 0.0) || body.stacks < 2 || body.slices < 3 {
                return Err(ConfigError::Invalid(format!(
                    "body {index}: need radius > 0, stacks ≥ 2, slices ≥ 3"
                )));
            }
        }
        if let Some(r) = &self.random {
            if !(r.radius > 0.0) || !r.max_speed.is_finite() {
                return Err(ConfigError::Invalid("random: radius must be positive, max_speed finite".into()));
            }
        }
        Ok(())
    }

    /// Builds the scene this config describes.
    ///
    /// Random spheres spawn inside the boundary, or inside a 20-unit cube
    /// around the origin when there is none.
    pub fn build_scene(&self) -> Result<Scene, ConfigError> {
        self.validate()?;
        let mut scene = Scene::new(self.physics);
        let region = match &self.boundary {
            Some(b) => {
                let aabb = Aabb::new(b.min, b.max);
                scene = scene.with_boundary(aabb);
                aabb
            }
            None => Aabb::from_center_half_extents(Vec3::ZERO, 10.0, 10.0, 10.0),
        };
        for (index, spec) in self.bodies.iter().enumerate() {
            let surface = uv_sphere(spec.radius, spec.stacks, spec.slices);
            let body = FfdBody::new(spec.center, &surface, &self.physics)
                .map_err(|source| ConfigError::Body { index, source })?
                .with_velocity(spec.velocity);
            scene.add_body(body);
        }
        if let Some(r) = &self.random {
            let mut rng = Prng::from_seed_u64(self.seed);
            scene
                .spawn_spheres(&mut rng, r.count, r.radius, &region, r.max_speed)
                .map_err(|source| ConfigError::Body {
                    index: self.bodies.len(),
                    source,
                })?;
        }
        info!(
            bodies = scene.bodies().len(),
            boundary = self.boundary.is_some(),
            seed = self.seed,
            "scene built"
        );
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn empty_object_is_the_default_demo() {
        let config = SceneConfig::from_json_slice(b"{}").unwrap();
        assert_eq!(config, SceneConfig::default());
        let scene = config.build_scene().unwrap();
        assert_eq!(scene.bodies().len(), 2);
        assert!(scene.boundary().is_some());
    }

    #[test]
    fn vectors_are_plain_arrays() {
        let json = br#"{
            "boundary": null,
            "bodies": [{ "center": [1.0, 2.0, 3.0], "velocity": [0.0, -1.0, 0.0], "radius": 0.5 }]
        }"#;
        let config = SceneConfig::from_json_slice(json).unwrap();
        assert_eq!(config.bodies[0].center, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(config.bodies[0].stacks, DEFAULT_STACKS);
        let scene = config.build_scene().unwrap();
        assert!(scene.boundary().is_none());
        assert_eq!(scene.bodies()[0].velocity(), Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn random_batch_follows_explicit_bodies() {
        let config = SceneConfig {
            random: Some(RandomBodies {
                count: 3,
                ..RandomBodies::default()
            }),
            seed: 42,
            ..SceneConfig::default()
        };
        let scene = config.build_scene().unwrap();
        assert_eq!(scene.bodies().len(), 5);
        let again = config.build_scene().unwrap();
        assert_eq!(scene.bodies()[4].center(), again.bodies()[4].center());
    }

    #[test]
    fn bad_values_are_reported() {
        assert!(matches!(
            SceneConfig::from_json_slice(br#"{"dt": 0.0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SceneConfig::from_json_slice(br#"{"boundary": {"min": [1,1,1], "max": [0,2,2]}}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SceneConfig::from_json_slice(br#"{"tick": 3}"#),
            Err(ConfigError::Serde(_))
        ));
        assert!(matches!(SceneConfig::load("/definitely/not/here.json"), Err(ConfigError::Io(_))));
    }
}
