// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Tunable physics constants.
//!
//! Every field has a serde default so configs only need to name the values
//! they change.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::spring::SpringDamper;

/// Constants shared by the integrator and both collision resolvers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhysicsParams {
    /// Control-point spring natural angular frequency (rad/s).
    pub omega: f32,
    /// Control-point spring damping ratio.
    pub eta: f32,
    /// Linear drag coefficient on whole-body velocity (1/s).
    pub drag: f32,
    /// Restitution for body/body and body/boundary contacts.
    pub restitution: f32,
    /// Share of the normal impulse each body receives as a whole-body
    /// velocity change.
    pub body_impulse_share: f32,
    /// Scale of the impulse distributed to control points near contacts.
    pub local_impulse_multiplier: f32,
    /// Distance each body is pushed apart along the contact normal.
    pub separation: f32,
    /// Distance a body is pushed away from the boundary after a bounce.
    pub wall_separation: f32,
    /// Scale of the inward kick given to control points near a wall contact.
    pub wall_impulse_multiplier: f32,
    /// Contact clustering radius.
    pub contact_radius: f32,
    /// Maximum control-point displacement as a fraction of the rest-box
    /// diagonal.
    pub clamp_ratio: f32,
    /// Distance within which a boundary face counts as touched.
    pub face_tolerance: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            omega: 12.0,
            eta: 0.35,
            drag: 0.05,
            restitution: 0.9,
            body_impulse_share: 0.5,
            local_impulse_multiplier: 2.0,
            separation: 0.02,
            wall_separation: 0.02,
            wall_impulse_multiplier: 0.5,
            contact_radius: squish_geom::DEFAULT_CONTACT_RADIUS,
            clamp_ratio: 0.48,
            face_tolerance: 1e-4,
        }
    }
}

impl PhysicsParams {
    /// Spring used for every control point.
    pub fn spring(&self) -> SpringDamper {
        SpringDamper::new(self.omega, self.eta)
    }

    /// Checks ranges. Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("omega", self.omega),
            ("eta", self.eta),
            ("drag", self.drag),
            ("restitution", self.restitution),
            ("body_impulse_share", self.body_impulse_share),
            ("local_impulse_multiplier", self.local_impulse_multiplier),
            ("separation", self.separation),
            ("wall_separation", self.wall_separation),
            ("wall_impulse_multiplier", self.wall_impulse_multiplier),
            ("contact_radius", self.contact_radius),
            ("clamp_ratio", self.clamp_ratio),
            ("face_tolerance", self.face_tolerance),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be finite")));
            }
            if value < 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be non-negative, got {value}")));
            }
        }
        if self.omega <= 0.0 {
            return Err(ConfigError::Invalid("omega must be positive".into()));
        }
        if self.restitution > 1.0 {
            return Err(ConfigError::Invalid(format!(
                "restitution must be in [0, 1], got {}",
                self.restitution
            )));
        }
        if self.clamp_ratio <= 0.0 || self.clamp_ratio >= 0.5 {
            return Err(ConfigError::Invalid(format!(
                "clamp_ratio must be in (0, 0.5), got {}",
                self.clamp_ratio
            )));
        }
        Ok(())
    }
}
