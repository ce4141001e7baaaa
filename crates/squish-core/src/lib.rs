// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! squish-core: free-form-deformation soft bodies and their collision
//! response.
//!
//! - [`FfdBody`] binds a triangle surface to a 3×3×3 quadratic Bezier
//!   lattice and relaxes the lattice with closed-form damped springs.
//! - [`resolve_collision`] and [`resolve_collision_interior`] apply impulses
//!   for body/body and body/boundary contacts.
//! - [`Scene`] orders collision, containment and integration per tick.
//! - [`SceneConfig`] loads all of the above from JSON.
//!
//! Nothing here owns global state; randomness enters only through an
//! explicit [`squish_math::Prng`].
#![forbid(unsafe_code)]

pub mod bezier;
mod body;
mod boundary;
mod config;
mod error;
pub mod lattice;
mod params;
mod resolve;
mod scene;
pub mod spring;
mod traits;
pub mod visual;

pub use bezier::{evaluate, evaluate_bulk, evaluate_reference, evaluate_with_frame, ParametricVertex};
pub use body::FfdBody;
pub use boundary::BoundaryVolume;
pub use config::{BodySpec, BoundarySpec, RandomBodies, SceneConfig};
pub use error::{BodyError, ConfigError};
pub use lattice::{ControlLattice, CONTROL_POINTS};
pub use params::PhysicsParams;
pub use resolve::{resolve_collision, resolve_collision_interior, BoundaryOutcome, CollisionOutcome};
pub use scene::{Scene, StepReport};
pub use spring::{DampingRegime, SpringDamper};
pub use traits::{Renderable, Updatable};
