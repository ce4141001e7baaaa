// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Shared fixtures and scenario builders for Squish crates.
//!
//! # Modules
//!
//! - [`bodies`] - Body builder with sphere/ellipsoid/box surfaces
//! - [`scenes`] - Scene builder and canonical scenarios
//! - [`surfaces`] - Extra triangle-list surfaces for tests
#![forbid(unsafe_code)]

pub mod bodies;
pub mod scenes;
pub mod surfaces;

pub use bodies::BodyBuilder;
pub use scenes::{boundary_drop, head_on_pair, SceneBuilder, HEAD_ON_SPEED, ROOM_HALF_EXTENT};
pub use surfaces::{box_surface, ellipsoid};
