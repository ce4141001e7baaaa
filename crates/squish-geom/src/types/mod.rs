// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Core geometry types used by collision detection (AABB, triangle, segment).
//!
//! Determinism notes:
//! - Overlap semantics are inclusive on faces so touching bodies still reach
//!   the narrow phase.
//! - All math is `f32` without fused multiply-add.

#[doc = "Axis-aligned bounding boxes."]
pub mod aabb;
#[doc = "Triangles, segments and triangle-soup indexing."]
pub mod triangle;
#[doc = "Surface vertices (position + normal)."]
pub mod vertex;
