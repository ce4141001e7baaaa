// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![doc = r"Geometry primitives and collision detection for Squish.

This crate provides:
- Axis-aligned bounding boxes (`Aabb`), triangles, segments and surface vertices.
- A broad phase that rejects body pairs by AABB and culls triangles against the
  pair's overlap box.
- A narrow phase that computes the exact intersection segment of two triangles.
- Greedy contact clustering of intersection midpoints.
- A tessellated sphere generator used to build deformable bodies.

Design notes:
- Deterministic: no ambient RNG; candidate and contact ordering follows input
  order.
- Float32 throughout; degeneracies are named outcomes, never panics.
- Triangle soups are flat position slices, three consecutive positions per
  triangle.
"]
#![forbid(unsafe_code)]

/// Broad-phase culling of triangle soups.
pub mod broad;
/// Contact detection and clustering.
pub mod contact;
/// Exact triangle/triangle intersection.
pub mod narrow;
/// Shape generators producing triangulated surfaces.
pub mod shape;
/// Foundational geometric types.
pub mod types;

pub use broad::{cull_pair, BroadPhaseResult};
pub use contact::{cluster_contacts, detect_contacts, ContactReport, DEFAULT_CONTACT_RADIUS};
pub use narrow::{intersect_triangles, TriangleIntersection};
pub use shape::{uv_sphere, DEFAULT_SLICES, DEFAULT_STACKS};
pub use types::aabb::Aabb;
pub use types::triangle::{triangle_at, triangle_count, Segment, Triangle};
pub use types::vertex::SurfaceVertex;
