// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use squish_math::Vec3;

/// A surface vertex: position plus unit normal.
///
/// Surfaces are exchanged as triangle lists (three consecutive vertices per
/// triangle, no index buffer), which is also the layout the renderer consumes.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct SurfaceVertex {
    /// Position.
    pub position: Vec3,
    /// Unit normal.
    pub normal: Vec3,
}

impl SurfaceVertex {
    /// Creates a vertex.
    pub const fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }
}
