// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use squish_math::Vec3;

use crate::types::aabb::Aabb;

/// Squared sine of the smallest corner angle below which a triangle counts as
/// degenerate. Relative to the edge lengths, so it holds at any scale.
const DEGENERATE_SIN_SQ: f32 = f32::EPSILON;

/// A triangle in 3D, vertices in counter-clockwise order seen from the side
/// its normal points to.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    /// Vertex positions.
    pub vertices: [Vec3; 3],
}

impl Triangle {
    /// Creates a triangle from three positions.
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Unnormalized plane normal `(b - a) × (c - a)`; its length is twice the
    /// triangle's area.
    pub fn normal(&self) -> Vec3 {
        let [a, b, c] = self.vertices;
        b.sub(&a).cross(&c.sub(&a))
    }

    /// `true` when the triangle has (numerically) zero area.
    ///
    /// Compares `|e1 × e2|²` against `|e1|²·|e2|²`, so a small but well-shaped
    /// triangle is never degenerate.
    pub fn is_degenerate(&self) -> bool {
        let [a, b, c] = self.vertices;
        let (e1, e2) = (b.sub(&a), c.sub(&a));
        let area2 = e1.cross(&e2).length_squared();
        !(area2 > DEGENERATE_SIN_SQ * e1.length_squared() * e2.length_squared())
    }

    /// Unit plane normal, or zero for a degenerate triangle.
    pub fn unit_normal(&self) -> Vec3 {
        if self.is_degenerate() {
            return Vec3::ZERO;
        }
        let n = self.normal();
        n.scale(1.0 / n.length())
    }

    /// Tight bounding box of the three vertices.
    pub fn aabb(&self) -> Aabb {
        let [a, b, c] = self.vertices;
        Aabb::new(a.min(&b).min(&c), a.max(&b).max(&c))
    }

    /// The three edges as `(start, end)` pairs: `ab`, `bc`, `ca`.
    pub fn edges(&self) -> [(Vec3, Vec3); 3] {
        let [a, b, c] = self.vertices;
        [(a, b), (b, c), (c, a)]
    }

    /// Returns `true` if `p` (assumed to lie in the triangle's plane) is inside
    /// the triangle or within `tolerance` of its boundary.
    ///
    /// Area test: the three sub-triangles `p`-edge must all be oriented like
    /// the triangle itself, up to `tolerance` scaled by the triangle's own
    /// doubled area.
    pub fn contains_point(&self, p: &Vec3, tolerance: f32) -> bool {
        if self.is_degenerate() {
            return false;
        }
        let n = self.normal();
        let area2 = n.length_squared();
        let slack = -tolerance * area2;
        self.edges().iter().all(|(s, e)| {
            let sub = e.sub(s).cross(&p.sub(s));
            sub.dot(&n) >= slack
        })
    }
}

/// Segment between two points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    /// First endpoint.
    pub start: Vec3,
    /// Second endpoint.
    pub end: Vec3,
}

impl Segment {
    /// Creates a segment.
    pub const fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    /// Midpoint of the segment.
    pub fn midpoint(&self) -> Vec3 {
        self.start.add(&self.end).scale(0.5)
    }

    /// Segment length.
    pub fn length(&self) -> f32 {
        self.end.sub(&self.start).length()
    }
}

/// Number of complete triangles in a flat triangle soup.
pub fn triangle_count(soup: &[Vec3]) -> usize {
    soup.len() / 3
}

/// Triangle `index` of a flat triangle soup.
///
/// # Panics
/// Panics if `index >= triangle_count(soup)`.
pub fn triangle_at(soup: &[Vec3], index: usize) -> Triangle {
    let base = index * 3;
    Triangle::new(soup[base], soup[base + 1], soup[base + 2])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xy_triangle() -> Triangle {
        Triangle::new(Vec3::ZERO, Vec3::UNIT_X, Vec3::UNIT_Y)
    }

    #[test]
    fn normal_points_along_z_for_ccw_xy_triangle() {
        assert_eq!(xy_triangle().unit_normal(), Vec3::UNIT_Z);
    }

    #[test]
    fn contains_point_inside_edge_and_outside() {
        let t = xy_triangle();
        assert!(t.contains_point(&Vec3::new(0.25, 0.25, 0.0), 1e-5));
        assert!(t.contains_point(&Vec3::new(0.5, 0.0, 0.0), 1e-5));
        assert!(!t.contains_point(&Vec3::new(0.75, 0.75, 0.0), 1e-5));
        assert!(!t.contains_point(&Vec3::new(-0.1, 0.5, 0.0), 1e-5));
    }

    #[test]
    fn degenerate_triangle_contains_nothing() {
        let t = Triangle::new(Vec3::ZERO, Vec3::UNIT_X, Vec3::UNIT_X.scale(2.0));
        assert!(!t.contains_point(&Vec3::new(0.5, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn small_triangles_keep_their_normal_and_interior() {
        let s = 1e-3;
        let t = Triangle::new(Vec3::ZERO, Vec3::UNIT_X.scale(s), Vec3::UNIT_Y.scale(s));
        assert!(!t.is_degenerate());
        assert!(t.unit_normal().distance_squared(&Vec3::UNIT_Z) < 1e-12);
        assert!(t.contains_point(&Vec3::new(0.25 * s, 0.25 * s, 0.0), 1e-5));
        assert!(!t.contains_point(&Vec3::new(0.75 * s, 0.75 * s, 0.0), 1e-5));
    }

    #[test]
    fn collinear_and_collapsed_triangles_are_degenerate() {
        let collinear = Triangle::new(Vec3::ZERO, Vec3::UNIT_X, Vec3::UNIT_X.scale(2.0));
        assert!(collinear.is_degenerate());
        assert_eq!(collinear.unit_normal(), Vec3::ZERO);
        let point = Triangle::new(Vec3::UNIT_Z, Vec3::UNIT_Z, Vec3::UNIT_Z);
        assert!(point.is_degenerate());
    }

    #[test]
    fn soup_indexing_ignores_partial_tail() {
        let soup = [Vec3::ZERO, Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z];
        assert_eq!(triangle_count(&soup), 1);
        assert_eq!(triangle_at(&soup, 0), xy_triangle());
    }
}
