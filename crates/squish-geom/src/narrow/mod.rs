// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Exact triangle/triangle intersection.
//!
//! Algorithm:
//! 1. Plane-side rejection: if every vertex of one triangle lies strictly on
//!    one side of the other's plane the pair is [`TriangleIntersection::Disjoint`].
//! 2. Parallel planes (including coplanar pairs) are reported as
//!    [`TriangleIntersection::Parallel`] and skipped by callers.
//! 3. The line shared by both planes is found by solving the 3×3 system
//!    `[n1; n2; d] x = [n1·a, n2·b, 0]` with `d = n1 × n2`. A near-zero
//!    determinant is [`TriangleIntersection::Degenerate`].
//! 4. The line is clipped against all six triangle edges; crossings lying
//!    inside both triangles (with tolerance) survive, near-duplicates are
//!    merged, and exactly two survivors form the intersection segment.
//!
//! Every threshold is relative (to unit normals, edge parameters or edge
//! lengths), so the outcome does not depend on the size of the triangles.
//!
//! Any other survivor count is [`TriangleIntersection::Degenerate`]
//! (touching at a point or numerically ambiguous) when at least one point
//! survived, and [`TriangleIntersection::Disjoint`] when none did.

use squish_math::Vec3;

use crate::types::triangle::{Segment, Triangle};

/// Squared length of the cross product of unit normals below which the two
/// planes are treated as parallel.
const PARALLEL_EPSILON: f32 = 1e-10;
/// Determinant magnitude below which the plane/plane solve is rejected.
const DETERMINANT_EPSILON: f32 = 1e-10;
/// Slack on the edge parameter `t ∈ [0, 1]`.
const EDGE_TOLERANCE: f32 = 1e-5;
/// Barycentric slack for the point-in-triangle test.
const INSIDE_TOLERANCE: f32 = 1e-4;
/// Squared distance, relative to the pair's longest squared edge, under which
/// two clipped points are the same point.
const DEDUP_RELATIVE_SQ: f32 = 1e-8;

/// Outcome of [`intersect_triangles`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TriangleIntersection {
    /// The triangles do not intersect.
    Disjoint,
    /// The planes are parallel (or coplanar); no segment is produced.
    Parallel,
    /// Numerically degenerate input: zero-area triangle, singular plane solve,
    /// or a tangent contact that does not yield exactly two points.
    Degenerate,
    /// The triangles cross along this segment.
    Segment(Segment),
}

impl TriangleIntersection {
    /// Returns the segment when the outcome is [`TriangleIntersection::Segment`].
    pub fn segment(&self) -> Option<Segment> {
        match self {
            Self::Segment(s) => Some(*s),
            _ => None,
        }
    }
}

fn all_one_side(plane_normal: &Vec3, plane_point: &Vec3, tri: &Triangle) -> bool {
    let d = tri.vertices.map(|v| plane_normal.dot(&v.sub(plane_point)));
    d.iter().all(|&x| x > 0.0) || d.iter().all(|&x| x < 0.0)
}

/// Point on the line `origin + s·dir` where it crosses segment `[start, end]`,
/// or `None` when the two are parallel or the crossing is outside the segment.
///
/// Both lines are assumed coplanar (the edge lies in its triangle's plane,
/// which contains the line).
fn clip_edge(origin: &Vec3, dir: &Vec3, start: &Vec3, end: &Vec3) -> Option<Vec3> {
    let edge = end.sub(start);
    let c = edge.cross(dir);
    let denom = c.length_squared();
    if denom <= f32::EPSILON * edge.length_squared() * dir.length_squared() {
        return None;
    }
    let t = origin.sub(start).cross(dir).dot(&c) / denom;
    if !(-EDGE_TOLERANCE..=1.0 + EDGE_TOLERANCE).contains(&t) {
        return None;
    }
    Some(start.add(&edge.scale(t)))
}

/// Computes the intersection segment of two triangles, if any.
pub fn intersect_triangles(a: &Triangle, b: &Triangle) -> TriangleIntersection {
    let n1 = a.unit_normal();
    let n2 = b.unit_normal();
    if n1 == Vec3::ZERO || n2 == Vec3::ZERO {
        return TriangleIntersection::Degenerate;
    }

    let a0 = a.vertices[0];
    let b0 = b.vertices[0];
    if all_one_side(&n1, &a0, b) || all_one_side(&n2, &b0, a) {
        return TriangleIntersection::Disjoint;
    }

    let dir = n1.cross(&n2);
    if dir.length_squared() <= PARALLEL_EPSILON {
        return TriangleIntersection::Parallel;
    }

    // Cramer's rule on rows (n1, n2, dir) expressed through cross products.
    let det = n1.dot(&n2.cross(&dir));
    if det.abs() <= DETERMINANT_EPSILON {
        return TriangleIntersection::Degenerate;
    }
    let h1 = n1.dot(&a0);
    let h2 = n2.dot(&b0);
    let origin = n2
        .cross(&dir)
        .scale(h1)
        .add(&dir.cross(&n1).scale(h2))
        .scale(1.0 / det);

    let longest_sq = a
        .edges()
        .iter()
        .chain(b.edges().iter())
        .map(|(s, e)| s.distance_squared(e))
        .fold(0.0_f32, f32::max);
    let dedup_sq = DEDUP_RELATIVE_SQ * longest_sq;

    let mut points: Vec<Vec3> = Vec::with_capacity(6);
    for (start, end) in a.edges().iter().chain(b.edges().iter()) {
        let Some(p) = clip_edge(&origin, &dir, start, end) else {
            continue;
        };
        if !a.contains_point(&p, INSIDE_TOLERANCE) || !b.contains_point(&p, INSIDE_TOLERANCE) {
            continue;
        }
        if points.iter().any(|q| q.distance_squared(&p) <= dedup_sq) {
            continue;
        }
        points.push(p);
    }

    match points.as_slice() {
        [] => TriangleIntersection::Disjoint,
        [p, q] => TriangleIntersection::Segment(Segment::new(*p, *q)),
        _ => TriangleIntersection::Degenerate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xy_triangle() -> Triangle {
        Triangle::new(
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn crossing_triangles_produce_segment_on_shared_line() {
        // Vertical triangle in the x = 0 plane piercing the XY triangle.
        let b = Triangle::new(
            Vec3::new(0.0, -0.5, -1.0),
            Vec3::new(0.0, 0.5, -1.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        let seg = intersect_triangles(&xy_triangle(), &b)
            .segment()
            .unwrap_or_else(|| unreachable!("triangles cross"));
        for p in [seg.start, seg.end] {
            assert!(p.x().abs() < 1e-5);
            assert!(p.z().abs() < 1e-5);
        }
        // The vertical triangle spans y ∈ [-0.25, 0.25] at z = 0.
        let ys = [seg.start.y(), seg.end.y()];
        let (lo, hi) = (ys[0].min(ys[1]), ys[0].max(ys[1]));
        assert!((lo + 0.25).abs() < 1e-5, "lo = {lo}");
        assert!((hi - 0.25).abs() < 1e-5, "hi = {hi}");
    }

    #[test]
    fn separated_triangles_are_disjoint() {
        let b = Triangle::new(
            Vec3::new(0.0, -0.5, 1.0),
            Vec3::new(0.0, 0.5, 1.0),
            Vec3::new(0.0, 0.0, 2.0),
        );
        assert_eq!(intersect_triangles(&xy_triangle(), &b), TriangleIntersection::Disjoint);
    }

    #[test]
    fn coplanar_triangles_are_parallel() {
        let b = Triangle::new(
            Vec3::new(-0.5, -0.5, 0.0),
            Vec3::new(0.5, -0.5, 0.0),
            Vec3::new(0.0, 0.5, 0.0),
        );
        assert_eq!(intersect_triangles(&xy_triangle(), &b), TriangleIntersection::Parallel);
    }

    #[test]
    fn zero_area_triangle_is_degenerate() {
        let b = Triangle::new(Vec3::ZERO, Vec3::UNIT_Z, Vec3::UNIT_Z.scale(2.0));
        assert_eq!(intersect_triangles(&xy_triangle(), &b), TriangleIntersection::Degenerate);
    }

    #[test]
    fn vertex_touching_the_interior_is_degenerate() {
        // One vertex of b rests on the origin inside a; the rest of b is above
        // a's plane, so exactly one clipped point survives.
        let b = Triangle::new(Vec3::ZERO, Vec3::new(0.0, -0.5, 1.0), Vec3::new(0.5, 0.0, 1.0));
        assert_eq!(intersect_triangles(&xy_triangle(), &b), TriangleIntersection::Degenerate);
    }

    #[test]
    fn tiny_crossing_triangles_still_produce_a_segment() {
        let s = 1e-3;
        let a = Triangle::new(
            Vec3::new(-s, -s, 0.0),
            Vec3::new(s, -s, 0.0),
            Vec3::new(0.0, s, 0.0),
        );
        let b = Triangle::new(
            Vec3::new(0.0, -0.5 * s, -s),
            Vec3::new(0.0, 0.5 * s, -s),
            Vec3::new(0.0, 0.0, s),
        );
        let seg = intersect_triangles(&a, &b)
            .segment()
            .unwrap_or_else(|| unreachable!("triangles cross"));
        assert!((seg.length() - 0.5 * s).abs() < 1e-3 * s);
    }

    #[test]
    fn line_crossing_planes_outside_both_triangles_is_disjoint() {
        // Planes cross along x = 5 (outside the XY triangle) but the triangle
        // straddles z = 0.
        let b = Triangle::new(
            Vec3::new(5.0, -0.5, -1.0),
            Vec3::new(5.0, 0.5, -1.0),
            Vec3::new(5.0, 0.0, 1.0),
        );
        assert_eq!(intersect_triangles(&xy_triangle(), &b), TriangleIntersection::Disjoint);
    }
}
