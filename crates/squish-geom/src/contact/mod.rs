// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Contact detection between two triangle soups and greedy clustering of the
//! resulting intersection midpoints into a handful of contact points.

use squish_math::Vec3;
use tracing::trace;

use crate::broad::{cull_pair, BroadPhaseResult};
use crate::narrow::{intersect_triangles, TriangleIntersection};
use crate::types::aabb::Aabb;
use crate::types::triangle::{triangle_at, Segment};

/// Default clustering radius in world units.
pub const DEFAULT_CONTACT_RADIUS: f32 = 0.1;

/// Everything the detection pass learned about one body pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactReport {
    /// Intersection segments, in (triangle A, triangle B) iteration order.
    pub segments: Vec<Segment>,
    /// `false` when the whole-body boxes were disjoint and no triangle was
    /// inspected.
    pub boxes_overlap: bool,
    /// Number of narrow-phase triangle pair tests executed.
    pub tested_pairs: usize,
    /// Pairs skipped as parallel or numerically degenerate.
    pub degenerate_pairs: usize,
}

impl ContactReport {
    /// Midpoints of every intersection segment.
    pub fn midpoints(&self) -> Vec<Vec3> {
        self.segments.iter().map(Segment::midpoint).collect()
    }

    /// Clustered contact points (see [`cluster_contacts`]).
    pub fn contact_points(&self, radius: f32) -> Vec<Vec3> {
        let mut points = self.midpoints();
        cluster_contacts(&mut points, radius);
        points
    }
}

/// Runs broad + narrow phase for two bodies.
///
/// `soup_a`/`soup_b` are world-space triangle soups; `box_a`/`box_b` are the
/// bodies' world-space bounding boxes. When the boxes are disjoint no
/// narrow-phase test is executed.
pub fn detect_contacts(soup_a: &[Vec3], box_a: &Aabb, soup_b: &[Vec3], box_b: &Aabb) -> ContactReport {
    let (kept_a, kept_b) = match cull_pair(soup_a, box_a, soup_b, box_b) {
        BroadPhaseResult::Disjoint => return ContactReport::default(),
        BroadPhaseResult::Candidates { kept_a, kept_b, .. } => (kept_a, kept_b),
    };

    let tris_b: Vec<_> = kept_b.iter().map(|&j| triangle_at(soup_b, j)).collect();
    let mut report = ContactReport {
        boxes_overlap: true,
        ..ContactReport::default()
    };
    for &i in &kept_a {
        let ta = triangle_at(soup_a, i);
        for tb in &tris_b {
            report.tested_pairs += 1;
            match intersect_triangles(&ta, tb) {
                TriangleIntersection::Segment(seg) => report.segments.push(seg),
                TriangleIntersection::Parallel | TriangleIntersection::Degenerate => {
                    report.degenerate_pairs += 1;
                }
                TriangleIntersection::Disjoint => {}
            }
        }
    }
    trace!(
        kept_a = kept_a.len(),
        kept_b = kept_b.len(),
        segments = report.segments.len(),
        degenerate = report.degenerate_pairs,
        "narrow phase"
    );
    report
}

/// Greedily reduces `points` to cluster representatives, in place.
///
/// The first remaining point becomes a representative; every later point
/// within the squared-distance threshold `2·radius²` of it is removed by
/// swap-with-last. Repeats for the next remaining point until the end. Points
/// already pairwise farther apart than the threshold are left untouched and
/// in their original order.
pub fn cluster_contacts(points: &mut Vec<Vec3>, radius: f32) {
    let threshold = 2.0 * radius * radius;
    let mut rep = 0;
    while rep < points.len() {
        let anchor = points[rep];
        let mut j = rep + 1;
        while j < points.len() {
            if anchor.distance_squared(&points[j]) < threshold {
                points.swap_remove(j);
            } else {
                j += 1;
            }
        }
        rep += 1;
    }
}
