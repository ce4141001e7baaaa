// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Broad-phase culling between two triangle soups.
//!
//! Contract:
//! - If the two whole-body AABBs do not overlap the pair is rejected before a
//!   single triangle is inspected.
//! - Otherwise each triangle whose own AABB overlaps the pair's overlap box is
//!   kept; indices are emitted in ascending order.
//! - Overlap is inclusive on faces (touching boxes still produce candidates).
//!
//! The narrow phase then tests every kept-A × kept-B pair, so the size of
//! the kept sets is what bounds per-frame cost.

use squish_math::Vec3;

use crate::types::aabb::Aabb;
use crate::types::triangle::{triangle_at, triangle_count};

/// Output of [`cull_pair`].
#[derive(Debug, Clone, PartialEq)]
pub enum BroadPhaseResult {
    /// The whole-body boxes do not overlap; nothing further to test.
    Disjoint,
    /// The boxes overlap; the listed triangles may intersect.
    Candidates {
        /// Overlap box of the two whole-body boxes.
        overlap: Aabb,
        /// Indices of body A's triangles touching `overlap`.
        kept_a: Vec<usize>,
        /// Indices of body B's triangles touching `overlap`.
        kept_b: Vec<usize>,
    },
}

impl BroadPhaseResult {
    /// Number of triangle pairs the narrow phase would test.
    pub fn pair_count(&self) -> usize {
        match self {
            Self::Disjoint => 0,
            Self::Candidates { kept_a, kept_b, .. } => kept_a.len() * kept_b.len(),
        }
    }
}

/// Indices of the triangles in `soup` whose AABB overlaps `region`.
pub fn triangles_touching(soup: &[Vec3], region: &Aabb) -> Vec<usize> {
    (0..triangle_count(soup))
        .filter(|&i| triangle_at(soup, i).aabb().overlaps(region))
        .collect()
}

/// Runs the broad phase for two bodies given their world-space triangle soups
/// and world-space bounding boxes.
pub fn cull_pair(soup_a: &[Vec3], box_a: &Aabb, soup_b: &[Vec3], box_b: &Aabb) -> BroadPhaseResult {
    let Some(overlap) = box_a.intersection(box_b) else {
        return BroadPhaseResult::Disjoint;
    };
    let kept_a = triangles_touching(soup_a, &overlap);
    let kept_b = triangles_touching(soup_b, &overlap);
    BroadPhaseResult::Candidates {
        overlap,
        kept_a,
        kept_b,
    }
}
