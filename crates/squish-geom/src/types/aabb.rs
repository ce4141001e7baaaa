// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use squish_math::Vec3;

/// Axis-aligned bounding box.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - Values are `f32`; whether the box is body-local or world space is up to
///   the caller (see [`Aabb::translated`]).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

/// Index pairs into [`Aabb::corners`] forming the 12 box edges.
const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 3),
    (3, 2),
    (2, 0),
    (4, 5),
    (5, 7),
    (7, 6),
    (6, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

impl Aabb {
    /// Constructs an AABB from its minimum and maximum corners.
    ///
    /// # Panics
    /// Panics if any component of `min` is greater than its counterpart in `max`.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        assert!(
            min.x() <= max.x() && min.y() <= max.y() && min.z() <= max.z(),
            "invalid AABB: min > max"
        );
        Self { min, max }
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Geometric center of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.min.add(&self.max).scale(0.5)
    }

    /// Full extent (`max - min`) along each axis.
    #[must_use]
    pub fn extent(&self) -> Vec3 {
        self.max.sub(&self.min)
    }

    /// Builds an AABB centered at `center` with half-extents `hx, hy, hz`.
    #[must_use]
    pub fn from_center_half_extents(center: Vec3, hx: f32, hy: f32, hz: f32) -> Self {
        let he = Vec3::new(hx, hy, hz);
        Self::new(center.sub(&he), center.add(&he))
    }

    /// Builds the minimal AABB containing all `points`, or `None` when
    /// `points` is empty.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for p in rest {
            min = min.min(p);
            max = max.max(p);
        }
        Some(Self { min, max })
    }

    /// Returns `true` if this AABB overlaps another (inclusive on faces).
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        // Inclusive so touching faces still count as overlap.
        !(self.max.x() < other.min.x()
            || self.min.x() > other.max.x()
            || self.max.y() < other.min.y()
            || self.min.y() > other.max.y()
            || self.max.z() < other.min.z()
            || self.min.z() > other.max.z())
    }

    /// Returns the overlap box of two AABBs, or `None` when they are disjoint.
    ///
    /// Touching boxes yield a flat (zero-thickness) overlap.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Self {
            min: self.min.max(&other.min),
            max: self.max.min(&other.max),
        })
    }

    /// Returns the union of two AABBs.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(&other.min),
            max: self.max.max(&other.max),
        }
    }

    /// Inflates the box by a uniform margin `m` in all directions.
    #[must_use]
    pub fn inflate(&self, m: f32) -> Self {
        let delta = Vec3::splat(m);
        Self {
            min: self.min.sub(&delta),
            max: self.max.add(&delta),
        }
    }

    /// Returns the box shifted by `offset` (body-local to world space).
    #[must_use]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min.add(&offset),
            max: self.max.add(&offset),
        }
    }

    /// Returns `true` if `p` lies inside or on the box.
    #[must_use]
    pub fn contains_point(&self, p: &Vec3) -> bool {
        (0..3).all(|i| p[i] >= self.min[i] && p[i] <= self.max[i])
    }

    /// The eight corners, indexed by bit pattern `x | y << 1 | z << 2`
    /// (bit set = max on that axis).
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let pick = |bit: usize, axis: usize| {
            if bit == 0 {
                self.min[axis]
            } else {
                self.max[axis]
            }
        };
        let mut out = [Vec3::ZERO; 8];
        for (i, corner) in out.iter_mut().enumerate() {
            *corner = Vec3::new(pick(i & 1, 0), pick((i >> 1) & 1, 1), pick((i >> 2) & 1, 2));
        }
        out
    }

    /// The 12 edges as a line list (24 points, two per segment).
    #[must_use]
    pub fn edge_lines(&self) -> Vec<Vec3> {
        let corners = self.corners();
        EDGES
            .iter()
            .flat_map(|&(a, b)| [corners[a], corners[b]])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_at(x: f32) -> Aabb {
        Aabb::from_center_half_extents(Vec3::new(x, 0.0, 0.0), 1.0, 1.0, 1.0)
    }

    #[test]
    fn touching_faces_overlap_with_flat_intersection() {
        let a = unit_at(0.0);
        let b = unit_at(2.0);
        assert!(a.overlaps(&b));
        let i = a.intersection(&b);
        assert!(matches!(i, Some(bx) if bx.extent().x() == 0.0));
    }

    #[test]
    fn disjoint_boxes_have_no_intersection() {
        assert_eq!(unit_at(0.0).intersection(&unit_at(5.0)), None);
    }

    #[test]
    fn from_points_empty_is_none() {
        assert_eq!(Aabb::from_points(&[]), None);
        let b = Aabb::from_points(&[Vec3::new(1.0, -1.0, 0.0), Vec3::new(-2.0, 3.0, 0.5)]);
        assert_eq!(
            b,
            Some(Aabb::new(Vec3::new(-2.0, -1.0, 0.0), Vec3::new(1.0, 3.0, 0.5)))
        );
    }

    #[test]
    fn edge_lines_cover_twelve_unit_edges() {
        let b = Aabb::new(Vec3::ZERO, Vec3::splat(1.0));
        let lines = b.edge_lines();
        assert_eq!(lines.len(), 24);
        for pair in lines.chunks_exact(2) {
            assert!((pair[0].distance_squared(&pair[1]) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn translated_and_contains() {
        let b = unit_at(0.0).translated(Vec3::new(0.0, 10.0, 0.0));
        assert!(b.contains_point(&Vec3::new(0.5, 10.5, -0.5)));
        assert!(!b.contains_point(&Vec3::ZERO));
        assert_eq!(b.center(), Vec3::new(0.0, 10.0, 0.0));
    }
}
