// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! The 3×3×3 control lattice of a quadratic Bezier volume.
//!
//! Points are addressed by `(i, j, k)` along the `s`/`t`/`u` parametric axes
//! (world X/Y/Z) and stored flat at `i + 3k + 9j`. All lattice helpers and the
//! evaluators in [`crate::bezier`] agree on this layout.

use core::ops::{Index, IndexMut};

use squish_geom::Aabb;
use squish_math::Vec3;

/// Polynomial degree per axis.
pub const DEGREE: usize = 2;
/// Control points per axis.
pub const POINTS_PER_AXIS: usize = DEGREE + 1;
/// Control points in a lattice.
pub const CONTROL_POINTS: usize = 27;

/// Flat storage index of lattice point `(i, j, k)`.
///
/// `i` walks the `s` axis, `j` the `t` axis and `k` the `u` axis.
#[inline]
pub const fn index(i: usize, j: usize, k: usize) -> usize {
    i + POINTS_PER_AXIS * k + POINTS_PER_AXIS * POINTS_PER_AXIS * j
}

/// Inverse of [`index`].
pub const fn grid_coords(idx: usize) -> (usize, usize, usize) {
    let j = idx / 9;
    let rem = idx % 9;
    (rem % 3, j, rem / 3)
}

/// Twenty-seven control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlLattice {
    points: [Vec3; CONTROL_POINTS],
}

impl ControlLattice {
    /// Wraps raw points already laid out in [`index`] order.
    pub const fn from_points(points: [Vec3; CONTROL_POINTS]) -> Self {
        Self { points }
    }

    /// Evenly spaced lattice spanning `span` from the origin: point
    /// `(i, j, k)` sits at `(i, j, k) / 2 ⊙ span`.
    pub fn regular(span: Vec3) -> Self {
        let mut points = [Vec3::ZERO; CONTROL_POINTS];
        for (idx, slot) in points.iter_mut().enumerate() {
            let (i, j, k) = grid_coords(idx);
            let grid = Vec3::new(i as f32, j as f32, k as f32).scale(0.5);
            *slot = grid.hadamard(&span);
        }
        Self { points }
    }

    /// Point at `(i, j, k)`.
    pub fn at(&self, i: usize, j: usize, k: usize) -> Vec3 {
        self.points[index(i, j, k)]
    }

    /// All points in storage order.
    pub fn points(&self) -> &[Vec3; CONTROL_POINTS] {
        &self.points
    }

    /// Mutable access to all points in storage order.
    pub fn points_mut(&mut self) -> &mut [Vec3; CONTROL_POINTS] {
        &mut self.points
    }

    /// Same lattice shifted by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            points: self.points.map(|p| p + offset),
        }
    }

    /// Tight box around the control points.
    ///
    /// A Bezier volume lies inside the convex hull of its control points, so
    /// this box also bounds the evaluated surface.
    pub fn bounds(&self) -> Aabb {
        let mut min = self.points[0];
        let mut max = self.points[0];
        for p in &self.points[1..] {
            min = min.min(p);
            max = max.max(p);
        }
        Aabb::new(min, max)
    }

    /// Index of the point closest to `target`; ties go to the lower index.
    pub fn closest_to(&self, target: &Vec3) -> usize {
        let mut best = 0;
        let mut best_d = f32::INFINITY;
        for (idx, p) in self.points.iter().enumerate() {
            let d = p.distance_squared(target);
            if d < best_d {
                best = idx;
                best_d = d;
            }
        }
        best
    }
}

impl Index<usize> for ControlLattice {
    type Output = Vec3;

    fn index(&self, idx: usize) -> &Vec3 {
        &self.points[idx]
    }
}

impl IndexMut<usize> for ControlLattice {
    fn index_mut(&mut self, idx: usize) -> &mut Vec3 {
        &mut self.points[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_layout_is_i_plus_3k_plus_9j() {
        assert_eq!(index(0, 0, 0), 0);
        assert_eq!(index(1, 0, 0), 1);
        assert_eq!(index(0, 0, 1), 3);
        assert_eq!(index(0, 1, 0), 9);
        assert_eq!(index(2, 2, 2), 26);
        for idx in 0..CONTROL_POINTS {
            let (i, j, k) = grid_coords(idx);
            assert_eq!(index(i, j, k), idx);
        }
    }

    #[test]
    fn regular_lattice_spans_the_box() {
        let lat = ControlLattice::regular(Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(lat.at(1, 1, 1), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(lat.at(2, 0, 0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(lat.at(0, 2, 0), Vec3::new(0.0, 4.0, 0.0));
        assert_eq!(lat.at(0, 0, 2), Vec3::new(0.0, 0.0, 6.0));
        let b = lat.bounds();
        assert_eq!(b.min(), Vec3::ZERO);
        assert_eq!(b.max(), Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn closest_point_prefers_lower_index_on_ties() {
        let lat = ControlLattice::regular(Vec3::splat(2.0));
        assert_eq!(lat.closest_to(&Vec3::new(2.1, 0.0, 0.0)), index(2, 0, 0));
        // Equidistant from (0,0,0) and (1,0,0).
        assert_eq!(lat.closest_to(&Vec3::new(0.5, -1.0, -1.0)), 0);
    }
}
