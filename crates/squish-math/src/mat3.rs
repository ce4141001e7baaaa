// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::Vec3;

/// Column-major 3×3 matrix used for local orientation frames.
///
/// The Bezier evaluator builds one frame per vertex from the three partial
/// derivatives of the volume; columns hold the (normalized) `∂/∂s`, `∂/∂t`
/// and `∂/∂u` directions.
///
/// # Examples
/// ```
/// use squish_math::{Mat3, Vec3};
/// let m = Mat3::from_cols(Vec3::UNIT_Y, Vec3::UNIT_X, Vec3::UNIT_Z);
/// assert_eq!(m.transform(&Vec3::UNIT_X), Vec3::UNIT_Y);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3 {
    cols: [Vec3; 3],
}

impl Mat3 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            cols: [Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z],
        }
    }

    /// Builds a matrix from three column vectors.
    pub const fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    /// Returns column `idx`.
    pub fn col(&self, idx: usize) -> Vec3 {
        self.cols[idx]
    }

    /// Element at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.cols[col].component(row)
    }

    /// Multiplies the matrix with a column vector (`self * v`).
    pub fn transform(&self, v: &Vec3) -> Vec3 {
        self.cols[0]
            .scale(v.x())
            .add(&self.cols[1].scale(v.y()))
            .add(&self.cols[2].scale(v.z()))
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let row = |r: usize| Vec3::new(self.at(r, 0), self.at(r, 1), self.at(r, 2));
        Self::from_cols(row(0), row(1), row(2))
    }

    /// Determinant (scalar triple product of the columns).
    pub fn determinant(&self) -> f32 {
        self.cols[0].dot(&self.cols[1].cross(&self.cols[2]))
    }

    /// Matrix product `self * rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self::from_cols(
            self.transform(&rhs.cols[0]),
            self.transform(&rhs.cols[1]),
            self.transform(&rhs.cols[2]),
        )
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl core::ops::Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}
