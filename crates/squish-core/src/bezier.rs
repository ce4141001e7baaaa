// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Quadratic Bezier volume evaluation.
//!
//! A point with lattice-local coordinates `(s, t, u) ∈ [0, 1]³` maps to
//!
//! ```text
//! P(s, t, u) = Σ_{i,j,k} B_i(s) · B_j(t) · B_k(u) · C[i + 3k + 9j]
//! ```
//!
//! with `B_0 = (1−x)²`, `B_1 = 2(1−x)x`, `B_2 = x²`. The local orientation
//! frame has the normalized partial derivatives `∂P/∂s`, `∂P/∂t`, `∂P/∂u` as
//! its columns; surface normals are carried through that frame.
//!
//! [`evaluate_reference`] is the plain triple sum with explicit binomial
//! coefficients. [`evaluate`] and [`evaluate_bulk`] contract one axis at a
//! time and share the `s` contraction between the position and three of the
//! four derivative sums; both must agree with the reference within float
//! tolerance.

use squish_geom::SurfaceVertex;
use squish_math::{Mat3, Vec3};

use crate::lattice::{index, ControlLattice, POINTS_PER_AXIS};

/// Lattice-local coordinates of one surface vertex plus its rest normal.
///
/// Computed once when the body is built and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParametricVertex {
    /// `(s, t, u)` in `[0, 1]³`.
    pub coords: Vec3,
    /// Rest-pose unit normal.
    pub normal: Vec3,
}

impl ParametricVertex {
    /// Creates a parametric vertex.
    pub const fn new(coords: Vec3, normal: Vec3) -> Self {
        Self { coords, normal }
    }
}

/// Quadratic Bernstein weights at `x`.
#[inline]
pub fn bernstein(x: f32) -> [f32; 3] {
    let m = 1.0 - x;
    [m * m, 2.0 * m * x, x * x]
}

/// Derivatives of the quadratic Bernstein weights at `x`.
#[inline]
pub fn bernstein_derivative(x: f32) -> [f32; 3] {
    [2.0 * (x - 1.0), 2.0 - 4.0 * x, 2.0 * x]
}

const fn binomial2(i: usize) -> f32 {
    match i {
        1 => 2.0,
        _ => 1.0,
    }
}

fn reference_weight(i: usize, x: f32) -> f32 {
    let n = i as i32;
    binomial2(i) * x.powi(n) * (1.0 - x).powi(2 - n)
}

/// Derivative of the degree-2 Bernstein basis via the degree-1 basis:
/// `B'_i = 2 (B¹_{i−1} − B¹_i)`.
fn reference_weight_derivative(i: usize, x: f32) -> f32 {
    let lower = |n: usize| match n {
        0 => 1.0 - x,
        1 => x,
        _ => 0.0,
    };
    let prev = if i == 0 { 0.0 } else { lower(i - 1) };
    2.0 * (prev - lower(i))
}

/// Straight triple-sum evaluation of `P(s, t, u)`.
pub fn evaluate_reference(lattice: &ControlLattice, p: Vec3) -> Vec3 {
    let mut acc = Vec3::ZERO;
    for i in 0..POINTS_PER_AXIS {
        for j in 0..POINTS_PER_AXIS {
            for k in 0..POINTS_PER_AXIS {
                let w = reference_weight(i, p.x()) * reference_weight(j, p.y()) * reference_weight(k, p.z());
                acc += lattice.at(i, j, k).scale(w);
            }
        }
    }
    acc
}

/// Straight triple-sum evaluation of the partial derivative along `axis`
/// (`0 = s`, `1 = t`, `2 = u`).
pub fn evaluate_reference_derivative(lattice: &ControlLattice, p: Vec3, axis: usize) -> Vec3 {
    let weight = |n: usize, param: usize| {
        let x = p.component(param);
        if param == axis {
            reference_weight_derivative(n, x)
        } else {
            reference_weight(n, x)
        }
    };
    let mut acc = Vec3::ZERO;
    for i in 0..POINTS_PER_AXIS {
        for j in 0..POINTS_PER_AXIS {
            for k in 0..POINTS_PER_AXIS {
                acc += lattice.at(i, j, k).scale(weight(i, 0) * weight(j, 1) * weight(k, 2));
            }
        }
    }
    acc
}

/// Collapses the `s` axis: one vector per `(j, k)` row, stored at `3j + k`.
#[inline]
fn contract_s(lattice: &ControlLattice, ws: &[f32; 3]) -> [Vec3; 9] {
    let mut rows = [Vec3::ZERO; 9];
    for j in 0..POINTS_PER_AXIS {
        for k in 0..POINTS_PER_AXIS {
            let base = index(0, j, k);
            rows[3 * j + k] = lattice[base].scale(ws[0]) + lattice[base + 1].scale(ws[1]) + lattice[base + 2].scale(ws[2]);
        }
    }
    rows
}

#[inline]
fn contract_tu(rows: &[Vec3; 9], wt: &[f32; 3], wu: &[f32; 3]) -> Vec3 {
    let mut acc = Vec3::ZERO;
    for j in 0..POINTS_PER_AXIS {
        let row = rows[3 * j].scale(wu[0]) + rows[3 * j + 1].scale(wu[1]) + rows[3 * j + 2].scale(wu[2]);
        acc += row.scale(wt[j]);
    }
    acc
}

/// Evaluates `P(s, t, u)`.
pub fn evaluate(lattice: &ControlLattice, p: Vec3) -> Vec3 {
    let rows = contract_s(lattice, &bernstein(p.x()));
    contract_tu(&rows, &bernstein(p.y()), &bernstein(p.z()))
}

/// Evaluates `P(s, t, u)` and the orientation frame whose columns are the
/// normalized `∂P/∂s`, `∂P/∂t`, `∂P/∂u`.
///
/// On an undeformed regular lattice the frame is the identity.
pub fn evaluate_with_frame(lattice: &ControlLattice, p: Vec3) -> (Vec3, Mat3) {
    let (ws, wt, wu) = (bernstein(p.x()), bernstein(p.y()), bernstein(p.z()));
    let (ds, dt, du) = (
        bernstein_derivative(p.x()),
        bernstein_derivative(p.y()),
        bernstein_derivative(p.z()),
    );
    let rows = contract_s(lattice, &ws);
    let rows_ds = contract_s(lattice, &ds);

    let position = contract_tu(&rows, &wt, &wu);
    let d_s = contract_tu(&rows_ds, &wt, &wu);
    let d_t = contract_tu(&rows, &dt, &wu);
    let d_u = contract_tu(&rows, &wt, &du);
    (position, Mat3::from_cols(d_s.normalize(), d_t.normalize(), d_u.normalize()))
}

/// Evaluates one parametric vertex: deformed position plus the rest normal
/// carried through the local frame and re-normalized.
///
/// A collapsed frame (zero derivative along an axis) can zero the carried
/// normal; the rest normal is kept in that case.
#[inline]
pub fn evaluate_vertex(lattice: &ControlLattice, vertex: &ParametricVertex) -> SurfaceVertex {
    let (position, frame) = evaluate_with_frame(lattice, vertex.coords);
    let normal = frame.transform(&vertex.normal).normalize();
    let normal = if normal == Vec3::ZERO { vertex.normal } else { normal };
    SurfaceVertex::new(position, normal)
}

/// Evaluates every parametric vertex into `out` (same length, same order).
///
/// Output slot `n` depends only on `params[n]` and the lattice, so the
/// `parallel` feature's rayon split gives identical results.
#[cfg(not(feature = "parallel"))]
pub fn evaluate_bulk(lattice: &ControlLattice, params: &[ParametricVertex], out: &mut [SurfaceVertex]) {
    debug_assert_eq!(params.len(), out.len(), "bulk evaluation length mismatch");
    for (slot, vertex) in out.iter_mut().zip(params) {
        *slot = evaluate_vertex(lattice, vertex);
    }
}

/// Evaluates every parametric vertex into `out` (same length, same order).
///
/// Output slot `n` depends only on `params[n]` and the lattice, so this
/// rayon split gives the same results as the sequential pass.
#[cfg(feature = "parallel")]
pub fn evaluate_bulk(lattice: &ControlLattice, params: &[ParametricVertex], out: &mut [SurfaceVertex]) {
    use rayon::prelude::*;
    debug_assert_eq!(params.len(), out.len(), "bulk evaluation length mismatch");
    out.par_iter_mut()
        .zip(params.par_iter())
        .for_each(|(slot, vertex)| *slot = evaluate_vertex(lattice, vertex));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bent_lattice() -> ControlLattice {
        let mut lat = ControlLattice::regular(Vec3::new(2.0, 1.0, 3.0));
        lat[index(1, 1, 1)] += Vec3::new(0.3, -0.2, 0.5);
        lat[index(2, 0, 1)] += Vec3::new(-0.1, 0.4, 0.0);
        lat[index(0, 2, 2)] += Vec3::new(0.2, 0.2, -0.3);
        lat
    }

    #[test]
    fn bernstein_weights_partition_unity() {
        for x in [0.0_f32, 0.25, 0.5, 0.8, 1.0] {
            let w = bernstein(x);
            assert!((w.iter().sum::<f32>() - 1.0).abs() < 1e-6);
            let d = bernstein_derivative(x);
            assert!(d.iter().sum::<f32>().abs() < 1e-6);
        }
    }

    #[test]
    fn regular_lattice_is_affine_identity() {
        let span = Vec3::new(2.0, 1.0, 3.0);
        let lat = ControlLattice::regular(span);
        let p = Vec3::new(0.3, 0.7, 0.1);
        let (pos, frame) = evaluate_with_frame(&lat, p);
        let expected = p.hadamard(&span);
        assert!(pos.distance_squared(&expected) < 1e-10);
        for col in 0..3 {
            for row in 0..3 {
                let want = if row == col { 1.0 } else { 0.0 };
                assert!((frame.at(row, col) - want).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn corners_interpolate_control_points() {
        let lat = bent_lattice();
        for (i, j, k) in [(0, 0, 0), (2, 0, 0), (0, 2, 0), (0, 0, 2), (2, 2, 2)] {
            let p = Vec3::new(i as f32 / 2.0, j as f32 / 2.0, k as f32 / 2.0);
            assert!(evaluate(&lat, p).distance_squared(&lat.at(i, j, k)) < 1e-10);
        }
    }

    #[test]
    fn fast_path_matches_reference_on_bent_lattice() {
        let lat = bent_lattice();
        for p in [
            Vec3::new(0.1, 0.2, 0.3),
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(0.9, 0.05, 0.6),
        ] {
            assert!(evaluate(&lat, p).distance_squared(&evaluate_reference(&lat, p)) < 1e-10);
            let (_, frame) = evaluate_with_frame(&lat, p);
            for axis in 0..3 {
                let reference = evaluate_reference_derivative(&lat, p, axis).normalize();
                assert!(frame.col(axis).distance_squared(&reference) < 1e-9);
            }
        }
    }

    #[test]
    fn bulk_matches_single_vertex_evaluation() {
        let lat = bent_lattice();
        let params: Vec<_> = (0..10)
            .map(|n| {
                let x = n as f32 / 9.0;
                ParametricVertex::new(Vec3::new(x, 1.0 - x, 0.5), Vec3::UNIT_Y)
            })
            .collect();
        let mut out = vec![SurfaceVertex::default(); params.len()];
        evaluate_bulk(&lat, &params, &mut out);
        for (v, p) in out.iter().zip(&params) {
            assert_eq!(*v, evaluate_vertex(&lat, p));
            assert!((v.normal.length() - 1.0).abs() < 1e-5);
        }
    }
}
