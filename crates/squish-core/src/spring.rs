// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Closed-form damped harmonic oscillator.
//!
//! Each control point's displacement from rest obeys `x'' + 2ηω x' + ω² x = 0`.
//! The exact solution is linear in the initial state, so one step reduces to
//! four scalar coefficients:
//!
//! ```text
//! x(dt) = a·x0 + b·v0
//! v(dt) = c·x0 + d·v0
//! ```
//!
//! applied componentwise. Zero displacement and zero velocity therefore stay
//! exactly zero.

use squish_math::Vec3;

/// Damping ratios within this distance of 1 use the critically damped form.
const CRITICAL_BAND: f32 = 1e-4;

/// Damping regime selected by the damping ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DampingRegime {
    /// `η < 1`: decaying oscillation.
    Underdamped,
    /// `η ≈ 1`: fastest non-oscillating return.
    Critical,
    /// `η > 1`: slow non-oscillating return.
    Overdamped,
}

/// Per-step propagation coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringStep {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
}

impl SpringStep {
    const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
    };

    /// Advances `(displacement, velocity)` by the step this was built for.
    #[inline]
    pub fn apply(&self, x0: Vec3, v0: Vec3) -> (Vec3, Vec3) {
        (x0.scale(self.a) + v0.scale(self.b), x0.scale(self.c) + v0.scale(self.d))
    }
}

/// A spring with natural angular frequency `omega` and damping ratio `eta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringDamper {
    omega: f32,
    eta: f32,
}

impl SpringDamper {
    /// Creates a spring. Callers validate `omega > 0` and `eta ≥ 0`.
    pub const fn new(omega: f32, eta: f32) -> Self {
        Self { omega, eta }
    }

    /// Natural angular frequency.
    pub const fn omega(&self) -> f32 {
        self.omega
    }

    /// Damping ratio.
    pub const fn eta(&self) -> f32 {
        self.eta
    }

    /// Regime for this damping ratio.
    pub fn regime(&self) -> DampingRegime {
        if self.eta < 1.0 - CRITICAL_BAND {
            DampingRegime::Underdamped
        } else if self.eta > 1.0 + CRITICAL_BAND {
            DampingRegime::Overdamped
        } else {
            DampingRegime::Critical
        }
    }

    /// Coefficients for a step of `dt`. Non-positive or non-finite `dt`
    /// yields the identity step.
    pub fn coefficients(&self, dt: f32) -> SpringStep {
        if !(dt > 0.0) || !dt.is_finite() {
            return SpringStep::IDENTITY;
        }
        let (w, eta) = (self.omega, self.eta);
        match self.regime() {
            DampingRegime::Underdamped => {
                let alpha = w * (1.0 - eta * eta).sqrt();
                let decay = (-eta * w * dt).exp();
                let (sin, cos) = (alpha * dt).sin_cos();
                SpringStep {
                    a: decay * (cos + eta * w / alpha * sin),
                    b: decay * sin / alpha,
                    c: -decay * w * w / alpha * sin,
                    d: decay * (cos - eta * w / alpha * sin),
                }
            }
            DampingRegime::Critical => {
                let decay = (-w * dt).exp();
                SpringStep {
                    a: decay * (1.0 + w * dt),
                    b: decay * dt,
                    c: -decay * w * w * dt,
                    d: decay * (1.0 - w * dt),
                }
            }
            DampingRegime::Overdamped => {
                let root = (eta * eta - 1.0).sqrt();
                let r1 = -w * (eta - root);
                let r2 = -w * (eta + root);
                let (e1, e2) = ((r1 * dt).exp(), (r2 * dt).exp());
                let inv = 1.0 / (r1 - r2);
                SpringStep {
                    a: (r1 * e2 - r2 * e1) * inv,
                    b: (e1 - e2) * inv,
                    c: r1 * r2 * (e2 - e1) * inv,
                    d: (r1 * e1 - r2 * e2) * inv,
                }
            }
        }
    }

    /// Advances one control point's displacement and velocity by `dt`.
    pub fn step(&self, displacement: Vec3, velocity: Vec3, dt: f32) -> (Vec3, Vec3) {
        self.coefficients(dt).apply(displacement, velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-4 * (1.0 + b.abs())
    }

    #[test]
    fn rest_state_is_a_fixed_point() {
        for eta in [0.0, 0.35, 1.0, 2.5] {
            let spring = SpringDamper::new(12.0, eta);
            for dt in [0.0, 1e-4, 0.016, 1.0, 1e6] {
                assert_eq!(spring.step(Vec3::ZERO, Vec3::ZERO, dt), (Vec3::ZERO, Vec3::ZERO));
            }
        }
    }

    #[test]
    fn underdamped_matches_closed_form() {
        let spring = SpringDamper::new(12.0, 0.35);
        assert_eq!(spring.regime(), DampingRegime::Underdamped);
        let (x0, v0, t) = (1.0_f32, 2.0_f32, 0.1_f32);
        let alpha = 12.0 * (1.0_f32 - 0.35 * 0.35).sqrt();
        let e = (-0.35_f32 * 12.0 * t).exp();
        let want_x = e * (x0 * (alpha * t).cos() + (v0 + 0.35 * 12.0 * x0) / alpha * (alpha * t).sin());
        let want_v = e * (v0 * (alpha * t).cos() - (144.0 * x0 + 0.35 * 12.0 * v0) / alpha * (alpha * t).sin());
        let (x, v) = spring.step(Vec3::splat(x0), Vec3::splat(v0), t);
        assert!(close(x.x(), want_x), "{} vs {want_x}", x.x());
        assert!(close(v.y(), want_v), "{} vs {want_v}", v.y());
    }

    #[test]
    fn critical_matches_closed_form() {
        let spring = SpringDamper::new(5.0, 1.0);
        assert_eq!(spring.regime(), DampingRegime::Critical);
        let (x0, v0, t) = (0.5_f32, -1.0_f32, 0.2_f32);
        let e = (-5.0_f32 * t).exp();
        let want_x = (x0 + (v0 + 5.0 * x0) * t) * e;
        let want_v = (v0 - 5.0 * (v0 + 5.0 * x0) * t) * e;
        let (x, v) = spring.step(Vec3::new(x0, 0.0, 0.0), Vec3::new(v0, 0.0, 0.0), t);
        assert!(close(x.x(), want_x));
        assert!(close(v.x(), want_v));
    }

    #[test]
    fn every_regime_starts_at_identity_and_decays() {
        for eta in [0.2, 1.0, 3.0] {
            let spring = SpringDamper::new(8.0, eta);
            let step = spring.coefficients(1e-7);
            assert!(close(step.a, 1.0) && close(step.d, 1.0));
            let (x, v) = spring.step(Vec3::UNIT_X, Vec3::ZERO, 5.0);
            assert!(x.length() < 1e-2, "eta {eta}: x = {x:?}");
            assert!(v.length() < 1e-1, "eta {eta}: v = {v:?}");
        }
    }

    #[test]
    fn split_steps_compose() {
        let spring = SpringDamper::new(12.0, 0.35);
        let (x0, v0) = (Vec3::new(0.2, -0.1, 0.05), Vec3::new(1.0, 0.0, -0.5));
        let (x1, v1) = spring.step(x0, v0, 0.02);
        let (xa, va) = spring.step(x0, v0, 0.01);
        let (x2, v2) = spring.step(xa, va, 0.01);
        assert!(x1.distance_squared(&x2) < 1e-10);
        assert!(v1.distance_squared(&v2) < 1e-8);
    }
}
