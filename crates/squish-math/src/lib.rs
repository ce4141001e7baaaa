// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Deterministic math helpers for the Squish simulation core: vectors,
//! orientation frames, instance transforms, and a timeline-friendly PRNG.
//!
//! All operations round to `f32` so repeated evaluation of identical inputs
//! yields bit-identical results. Nothing here owns global state; random
//! numbers come from a [`Prng`] handle the caller threads through.
#![forbid(unsafe_code)]

mod mat3;
mod mat4;
mod prng;
mod vec3;

pub use mat3::Mat3;
pub use mat4::Mat4;
pub use prng::Prng;
pub use vec3::Vec3;

/// Global epsilon used by math routines when detecting degenerate values.
pub const EPSILON: f32 = 1e-6;

/// Clamps `value` to the inclusive `[min, max]` range using float32 rounding.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Returns `true` when `a` and `b` differ by at most `tolerance`.
pub fn approx_eq(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limits_both_sides() {
        assert_eq!(clamp(-3.0, -1.0, 1.0), -1.0);
        assert_eq!(clamp(3.0, -1.0, 1.0), 1.0);
        assert_eq!(clamp(0.25, -1.0, 1.0), 0.25);
    }

    #[test]
    fn approx_eq_respects_tolerance() {
        assert!(approx_eq(1.0, 1.0 + 1e-5, 1e-4));
        assert!(!approx_eq(1.0, 1.1, 1e-4));
    }
}
