// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::Vec3;

/// Stateful `xoroshiro128+` pseudo-random number generator.
///
/// * Not cryptographically secure; used for scene placement only.
/// * Always passed explicitly into the calls that need randomness; the
///   physics step itself never draws random numbers.
/// * Matching seeds yield identical sequences across supported platforms.
#[derive(Debug, Clone, Copy)]
pub struct Prng {
    state: [u64; 2],
}

impl Prng {
    /// Constructs a PRNG from two 64-bit seeds.
    pub fn from_seed(seed0: u64, seed1: u64) -> Self {
        let mut state = [seed0, seed1];
        if state[0] == 0 && state[1] == 0 {
            state[0] = 0x9e37_79b9_7f4a_7c15;
        }
        Self { state }
    }

    /// Constructs a PRNG from a single 64-bit seed via SplitMix64 expansion.
    pub fn from_seed_u64(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm_state = seed;
        Self::from_seed(splitmix64(&mut sm_state), splitmix64(&mut sm_state))
    }

    fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }

    /// Returns the next float in `[0, 1)`.
    ///
    /// Uses the high 23 bits of the state to fill the mantissa.
    pub fn next_f32(&mut self) -> f32 {
        let raw = self.next_u64();
        let bits = ((raw >> 41) as u32) | 0x3f80_0000;
        f32::from_bits(bits) - 1.0
    }

    /// Returns the next float in `[min, max)`.
    pub fn next_range(&mut self, min: f32, max: f32) -> f32 {
        debug_assert!(min <= max, "invalid range: {min}..{max}");
        min + (max - min) * self.next_f32()
    }

    /// Returns a vector whose components are drawn independently from
    /// `[min[i], max[i])`.
    pub fn next_vec3(&mut self, min: Vec3, max: Vec3) -> Vec3 {
        let x = self.next_range(min.x(), max.x());
        let y = self.next_range(min.y(), max.y());
        let z = self.next_range(min.z(), max.z());
        Vec3::new(x, y, z)
    }
}
