// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Stateful `xoroshiro128+` pseudo-random number generator.
///
/// * Not cryptographically secure; use only for procedural generation and
///   simulation.
/// * Each consumer (maze carving, open-cell sampling, obstacle scattering)
///   owns its own instance, so draws in one never perturb another.
/// * Matching seeds yield identical sequences on every supported platform.
#[derive(Debug, Clone, Copy)]
pub struct Prng {
    state: [u64; 2],
}

/// Replacement state used when a seed would leave the generator all-zero.
const NONZERO_STATE: u64 = 0x9e37_79b9_7f4a_7c15;

impl Prng {
    /// Constructs a PRNG from two raw 64-bit state words.
    fn from_seed(seed0: u64, seed1: u64) -> Self {
        let mut state = [seed0, seed1];
        if state == [0, 0] {
            state[0] = NONZERO_STATE;
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
        let first = splitmix64(&mut sm_state);
        let second = splitmix64(&mut sm_state);
        Self::from_seed(first, second)
    }

    /// Returns the next raw 64-bit output.
    fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }

    /// Returns a uniform value in `[0, bound)`.
    ///
    /// Power-of-two bounds are masked; other bounds use rejection sampling so
    /// no value is favoured by modulo bias. A bound of `0` or `1` yields `0`
    /// without advancing the generator.
    pub fn next_below(&mut self, bound: u64) -> u64 {
        if bound <= 1 {
            return 0;
        }
        if bound.is_power_of_two() {
            return self.next_u64() & (bound - 1);
        }
        let limit = u64::MAX - u64::MAX % bound;
        loop {
            let candidate = self.next_u64();
            if candidate < limit {
                break candidate % bound;
            }
        }
    }

    /// Returns a uniform index in `[0, len)`; `len == 0` yields `0`.
    pub fn next_index(&mut self, len: usize) -> usize {
        let value = self.next_below(u64::try_from(len).unwrap_or(u64::MAX));
        usize::try_from(value).unwrap_or(0)
    }
}
