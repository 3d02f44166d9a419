// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Stateful `xoroshiro128+` pseudo-random number generator for reproducible grids.
///
/// * Not cryptographically secure; use only for synthetic workloads.
/// * Matching seeds yield identical sequences across supported platforms.
#[derive(Debug, Clone, Copy)]
pub struct Prng {
    state: [u64; 2],
}

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

impl Prng {
    /// Constructs a PRNG from a single 64-bit seed via SplitMix64 expansion.
    pub fn from_seed_u64(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(GOLDEN_GAMMA);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm_state = seed;
        let mut state = [splitmix64(&mut sm_state), splitmix64(&mut sm_state)];
        if state[0] == 0 && state[1] == 0 {
            state[0] = GOLDEN_GAMMA;
        }
        Self { state }
    }

    /// Returns the next raw 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }

    /// Returns the next integer in `[0, bound)`.
    ///
    /// Uses rejection sampling to avoid modulo bias. A `bound` of 0 or 1
    /// always yields 0.
    pub fn next_below(&mut self, bound: u32) -> u32 {
        if bound <= 1 {
            return 0;
        }
        let span = u64::from(bound);
        let limit = u64::MAX - u64::MAX % span;
        loop {
            let candidate = self.next_u64();
            if candidate < limit {
                // candidate % span < bound, which fits in u32.
                #[allow(clippy::cast_possible_truncation)]
                return (candidate % span) as u32;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Prng::from_seed_u64(12345);
        let mut b = Prng::from_seed_u64(12345);
        for _ in 0..64 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn seed_12345_golden_sequence() {
        let mut prng = Prng::from_seed_u64(12345);
        let values: Vec<u64> = (0..4).map(|_| prng.next_u64()).collect();
        assert_eq!(
            values,
            vec![
                0x5680_5f3e_a0e5_0a8d,
                0xfdef_969e_30bb_2d9a,
                0xed2a_bf61_42ca_1a8a,
                0xd119_96bc_866e_e6f9,
            ]
        );
    }

    #[test]
    fn seed_12345_golden_bounded_draws() {
        let mut prng = Prng::from_seed_u64(12345);
        let values: Vec<u32> = (0..10).map(|_| prng.next_below(1000)).collect();
        assert_eq!(values, vec![541, 34, 634, 105, 307, 71, 492, 476, 212, 208]);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Prng::from_seed_u64(1);
        let mut b = Prng::from_seed_u64(2);
        let xs: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn next_below_stays_in_range() {
        let mut prng = Prng::from_seed_u64(0xDEAD_BEEF);
        for _ in 0..10_000 {
            assert!(prng.next_below(1000) < 1000);
        }
    }

    #[test]
    fn next_below_degenerate_bounds() {
        let mut prng = Prng::from_seed_u64(7);
        assert_eq!(prng.next_below(0), 0);
        assert_eq!(prng.next_below(1), 0);
    }

    #[test]
    fn zero_seed_is_usable() {
        let mut prng = Prng::from_seed_u64(0);
        assert_eq!(prng.next_u64(), 0x5099_46a4_1cd7_33a3);
        assert_eq!(prng.next_u64(), 0x0088_5667_b193_4bfa);
    }
}
