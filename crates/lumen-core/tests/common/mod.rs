// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use lumen_core::{Backend, Grid, GridSource, SeededGridSource};

/// Useful seed set for determinism drills.
pub const SEEDS: &[u64] = &[
    0x0000_0000_0000_0001,
    0x0000_0000_0000_3039, // 12345, the reference run
    0x1234_5678_9ABC_DEF0,
    0xDEAD_BEEF_CAFE_BABE,
    0x0F0F_0F0F_F0F0_F0F0,
];

/// Worker counts to prove results don't depend on the machine's CPU count.
pub const WORKER_COUNTS: &[usize] = &[1, 2, 3, 4, 7, 8, 16, 32];

/// Every execution substrate.
pub const BACKENDS: &[Backend] = &[Backend::Threads, Backend::Rayon];

/// Seeded grid; panics on zero dimensions.
pub fn seeded_grid(seed: u64, height: usize, width: usize) -> Grid {
    SeededGridSource::new(seed)
        .generate(height, width)
        .expect("seeded grid")
}

/// Grid from nested rows; panics if ragged.
pub fn grid(rows: Vec<Vec<u32>>) -> Grid {
    Grid::from_rows(rows).expect("rectangular grid")
}
