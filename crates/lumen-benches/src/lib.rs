// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared fixtures for lumen benchmarks.

use lumen_core::{Grid, GridError, GridSource, SeededGridSource};

/// Seed used by every benchmark grid.
pub const BENCH_SEED: u64 = 0x5EED_B417;

/// Square grid sides benchmarked by default.
pub const GRID_SIDES: &[usize] = &[64, 512, 2048];

/// Worker counts swept by the scaling benchmark.
pub const WORKER_COUNTS: &[usize] = &[1, 2, 4, 8, 16];

/// Deterministic `side` x `side` benchmark grid.
pub fn bench_grid(side: usize) -> Result<Grid, GridError> {
    SeededGridSource::new(BENCH_SEED).generate(side, side)
}
