// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Grid producers.

use crate::error::GridError;
use crate::grid::{Cell, Grid};
use crate::prng::Prng;

/// Exclusive upper bound for generated brightness values.
pub const BRIGHTNESS_LIMIT: Cell = 1000;

/// Produces grids for a reduction run.
///
/// Implementations must be deterministic: identical inputs yield identical
/// grids.
pub trait GridSource {
    /// Produces a `height` x `width` grid.
    fn generate(&self, height: usize, width: usize) -> Result<Grid, GridError>;
}

/// Fills a grid row-major with values uniformly drawn from
/// `[0, BRIGHTNESS_LIMIT)` by a [`Prng`] seeded from `seed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeededGridSource {
    seed: u64,
}

impl SeededGridSource {
    /// Creates a source for `seed`.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// The seed this source draws from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl GridSource for SeededGridSource {
    fn generate(&self, height: usize, width: usize) -> Result<Grid, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::Empty { height, width });
        }
        let len = height
            .checked_mul(width)
            .ok_or(GridError::Shape {
                height,
                width,
                len: usize::MAX,
            })?;

        let mut prng = Prng::from_seed_u64(self.seed);
        let cells = (0..len)
            .map(|_| prng.next_below(BRIGHTNESS_LIMIT))
            .collect();
        Grid::from_vec(height, width, cells)
    }
}

/// Replays a hand-built grid; requested dimensions must match it.
#[derive(Clone, Debug)]
pub struct FixedGridSource {
    grid: Grid,
}

impl FixedGridSource {
    /// Wraps `grid`.
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }
}

impl GridSource for FixedGridSource {
    fn generate(&self, height: usize, width: usize) -> Result<Grid, GridError> {
        if height != self.grid.height() || width != self.grid.width() {
            return Err(GridError::Shape {
                height,
                width,
                len: self.grid.as_slice().len(),
            });
        }
        Ok(self.grid.clone())
    }
}
