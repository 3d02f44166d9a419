// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Row-major max scan shared by the serial baseline and every worker.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::info;

use super::partition::RowRange;
use crate::error::PartitionError;
use crate::grid::{Cell, Grid};

/// A maximal cell: `grid[row][col] == value`.
///
/// Among equal maxima the row-major first occurrence wins (smallest `row`,
/// then smallest `col`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrightnessResult {
    /// Maximum brightness.
    pub value: Cell,
    /// Row of the first cell holding `value`.
    pub row: usize,
    /// Column of the first cell holding `value` within `row`.
    pub col: usize,
}

impl BrightnessResult {
    /// Creates a result triple.
    pub fn new(value: Cell, row: usize, col: usize) -> Self {
        Self { value, row, col }
    }
}

impl fmt::Display for BrightnessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at ({}, {})", self.value, self.row, self.col)
    }
}

/// A value paired with the wall-clock time spent producing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timed<T> {
    /// Time spent.
    pub elapsed: Duration,
    /// What was produced.
    pub value: T,
}

/// Scans rows `range.start..range.end` and returns their maximal cell.
///
/// Rows are visited in order, each left to right. The running maximum starts
/// at the first cell of the range and only moves on a strictly greater value,
/// which keeps the first occurrence on ties.
///
/// # Errors
///
/// [`PartitionError::RangeOutOfBounds`] if `range` is empty or extends past
/// the last row.
pub fn reduce_range(grid: &Grid, range: RowRange) -> Result<BrightnessResult, PartitionError> {
    if range.is_empty() || range.end > grid.height() {
        return Err(PartitionError::RangeOutOfBounds {
            start: range.start,
            end: range.end,
            height: grid.height(),
        });
    }
    Ok(max_in_rows(grid, range))
}

/// Serial baseline: one timed row-major pass over the whole grid.
pub fn scan(grid: &Grid) -> Timed<BrightnessResult> {
    let start = Instant::now();
    let result = max_in_rows(grid, RowRange::new(0, grid.height()));
    let elapsed = start.elapsed();

    info!(
        value = result.value,
        row = result.row,
        col = result.col,
        elapsed_s = elapsed.as_secs_f64(),
        "serial scan complete"
    );
    Timed {
        elapsed,
        value: result,
    }
}

// `range` must be non-empty and inside the grid.
fn max_in_rows(grid: &Grid, range: RowRange) -> BrightnessResult {
    let mut best = BrightnessResult {
        value: grid.get(range.start, 0).unwrap_or_default(),
        row: range.start,
        col: 0,
    };

    for (row, values) in grid
        .rows()
        .enumerate()
        .skip(range.start)
        .take(range.len())
    {
        for (col, &value) in values.iter().enumerate() {
            if value > best.value {
                best = BrightnessResult { value, row, col };
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: Vec<Vec<Cell>>) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn first_occurrence_wins_on_ties() {
        let g = grid(vec![vec![3, 7], vec![7, 2]]);
        assert_eq!(scan(&g).value, BrightnessResult::new(7, 0, 1));
        assert_eq!(
            reduce_range(&g, RowRange::new(0, 2)).unwrap(),
            BrightnessResult::new(7, 0, 1)
        );
    }

    #[test]
    fn range_result_uses_absolute_rows() {
        let g = grid(vec![vec![9, 0], vec![1, 4], vec![4, 2]]);
        assert_eq!(
            reduce_range(&g, RowRange::new(1, 3)).unwrap(),
            BrightnessResult::new(4, 1, 1)
        );
        assert_eq!(
            reduce_range(&g, RowRange::new(2, 3)).unwrap(),
            BrightnessResult::new(4, 2, 0)
        );
    }

    #[test]
    fn all_equal_cells_report_range_origin() {
        let g = grid(vec![vec![5; 3]; 4]);
        assert_eq!(
            reduce_range(&g, RowRange::new(2, 4)).unwrap(),
            BrightnessResult::new(5, 2, 0)
        );
        assert_eq!(scan(&g).value, BrightnessResult::new(5, 0, 0));
    }

    #[test]
    fn single_cell_grid() {
        let g = grid(vec![vec![42]]);
        assert_eq!(scan(&g).value, BrightnessResult::new(42, 0, 0));
        assert_eq!(
            reduce_range(&g, RowRange::new(0, 1)).unwrap(),
            BrightnessResult::new(42, 0, 0)
        );
    }

    #[test]
    fn zero_valued_grid() {
        let g = grid(vec![vec![0, 0], vec![0, 0]]);
        assert_eq!(scan(&g).value, BrightnessResult::new(0, 0, 0));
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        let g = grid(vec![vec![1], vec![2]]);
        assert_eq!(
            reduce_range(&g, RowRange::new(1, 1)),
            Err(PartitionError::RangeOutOfBounds {
                start: 1,
                end: 1,
                height: 2
            })
        );
        assert!(reduce_range(&g, RowRange::new(1, 3)).is_err());
    }

    #[test]
    fn scan_is_idempotent() {
        let g = grid(vec![vec![1, 8, 3], vec![8, 8, 0]]);
        let first = scan(&g).value;
        for _ in 0..5 {
            assert_eq!(scan(&g).value, first);
        }
    }
}
