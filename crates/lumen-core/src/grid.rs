// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Immutable rectangular brightness grid.

use std::fmt;

use crate::error::GridError;

/// Brightness value of a single cell.
pub type Cell = u32;

/// Row-major, rectangular grid of brightness values.
///
/// # Invariants
///
/// - `height >= 1` and `width >= 1`.
/// - `cells.len() == height * width`.
///
/// A `Grid` has no mutating API once built, so a shared `&Grid` is safe to
/// hand to any number of concurrent readers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from nested rows.
    ///
    /// Fails if there are no rows, the first row is empty, or any row differs
    /// in length from the first.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::Empty { height, width });
        }

        let mut cells = Vec::with_capacity(height * width);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(GridError::Ragged {
                    row,
                    len: values.len(),
                    width,
                });
            }
            cells.extend(values);
        }

        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Builds a grid from a flat row-major buffer.
    pub fn from_vec(height: usize, width: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::Empty { height, width });
        }
        if height.checked_mul(width) != Some(cells.len()) {
            return Err(GridError::Shape {
                height,
                width,
                len: cells.len(),
            });
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Value at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells.get(row * self.width + col).copied()
    }

    /// Row `row` as a slice, or `None` when out of bounds.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        self.cells.get(start..start + self.width)
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// The whole grid as a flat row-major slice.
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }
}

/// Prints one row per line, each value right-aligned in four columns.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value:4}")?;
            }
        }
        Ok(())
    }
}
