// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Contiguous row-block partitioning.
//!
//! # Block Sizing
//!
//! ```text
//! base      = n_rows / p
//! remainder = n_rows % p
//! block i   = base + 1   if i < remainder
//!             base       otherwise
//! ```
//!
//! Blocks are emitted in increasing row order and tile `[0, n_rows)` exactly,
//! so any two blocks differ in size by at most one row. The merge step's
//! tie-break depends on this ordering; do not reorder the output.

use std::fmt;
use std::num::NonZeroUsize;

use tracing::warn;

use crate::error::PartitionError;

/// Half-open span of rows `[start, end)` assigned to one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowRange {
    /// First row (inclusive).
    pub start: usize,
    /// One past the last row.
    pub end: usize,
}

impl RowRange {
    /// Creates `[start, end)`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of rows covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True when the range covers no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for RowRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Splits `n_rows` rows into `p` contiguous blocks.
///
/// # Errors
///
/// - [`PartitionError::NoRows`] when `n_rows == 0`.
/// - [`PartitionError::InvalidWorkers`] when `p == 0` or `p > n_rows`; both
///   would create blocks with no rows. Resolve `p` with [`resolve_workers`]
///   first.
pub fn partition(n_rows: usize, p: usize) -> Result<Vec<RowRange>, PartitionError> {
    if n_rows == 0 {
        return Err(PartitionError::NoRows);
    }
    if p == 0 || p > n_rows {
        return Err(PartitionError::InvalidWorkers {
            workers: p,
            rows: n_rows,
        });
    }

    let base = n_rows / p;
    let remainder = n_rows % p;

    let mut ranges = Vec::with_capacity(p);
    let mut start = 0;
    for block in 0..p {
        let size = base + usize::from(block < remainder);
        let end = start + size;
        ranges.push(RowRange { start, end });
        start = end;
    }

    Ok(ranges)
}

/// Number of hardware threads, or 1 when the platform cannot tell.
pub fn available_parallelism() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

/// Resolves the block/worker count for a grid with `n_rows` rows.
///
/// - `None` or `Some(0)` resolves to `min(available_parallelism(), n_rows)`.
/// - A request larger than `n_rows` is clamped to `n_rows`.
///
/// Always returns a value in `1..=n_rows.max(1)`.
pub fn resolve_workers(requested: Option<usize>, n_rows: usize) -> usize {
    resolve_workers_with(requested, n_rows, available_parallelism())
}

pub(crate) fn resolve_workers_with(requested: Option<usize>, n_rows: usize, cpus: usize) -> usize {
    let rows = n_rows.max(1);
    match requested {
        Some(p) if p > rows => {
            warn!(requested = p, rows, "worker count exceeds row count; clamping");
            rows
        }
        Some(p) if p >= 1 => p,
        _ => cpus.clamp(1, rows),
    }
}
