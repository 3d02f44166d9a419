// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error taxonomy for grid construction, partitioning and reduction.
//!
//! Every failure is either absorbed by a documented fallback
//! ([`WorkerCountError`], recovered by the worker-count resolver) or escalated
//! to the caller. There are no retries anywhere.

use thiserror::Error;

use crate::consistency::ConsistencyMismatch;
use crate::reduce::RowRange;

/// Errors raised while building or reading a [`Grid`](crate::Grid).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one row and one column.
    #[error("grid must be at least 1x1, got {height}x{width}")]
    Empty {
        /// Requested or observed row count.
        height: usize,
        /// Requested or observed column count.
        width: usize,
    },

    /// A row does not have the same length as the first row.
    #[error("row {row} has {len} cells, expected {width}")]
    Ragged {
        /// Offending row index.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Width established by row 0.
        width: usize,
    },

    /// Flat buffer length does not match `height * width`.
    #[error("buffer holds {len} cells, expected {height}x{width}")]
    Shape {
        /// Declared row count.
        height: usize,
        /// Declared column count.
        width: usize,
        /// Actual buffer length.
        len: usize,
    },
}

/// Precondition violations caught by [`partition`](crate::partition).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionError {
    /// There are no rows to partition.
    #[error("cannot partition an empty grid (n_rows = 0)")]
    NoRows,

    /// Worker count is zero or larger than the number of rows, which would
    /// produce empty blocks.
    #[error("worker count {workers} is outside 1..={rows}")]
    InvalidWorkers {
        /// Requested block count.
        workers: usize,
        /// Rows available.
        rows: usize,
    },

    /// A row range does not fit inside the grid.
    #[error("row range {start}..{end} is empty or exceeds height {height}")]
    RangeOutOfBounds {
        /// Range start (inclusive).
        start: usize,
        /// Range end (exclusive).
        end: usize,
        /// Grid height.
        height: usize,
    },
}

/// A worker-count override that could not be used.
///
/// Never fatal: the resolver logs it and falls back to the computed default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkerCountError {
    /// The override is not a base-10 unsigned integer.
    #[error("worker override {0:?} is not a positive integer")]
    NotANumber(String),

    /// The override parsed to zero.
    #[error("worker override must be at least 1")]
    Zero,
}

/// Failures of the parallel reduction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReduceError {
    /// Partitioning precondition violated.
    #[error(transparent)]
    Partition(#[from] PartitionError),

    /// A dispatched worker did not produce a result.
    #[error("worker for block {block} (rows {range}) failed: {reason}")]
    WorkerFailure {
        /// Index of the block in dispatch order.
        block: usize,
        /// Rows the worker was assigned.
        range: RowRange,
        /// Panic message or other failure description.
        reason: String,
    },

    /// The execution substrate could not be provisioned.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),

    /// The substrate returned a different number of results than blocks
    /// dispatched.
    #[error("expected {expected} partial results, collected {collected}")]
    MissingPartials {
        /// Blocks dispatched.
        expected: usize,
        /// Results collected.
        collected: usize,
    },
}

/// Top-level error for [`run`](crate::run).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LumenError {
    /// Grid source produced an unusable grid.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Parallel reduction failed.
    #[error(transparent)]
    Reduce(#[from] ReduceError),

    /// Serial and parallel strategies disagree.
    #[error(transparent)]
    Consistency(#[from] ConsistencyMismatch),
}
