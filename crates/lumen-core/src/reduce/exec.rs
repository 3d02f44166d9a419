// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Parallel reduction orchestrator.
//!
//! Resolves the worker count, partitions rows into contiguous blocks, fans
//! the blocks out through a [`ParallelMap`], and merges the partials in block
//! order. Only dispatch and collection are timed.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use tracing::{debug, info, info_span};

use super::backend::{ParallelMap, RayonPool, ScopedThreads};
use super::kernel::{reduce_range, BrightnessResult};
use super::merge::{merge_partials, PartialMax};
use super::partition::{partition, resolve_workers, RowRange};
use crate::error::{PartitionError, ReduceError};
use crate::grid::Grid;

/// Which execution substrate runs the workers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Backend {
    /// One scoped OS thread per block ([`ScopedThreads`]).
    #[default]
    Threads,
    /// A dedicated rayon pool with one thread per block ([`RayonPool`]).
    Rayon,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Threads => f.write_str("threads"),
            Backend::Rayon => f.write_str("rayon"),
        }
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "threads" => Ok(Backend::Threads),
            "rayon" => Ok(Backend::Rayon),
            other => Err(format!("unknown backend {other:?} (expected threads|rayon)")),
        }
    }
}

/// Result of one parallel reduction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallelOutcome {
    /// Time spent in dispatch and collection.
    pub elapsed: Duration,
    /// Number of workers (and blocks) used.
    pub workers: usize,
    /// Global maximum.
    pub result: BrightnessResult,
}

/// Fan-out/fan-in reducer over a chosen [`Backend`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ParallelReducer {
    backend: Backend,
}

impl ParallelReducer {
    /// Creates a reducer that dispatches through `backend`.
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Reduces `grid` with `workers` workers.
    ///
    /// `None`, `Some(0)` and oversized requests are resolved by
    /// [`resolve_workers`](super::resolve_workers).
    ///
    /// # Errors
    ///
    /// Any worker failure fails the whole reduction; no partial result is
    /// ever returned.
    pub fn reduce(
        &self,
        grid: &Grid,
        workers: Option<usize>,
    ) -> Result<ParallelOutcome, ReduceError> {
        self.reduce_with(grid, workers, reduce_range)
    }

    pub(crate) fn reduce_with<K>(
        &self,
        grid: &Grid,
        workers: Option<usize>,
        kernel: K,
    ) -> Result<ParallelOutcome, ReduceError>
    where
        K: Fn(&Grid, RowRange) -> Result<BrightnessResult, PartitionError> + Sync,
    {
        let workers = resolve_workers(workers, grid.height());
        let ranges = partition(grid.height(), workers)?;

        let span = info_span!(
            "reduce_parallel",
            backend = %self.backend,
            workers,
            height = grid.height(),
            width = grid.width()
        );
        let _enter = span.enter();

        let work = |range: RowRange| kernel(grid, range).map_err(ReduceError::from);

        let start = Instant::now();
        let partials = match self.backend {
            Backend::Threads => ScopedThreads.map_blocks(&ranges, work),
            Backend::Rayon => RayonPool.map_blocks(&ranges, work),
        }?;
        let elapsed = start.elapsed();

        let result = merge_checked(&partials, ranges.len())?;

        info!(
            value = result.value,
            row = result.row,
            col = result.col,
            elapsed_s = elapsed.as_secs_f64(),
            "parallel reduction complete"
        );
        Ok(ParallelOutcome {
            elapsed,
            workers,
            result,
        })
    }
}

fn merge_checked(partials: &[PartialMax], expected: usize) -> Result<BrightnessResult, ReduceError> {
    if partials.len() != expected {
        return Err(ReduceError::MissingPartials {
            expected,
            collected: partials.len(),
        });
    }
    for p in partials {
        debug!(
            block = p.block,
            range = %p.range,
            value = p.result.value,
            row = p.result.row,
            col = p.result.col,
            "block reduced"
        );
    }
    merge_partials(partials).ok_or(ReduceError::MissingPartials {
        expected,
        collected: 0,
    })
}

/// Reduces `grid` in parallel on the default backend.
///
/// See [`ParallelReducer::reduce`].
pub fn reduce_parallel(
    grid: &Grid,
    workers: Option<usize>,
) -> Result<ParallelOutcome, ReduceError> {
    ParallelReducer::default().reduce(grid, workers)
}
