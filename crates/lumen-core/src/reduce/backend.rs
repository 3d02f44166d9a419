// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Execution substrates for the fan-out/fan-in round.
//!
//! A [`ParallelMap`] runs one work call per [`RowRange`] on its own execution
//! unit, waits for every unit (the join barrier), and hands back results
//! tagged with their originating block.
//!
//! # Thread Safety
//!
//! - `work` is `Fn + Sync`: every unit borrows the same closure.
//! - The grid is only ever reached through `&Grid` captured by `work`.
//! - Each unit owns its accumulator; nothing mutable is shared.
//!
//! # Failure
//!
//! A panicking unit is caught at the barrier and reported as
//! [`ReduceError::WorkerFailure`]. All units are joined before any error is
//! returned, and the first failure in block order wins.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use rayon::prelude::*;

use super::kernel::BrightnessResult;
use super::merge::PartialMax;
use super::partition::RowRange;
use crate::error::ReduceError;

/// Capability to map row ranges to partial maxima in parallel.
pub trait ParallelMap {
    /// Runs `work` once per range, one execution unit per range.
    ///
    /// The returned partials are tagged with the index of their range in
    /// `ranges`; their order in the vector carries no meaning.
    fn map_blocks<F>(&self, ranges: &[RowRange], work: F) -> Result<Vec<PartialMax>, ReduceError>
    where
        F: Fn(RowRange) -> Result<BrightnessResult, ReduceError> + Sync;
}

/// One scoped OS thread per block.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScopedThreads;

impl ParallelMap for ScopedThreads {
    fn map_blocks<F>(&self, ranges: &[RowRange], work: F) -> Result<Vec<PartialMax>, ReduceError>
    where
        F: Fn(RowRange) -> Result<BrightnessResult, ReduceError> + Sync,
    {
        let work = &work;

        std::thread::scope(|s| {
            // Collecting spawns every worker before the first join; joining
            // lazily would run the blocks one after another.
            #[allow(clippy::needless_collect)]
            let handles: Vec<_> = ranges
                .iter()
                .copied()
                .enumerate()
                .map(|(block, range)| {
                    let handle = std::thread::Builder::new()
                        .name(format!("lumen-worker-{block}"))
                        .spawn_scoped(s, move || work(range));
                    (block, range, handle)
                })
                .collect();

            // Barrier: every handle is joined before anything is returned.
            let outcomes: Vec<_> = handles
                .into_iter()
                .map(|(block, range, handle)| {
                    let joined = match handle {
                        Ok(h) => h.join(),
                        Err(e) => return Err(ReduceError::ThreadPool(e.to_string())),
                    };
                    settle(block, range, joined)
                })
                .collect();

            outcomes.into_iter().collect()
        })
    }
}

/// A dedicated rayon pool sized to exactly one thread per block.
#[derive(Clone, Copy, Debug, Default)]
pub struct RayonPool;

impl ParallelMap for RayonPool {
    fn map_blocks<F>(&self, ranges: &[RowRange], work: F) -> Result<Vec<PartialMax>, ReduceError>
    where
        F: Fn(RowRange) -> Result<BrightnessResult, ReduceError> + Sync,
    {
        if ranges.is_empty() {
            return Ok(Vec::new());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(ranges.len())
            .thread_name(|i| format!("lumen-rayon-{i}"))
            .build()
            .map_err(|e| ReduceError::ThreadPool(e.to_string()))?;

        let outcomes: Vec<Result<PartialMax, ReduceError>> = pool.install(|| {
            ranges
                .par_iter()
                .copied()
                .enumerate()
                .map(|(block, range)| {
                    let joined = catch_unwind(AssertUnwindSafe(|| work(range)));
                    settle(block, range, joined)
                })
                .collect()
        });

        outcomes.into_iter().collect()
    }
}

fn settle(
    block: usize,
    range: RowRange,
    joined: Result<Result<BrightnessResult, ReduceError>, Box<dyn Any + Send>>,
) -> Result<PartialMax, ReduceError> {
    match joined {
        Ok(Ok(result)) => Ok(PartialMax {
            block,
            range,
            result,
        }),
        Ok(Err(e)) => Err(e),
        Err(payload) => Err(ReduceError::WorkerFailure {
            block,
            range,
            reason: panic_message(payload.as_ref()),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_owned()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "worker panicked".to_owned()
    }
}
