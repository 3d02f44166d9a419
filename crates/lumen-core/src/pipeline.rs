// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! End-to-end run: generate, scan, reduce, check, report.

use tracing::info;

use crate::config::RunConfig;
use crate::consistency::check_consistency;
use crate::error::{LumenError, ReduceError};
use crate::grid::Grid;
use crate::metrics::Metrics;
use crate::reduce::{scan, BrightnessResult, ParallelOutcome, ParallelReducer, Timed};
use crate::source::{GridSource, SeededGridSource};

/// Everything one invocation produced.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// The grid both strategies reduced.
    pub grid: Grid,
    /// Serial baseline.
    pub serial: Timed<BrightnessResult>,
    /// Parallel reduction.
    pub parallel: ParallelOutcome,
    /// Speedup and efficiency.
    pub metrics: Metrics,
}

/// Runs the full pipeline on a grid drawn from `config.seed`.
pub fn run(config: &RunConfig) -> Result<RunReport, LumenError> {
    run_with_source(config, &SeededGridSource::new(config.seed))
}

/// Runs the full pipeline on a grid produced by `source`.
///
/// # Errors
///
/// - [`LumenError::Grid`] if `source` cannot produce a `height` x `width` grid.
/// - [`LumenError::Reduce`] if any worker fails.
/// - [`LumenError::Consistency`] if serial and parallel results differ.
pub fn run_with_source<S>(config: &RunConfig, source: &S) -> Result<RunReport, LumenError>
where
    S: GridSource + ?Sized,
{
    let reducer = ParallelReducer::new(config.backend);
    run_with_reducer(config, source, |grid, workers| reducer.reduce(grid, workers))
}

pub(crate) fn run_with_reducer<S, R>(
    config: &RunConfig,
    source: &S,
    reduce: R,
) -> Result<RunReport, LumenError>
where
    S: GridSource + ?Sized,
    R: FnOnce(&Grid, Option<usize>) -> Result<ParallelOutcome, ReduceError>,
{
    let grid = source.generate(config.height, config.width)?;
    info!(
        height = grid.height(),
        width = grid.width(),
        seed = config.seed,
        "grid ready"
    );

    let serial = scan(&grid);
    let parallel = reduce(&grid, config.workers)?;

    check_consistency(&serial.value, &parallel.result)?;

    let metrics = Metrics::report(serial.elapsed, parallel.elapsed, parallel.workers);
    Ok(RunReport {
        grid,
        serial,
        parallel,
        metrics,
    })
}
