// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Run configuration and worker-count override parsing.

use tracing::warn;

use crate::error::WorkerCountError;
use crate::reduce::Backend;

/// Environment variable carrying the worker-count override.
pub const WORKERS_ENV: &str = "LUMEN_WORKERS";

/// Default grid height.
pub const DEFAULT_HEIGHT: usize = 10;
/// Default grid width.
pub const DEFAULT_WIDTH: usize = 10;
/// Default grid seed.
pub const DEFAULT_SEED: u64 = 12345;

/// Everything one invocation needs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RunConfig {
    /// Grid rows.
    pub height: usize,
    /// Grid columns.
    pub width: usize,
    /// Grid seed.
    pub seed: u64,
    /// Requested worker count; `None` resolves to
    /// `min(available_parallelism, height)`.
    pub workers: Option<usize>,
    /// Print the grid before reducing.
    pub print_grid: bool,
    /// Execution substrate for the parallel run.
    pub backend: Backend,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            seed: DEFAULT_SEED,
            workers: None,
            print_grid: true,
            backend: Backend::default(),
        }
    }
}

impl RunConfig {
    /// Applies a raw worker-count override (typically the value of
    /// [`WORKERS_ENV`]).
    ///
    /// An unusable override is logged and ignored; the configuration keeps
    /// its previous `workers` value.
    pub fn with_worker_override(mut self, raw: Option<&str>) -> Self {
        match raw.map(parse_worker_override) {
            None => {}
            Some(Ok(workers)) => self.workers = Some(workers),
            Some(Err(e)) => warn!(error = %e, "ignoring worker override; using default"),
        }
        self
    }
}

/// Parses a worker-count override: a base-10 integer of at least 1.
///
/// Leading and trailing whitespace is ignored; signs are not accepted.
pub fn parse_worker_override(raw: &str) -> Result<usize, WorkerCountError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(WorkerCountError::NotANumber(raw.to_owned()));
    }
    match trimmed.parse::<usize>() {
        Ok(0) => Err(WorkerCountError::Zero),
        Ok(n) => Ok(n),
        Err(_) => Err(WorkerCountError::NotANumber(raw.to_owned())),
    }
}
