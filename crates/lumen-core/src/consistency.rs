// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Serial/parallel agreement oracle.

use thiserror::Error;
use tracing::error;

use crate::reduce::BrightnessResult;

/// Serial and parallel strategies produced different answers.
///
/// Always indicates a partitioning, merge or tie-break bug.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("results differ between serial ({serial}) and parallel ({parallel})")]
pub struct ConsistencyMismatch {
    /// Ground-truth serial result.
    pub serial: BrightnessResult,
    /// Parallel result under test.
    pub parallel: BrightnessResult,
}

/// Requires `serial` and `parallel` to agree exactly on value, row and col.
pub fn check_consistency(
    serial: &BrightnessResult,
    parallel: &BrightnessResult,
) -> Result<(), ConsistencyMismatch> {
    if serial == parallel {
        return Ok(());
    }
    let mismatch = ConsistencyMismatch {
        serial: *serial,
        parallel: *parallel,
    };
    error!(%mismatch, "consistency check failed");
    Err(mismatch)
}
