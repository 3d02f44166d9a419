// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Serial scan and partitioned parallel reduction with block-ordered merge.
//!
//! Contiguous row blocks for cache locality; determinism of the tie-break is
//! enforced by merging in block order, not by execution order.

mod backend;
mod exec;
mod kernel;
mod merge;
pub mod partition;

pub use backend::{ParallelMap, RayonPool, ScopedThreads};
pub use exec::{reduce_parallel, Backend, ParallelOutcome, ParallelReducer};
pub use kernel::{reduce_range, scan, BrightnessResult, Timed};
pub use merge::{merge_partials, PartialMax};
pub use partition::{available_parallelism, partition, resolve_workers, RowRange};
