// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! lumen-core: max-brightness search over integer grids.
//!
//! Two strategies compute the same answer: a serial row-major [`scan`] and a
//! partitioned [`ParallelReducer`] that splits rows into contiguous blocks,
//! reduces each block on its own worker, and merges partial maxima in block
//! order. [`check_consistency`] proves they agree; [`Metrics`] compares their
//! cost. [`run`] wires the pipeline from a [`RunConfig`].
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::module_name_repetitions,
    clippy::use_self,
    clippy::cognitive_complexity,
    clippy::option_if_let_else,
    clippy::significant_drop_tightening,
    clippy::doc_markdown,
    clippy::too_many_lines,
    clippy::too_long_first_doc_paragraph,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::similar_names,
    clippy::trivially_copy_pass_by_ref,
    clippy::needless_pass_by_value,
    clippy::multiple_crate_versions
)]
// Mirrors the `[workspace.lints.clippy]` allow-list; crate attributes take
// precedence over it.
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]

mod config;
mod consistency;
mod error;
mod grid;
mod metrics;
mod pipeline;
/// Seeded `xoroshiro128+` generator backing [`SeededGridSource`].
pub mod prng;
/// Partitioning, worker kernels, backends and merge.
pub mod reduce;
mod source;

pub use config::{
    parse_worker_override, RunConfig, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, WORKERS_ENV,
};
pub use consistency::{check_consistency, ConsistencyMismatch};
pub use error::{GridError, LumenError, PartitionError, ReduceError, WorkerCountError};
pub use grid::{Cell, Grid};
pub use metrics::Metrics;
pub use pipeline::{run, run_with_source, RunReport};
pub use reduce::{
    available_parallelism, merge_partials, partition, reduce_parallel, reduce_range,
    resolve_workers, scan, Backend, BrightnessResult, ParallelMap, ParallelOutcome,
    ParallelReducer, PartialMax, RayonPool, RowRange, ScopedThreads, Timed,
};
pub use source::{FixedGridSource, GridSource, SeededGridSource, BRIGHTNESS_LIMIT};
