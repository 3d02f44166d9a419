// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
// criterion_group!/criterion_main! expand to undocumented functions that cannot
// carry #[allow] (attributes on macro invocations are ignored). Crate-level
// suppress is required for benchmark binaries using Criterion.
#![allow(missing_docs)]
//! Serial vs. parallel reduction baselines.
//!
//! # Running
//!
//! ```sh
//! cargo bench --package lumen-benches --bench reduction_baseline
//! ```
//!
//! # What This Measures
//!
//! - `serial_vs_parallel/N`: serial scan against both parallel backends on an NxN grid
//! - `worker_scaling_2048`: how the scoped-thread backend scales with worker count
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::time::Duration;

use lumen_benches::{bench_grid, GRID_SIDES, WORKER_COUNTS};
use lumen_core::{available_parallelism, scan, Backend, ParallelReducer};

fn bench_serial_vs_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("serial_vs_parallel");
    group
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(3));

    let workers = available_parallelism();
    for &side in GRID_SIDES {
        let Ok(grid) = bench_grid(side) else {
            continue;
        };
        group.throughput(Throughput::Elements((side * side) as u64));

        group.bench_with_input(BenchmarkId::new("serial", side), &grid, |b, g| {
            b.iter(|| black_box(scan(g).value));
        });
        for backend in [Backend::Threads, Backend::Rayon] {
            let reducer = ParallelReducer::new(backend);
            group.bench_with_input(
                BenchmarkId::new(format!("parallel_{backend}"), side),
                &grid,
                |b, g| {
                    b.iter(|| black_box(reducer.reduce(g, Some(workers)).map(|o| o.result)));
                },
            );
        }
    }
    group.finish();
}

fn bench_worker_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("worker_scaling_2048");
    group
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(3));

    let Ok(grid) = bench_grid(2048) else {
        return;
    };
    let reducer = ParallelReducer::default();
    for &workers in WORKER_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, &w| {
            b.iter(|| black_box(reducer.reduce(&grid, Some(w)).map(|o| o.result)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_serial_vs_parallel, bench_worker_scaling);
criterion_main!(benches);
