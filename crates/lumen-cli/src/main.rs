// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Lumen CLI entrypoint.
//!
//! Generates a seeded brightness grid, reduces it serially and in parallel,
//! checks that both strategies agree, and prints timing metrics.
//!
//! Configuration precedence (lowest to highest): built-in defaults,
//! `--config` JSON file, `LUMEN_WORKERS`, command-line flags.
//!
//! The CLI exits with code `0` on success and non-zero on any fatal error,
//! including a serial/parallel mismatch.
// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod report;

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use lumen_core::{Backend, RunConfig, WORKERS_ENV};

#[derive(Parser, Debug)]
#[command(
    name = "lumen",
    author,
    version,
    about = "Serial vs. parallel max-brightness reduction"
)]
struct Args {
    /// Grid rows
    #[arg(long)]
    height: Option<usize>,
    /// Grid columns
    #[arg(long)]
    width: Option<usize>,
    /// Seed for the grid generator
    #[arg(long)]
    seed: Option<u64>,
    /// Worker count (defaults to min(available CPUs, height); overrides LUMEN_WORKERS)
    #[arg(short, long)]
    workers: Option<usize>,
    /// Execution substrate for the parallel run: threads or rayon
    #[arg(long, value_parser = Backend::from_str)]
    backend: Option<Backend>,
    /// JSON run configuration; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Skip printing the grid
    #[arg(long)]
    no_print_grid: bool,
    /// Print a single JSON document instead of the text report
    #[arg(long)]
    json: bool,
    /// Default log directive when RUST_LOG does not say otherwise
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(args.log_level.parse()?))
        .init();

    let config = resolve_config(&args)?;
    debug!(?config, "resolved run configuration");

    let report = lumen_core::run(&config).context("max-brightness run failed")?;
    info!(
        speedup = report.metrics.speedup,
        efficiency = report.metrics.efficiency,
        workers = report.metrics.worker_count,
        "run complete"
    );

    if args.json {
        println!("{}", report::render_json(&config, &report)?);
    } else {
        print!("{}", report::render_text(&config, &report));
    }

    Ok(())
}

fn resolve_config(args: &Args) -> Result<RunConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parse config {}", path.display()))?
        }
        None => RunConfig::default(),
    };

    config = config.with_worker_override(std::env::var(WORKERS_ENV).ok().as_deref());

    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(workers) = args.workers {
        config.workers = Some(workers);
    }
    if let Some(backend) = args.backend {
        config.backend = backend;
    }
    if args.no_print_grid || args.json {
        config.print_grid = false;
    }

    Ok(config)
}
