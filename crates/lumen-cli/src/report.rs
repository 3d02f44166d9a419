// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Console and JSON presentation of a run.

use std::fmt::Write as _;

use anyhow::Result;
use comfy_table::Table;
use serde::Serialize;

use lumen_core::{Backend, BrightnessResult, RunConfig, RunReport};

/// Human-readable report: optional grid, both strategies, metrics table.
pub fn render_text(config: &RunConfig, report: &RunReport) -> String {
    let mut out = String::new();

    if config.print_grid {
        let _ = writeln!(out, "Brightness grid:\n{}", report.grid);
    }

    strategy_block(
        &mut out,
        "Serial",
        &report.serial.value,
        report.serial.elapsed.as_secs_f64(),
    );
    strategy_block(
        &mut out,
        "Parallel",
        &report.parallel.result,
        report.parallel.elapsed.as_secs_f64(),
    );

    let m = &report.metrics;
    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Speedup".to_owned(), format!("{:.6}", m.speedup)]);
    table.add_row(vec!["Efficiency".to_owned(), format!("{:.6}", m.efficiency)]);
    table.add_row(vec!["Workers".to_owned(), m.worker_count.to_string()]);
    table.add_row(vec!["Backend".to_owned(), config.backend.to_string()]);
    table.add_row(vec![
        "Grid size".to_owned(),
        format!("{}x{}", report.grid.height(), report.grid.width()),
    ]);

    let _ = writeln!(out, "\n--- METRICS ---\n{table}");
    out
}

fn strategy_block(out: &mut String, label: &str, result: &BrightnessResult, secs: f64) {
    let _ = writeln!(out, "{label}:");
    let _ = writeln!(out, "Max value: {}", result.value);
    let _ = writeln!(out, "Coordinates: ({}, {})", result.row, result.col);
    let _ = writeln!(out, "{label} time: {secs:.6} seconds");
}

#[derive(Serialize)]
struct JsonReport {
    grid: JsonGrid,
    serial: JsonStrategy,
    parallel: JsonStrategy,
    metrics: JsonMetrics,
}

#[derive(Serialize)]
struct JsonGrid {
    height: usize,
    width: usize,
    seed: u64,
}

#[derive(Serialize)]
struct JsonStrategy {
    #[serde(flatten)]
    result: BrightnessResult,
    elapsed_s: f64,
}

#[derive(Serialize)]
struct JsonMetrics {
    /// Serialized as `null` when infinite.
    speedup: f64,
    efficiency: f64,
    workers: usize,
    backend: Backend,
}

/// Single JSON document describing the run.
pub fn render_json(config: &RunConfig, report: &RunReport) -> Result<String> {
    let doc = JsonReport {
        grid: JsonGrid {
            height: report.grid.height(),
            width: report.grid.width(),
            seed: config.seed,
        },
        serial: JsonStrategy {
            result: report.serial.value,
            elapsed_s: report.serial.elapsed.as_secs_f64(),
        },
        parallel: JsonStrategy {
            result: report.parallel.result,
            elapsed_s: report.parallel.elapsed.as_secs_f64(),
        },
        metrics: JsonMetrics {
            speedup: report.metrics.speedup,
            efficiency: report.metrics.efficiency,
            workers: report.metrics.worker_count,
            backend: config.backend,
        },
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use lumen_core::{run_with_source, FixedGridSource, Grid};

    fn tie_report(print_grid: bool) -> (RunConfig, RunReport) {
        let grid = Grid::from_rows(vec![vec![3, 7], vec![7, 2]]).unwrap();
        let config = RunConfig {
            height: 2,
            width: 2,
            workers: Some(2),
            print_grid,
            ..RunConfig::default()
        };
        let report = run_with_source(&config, &FixedGridSource::new(grid)).unwrap();
        (config, report)
    }

    #[test]
    fn text_report_lists_both_strategies() {
        let (config, report) = tie_report(true);
        let text = render_text(&config, &report);
        assert!(text.starts_with("Brightness grid:\n   3    7\n   7    2\n"));
        assert!(text.contains("Serial:\nMax value: 7\nCoordinates: (0, 1)\n"));
        assert!(text.contains("Parallel:\nMax value: 7\nCoordinates: (0, 1)\n"));
        assert!(text.contains("--- METRICS ---"));
        assert!(text.contains("2x2"));
    }

    #[test]
    fn grid_is_optional() {
        let (config, report) = tie_report(false);
        assert!(!render_text(&config, &report).contains("Brightness grid:"));
    }

    #[test]
    fn json_report_is_flat_per_strategy() {
        let (config, report) = tie_report(false);
        let value: serde_json::Value =
            serde_json::from_str(&render_json(&config, &report).unwrap()).unwrap();
        assert_eq!(value["serial"]["value"], 7);
        assert_eq!(value["serial"]["row"], 0);
        assert_eq!(value["parallel"]["col"], 1);
        assert_eq!(value["metrics"]["workers"], 2);
        assert_eq!(value["metrics"]["backend"], "threads");
        assert_eq!(value["grid"]["seed"], 12345);
    }
}
