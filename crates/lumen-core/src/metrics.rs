// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Speedup and efficiency of the parallel run over the serial baseline.

use std::time::Duration;

/// Derived timing record for one invocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    /// Serial scan time.
    pub serial_time: Duration,
    /// Parallel dispatch + collection time.
    pub parallel_time: Duration,
    /// `serial_time / parallel_time`, `+inf` when `parallel_time` is zero.
    pub speedup: f64,
    /// `speedup / worker_count`, `0` when `worker_count` is zero.
    pub efficiency: f64,
    /// Workers used by the parallel run.
    pub worker_count: usize,
}

impl Metrics {
    /// Computes speedup and efficiency. Pure; never fails.
    pub fn report(serial_time: Duration, parallel_time: Duration, worker_count: usize) -> Self {
        let speedup = if parallel_time.is_zero() {
            f64::INFINITY
        } else {
            serial_time.as_secs_f64() / parallel_time.as_secs_f64()
        };

        // Worker counts are bounded by grid height; f64 holds them exactly.
        #[allow(clippy::cast_precision_loss)]
        let efficiency = if worker_count == 0 {
            0.0
        } else {
            speedup / worker_count as f64
        };

        Self {
            serial_time,
            parallel_time,
            speedup,
            efficiency,
            worker_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speedup_and_efficiency() {
        let m = Metrics::report(Duration::from_millis(400), Duration::from_millis(100), 4);
        assert!((m.speedup - 4.0).abs() < 1e-12);
        assert!((m.efficiency - 1.0).abs() < 1e-12);
        assert_eq!(m.worker_count, 4);
    }

    #[test]
    fn zero_parallel_time_is_infinite_speedup() {
        let m = Metrics::report(Duration::from_micros(3), Duration::ZERO, 2);
        assert!(m.speedup.is_infinite() && m.speedup.is_sign_positive());
        assert!(m.efficiency.is_infinite());
    }

    #[test]
    fn slowdown_is_below_one() {
        let m = Metrics::report(Duration::from_millis(1), Duration::from_millis(4), 8);
        assert!((m.speedup - 0.25).abs() < 1e-12);
        assert!((m.efficiency - 0.03125).abs() < 1e-12);
    }

    #[test]
    fn zero_workers_has_zero_efficiency() {
        let m = Metrics::report(Duration::from_millis(1), Duration::from_millis(1), 0);
        assert!(m.efficiency.abs() < f64::EPSILON);
    }
}
