//! Decode throughput measurement.

use std::time::{Duration, Instant};

use evemkt_core::{Era, Verdict};

/// Result of a throughput run.
#[derive(Debug, Clone)]
pub struct ThroughputResult {
    /// Lines decoded.
    pub lines: u64,
    /// Bytes of line text decoded.
    pub bytes: u64,
    /// Lines that decoded to a valid record.
    pub valid: u64,
    /// Total duration.
    pub duration: Duration,
}

impl ThroughputResult {
    /// Returns lines per second.
    #[must_use]
    pub fn lines_per_second(&self) -> f64 {
        self.lines as f64 / self.duration.as_secs_f64()
    }

    /// Returns bytes per second.
    #[must_use]
    pub fn bytes_per_second(&self) -> f64 {
        self.bytes as f64 / self.duration.as_secs_f64()
    }

    /// Returns megabytes per second.
    #[must_use]
    pub fn mb_per_second(&self) -> f64 {
        self.bytes_per_second() / (1024.0 * 1024.0)
    }
}

/// Decodes every line `rounds` times and reports the rate.
pub fn run_decode_throughput(era: Era, lines: &[String], rounds: u64) -> ThroughputResult {
    let bytes_per_round: u64 = lines.iter().map(|l| l.len() as u64).sum();
    let mut valid = 0;

    let start = Instant::now();
    for _ in 0..rounds {
        for line in lines {
            let (_, verdict) = era.decode(std::hint::black_box(line));
            if verdict == Verdict::Valid {
                valid += 1;
            }
        }
    }
    let duration = start.elapsed();

    ThroughputResult {
        lines: rounds * lines.len() as u64,
        bytes: rounds * bytes_per_round,
        valid,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::sample_lines;

    #[test]
    fn test_throughput_result_lines_per_second() {
        let result = ThroughputResult {
            lines: 1000,
            bytes: 10000,
            valid: 1000,
            duration: Duration::from_secs(1),
        };
        assert!((result.lines_per_second() - 1000.0).abs() < 0.001);
        assert!((result.bytes_per_second() - 10000.0).abs() < 0.001);
    }

    #[test]
    fn test_throughput_result_mb_per_second() {
        let result = ThroughputResult {
            lines: 1000,
            bytes: 1024 * 1024,
            valid: 1000,
            duration: Duration::from_secs(1),
        };
        assert!((result.mb_per_second() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_run_decode_throughput() {
        let lines = sample_lines(50, Era::Utc);
        let total: u64 = lines.iter().map(|l| l.len() as u64).sum();

        let result = run_decode_throughput(Era::Utc, &lines, 3);
        assert_eq!(result.lines, 150);
        assert_eq!(result.bytes, 3 * total);
        assert_eq!(result.valid, 150);
    }
}
