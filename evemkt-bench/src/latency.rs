//! Decode latency measurement.

use std::time::{Duration, Instant};

use evemkt_core::Era;
use hdrhistogram::Histogram;

/// Latency statistics in nanoseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyStats {
    /// Minimum latency.
    pub min: u64,
    /// Maximum latency.
    pub max: u64,
    /// Median latency (p50).
    pub median: u64,
    /// 99th percentile latency.
    pub p99: u64,
    /// 99.9th percentile latency.
    pub p999: u64,
    /// Sample count.
    pub count: u64,
}

/// Collects latency samples into an HDR histogram.
pub struct LatencyCollector {
    histogram: Histogram<u64>,
}

impl LatencyCollector {
    /// Creates a collector tracking 1ns to 1s with 3 significant digits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            histogram: Histogram::new_with_bounds(1, 1_000_000_000, 3)
                .expect("constant histogram bounds are valid"),
        }
    }

    /// Records a latency sample. Samples beyond the tracked range saturate.
    pub fn record(&mut self, latency: Duration) {
        let nanos = u64::try_from(latency.as_nanos()).unwrap_or(u64::MAX);
        self.histogram.saturating_record(nanos.max(1));
    }

    /// Measures the latency of a function.
    pub fn measure<F, T>(&mut self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        let result = f();
        self.record(start.elapsed());
        result
    }

    /// Computes statistics from collected samples.
    #[must_use]
    pub fn stats(&self) -> Option<LatencyStats> {
        if self.histogram.is_empty() {
            return None;
        }

        Some(LatencyStats {
            min: self.histogram.min(),
            max: self.histogram.max(),
            median: self.histogram.value_at_quantile(0.5),
            p99: self.histogram.value_at_quantile(0.99),
            p999: self.histogram.value_at_quantile(0.999),
            count: self.histogram.len(),
        })
    }

    /// Clears all samples.
    pub fn clear(&mut self) {
        self.histogram.reset();
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.histogram.len()
    }

    /// Returns true if no samples have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.histogram.is_empty()
    }
}

impl Default for LatencyCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Measures per-line decode latency for a set of lines.
#[must_use]
pub fn measure_decode(era: Era, lines: &[String]) -> Option<LatencyStats> {
    let mut collector = LatencyCollector::new();
    for line in lines {
        std::hint::black_box(collector.measure(|| era.decode(std::hint::black_box(line))));
    }
    collector.stats()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::sample_lines;

    #[test]
    fn test_latency_stats() {
        let mut collector = LatencyCollector::new();

        for i in 1..=100 {
            collector.record(Duration::from_nanos(i * 100));
        }

        let stats = collector.stats().unwrap();
        assert_eq!(stats.count, 100);
        assert_eq!(stats.min, 100);
        assert!(stats.max >= 10_000 && stats.max <= 10_010);
        assert!(stats.median <= stats.p99);
    }

    #[test]
    fn test_measure() {
        let mut collector = LatencyCollector::new();

        let result = collector.measure(|| 42);
        assert_eq!(result, 42);
        assert_eq!(collector.len(), 1);

        collector.clear();
        assert!(collector.is_empty());
        assert!(collector.stats().is_none());
    }

    #[test]
    fn test_measure_decode() {
        let lines = sample_lines(100, Era::Pacific);
        let stats = measure_decode(Era::Pacific, &lines).unwrap();
        assert_eq!(stats.count, 100);
    }
}
