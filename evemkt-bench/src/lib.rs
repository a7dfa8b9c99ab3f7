//! # evemkt Bench
//!
//! Benchmarking utilities for evemkt performance testing.

pub mod latency;
pub mod lines;
pub mod throughput;
