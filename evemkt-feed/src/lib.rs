//! # evemkt Feed
//!
//! Batch decoding patterns for EVE Online market order dumps.
//!
//! This crate provides:
//! - A per-dump decoder that picks the era from the capture date
//! - Header and blank line skipping
//! - Verdict counters that can be merged across threads
//! - Capped logging of rejected lines through `tracing`
//!
//! Reading dump files is left to the caller.

pub mod config;
pub mod decoder;
pub mod error;
pub mod stats;

pub use config::{FeedConfig, FeedConfigBuilder};
pub use decoder::{FeedDecoder, is_header_line};
pub use error::FeedError;
pub use stats::FeedStats;
