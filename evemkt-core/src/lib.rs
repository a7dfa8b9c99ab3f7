//! # evemkt Core
//!
//! Decoder for lines of the historical EVE Online market order dumps.
//!
//! This crate provides:
//! - A zero-allocation field tokenizer over one dump line
//! - Calendar date to epoch-seconds conversion without a calendar library
//! - Pacific to UTC correction for the 2006-2007 daylight-saving transitions
//! - Order range normalization
//! - Era-aware decoding and record validation
//!
//! ```
//! use evemkt_core::{Era, Verdict};
//!
//! let line = "\"1\",\"10000002\",\"30000142\",\"60003760\",\"34\",\"0\",\"4.50\",\"1\",\
//!             \"100\",\"100\",\"2007-11-01 10:00:00\",\"90 days, 0:00:00\",\"32767\",\
//!             \"55\",\"2007-11-01 11:00:00\"";
//! let (record, verdict) = Era::for_date(2007, 11, 1).decode(line);
//! assert_eq!(verdict, Verdict::Valid);
//! assert_eq!(record.price, 450);
//! ```

pub mod cursor;
pub mod date;
pub mod epoch;
pub mod era;
pub mod error;
pub mod pacific;
pub mod range;
pub mod record;
pub mod verdict;

pub use cursor::FieldCursor;
pub use date::FeedDate;
pub use epoch::epoch_seconds;
pub use era::{Era, Parser, parse_pacific, parse_pacific_legacy, parse_utc, parser_for_date};
pub use error::{Error, Result};
pub use range::OrderRange;
pub use record::RawRecord;
pub use verdict::Verdict;
