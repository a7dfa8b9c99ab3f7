//! Prelude module for convenient imports.
//!
//! ```
//! use evemkt::prelude::*;
//! ```

// Core types
pub use evemkt_core::cursor::FieldCursor;
pub use evemkt_core::date::FeedDate;
pub use evemkt_core::era::{Era, Parser, parser_for_date};
pub use evemkt_core::error::{Error as CoreError, Result as CoreResult};
pub use evemkt_core::range::OrderRange;
pub use evemkt_core::record::RawRecord;
pub use evemkt_core::verdict::Verdict;

// Feed types
pub use evemkt_feed::{FeedConfig, FeedConfigBuilder, FeedDecoder, FeedError, FeedStats};
