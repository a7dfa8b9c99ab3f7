//! Error types for evemkt core operations.
//!
//! Decoding a line never fails; these errors cover the configuration around
//! it, such as naming the era or the feed date a batch belongs to.

use thiserror::Error;

/// Core error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A feed date was not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid feed date: {value:?}")]
    InvalidDate {
        /// Text that failed to parse.
        value: String,
    },

    /// A dump file name carried no `YYYY-MM-DD` date.
    #[error("no feed date in name {name:?}")]
    NoDateInName {
        /// File name that was searched.
        name: String,
    },

    /// An era name was not recognized.
    #[error("unknown era {value:?}: expected pacific-legacy, pacific or utc")]
    UnknownEra {
        /// Text that failed to parse.
        value: String,
    },
}

/// Result type alias for evemkt core operations.
pub type Result<T> = std::result::Result<T, Error>;
