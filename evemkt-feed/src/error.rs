//! Error types for batch decoding.

use thiserror::Error;

/// Error type for feed decoder setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The feed date or era could not be determined.
    #[error(transparent)]
    Core(#[from] evemkt_core::Error),

    /// An explicit era disagrees with the dump's capture date.
    #[error("era {configured} does not match dump date {date} (expected {expected})")]
    EraMismatch {
        /// Era set in the configuration.
        configured: evemkt_core::Era,
        /// Capture date of the dump.
        date: evemkt_core::FeedDate,
        /// Era implied by the capture date.
        expected: evemkt_core::Era,
    },
}
