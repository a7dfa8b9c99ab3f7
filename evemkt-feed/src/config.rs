//! Batch decoder configuration.

use evemkt_core::Era;

/// Default number of rejected lines logged individually per decoder.
pub const DEFAULT_MAX_LOGGED_REJECTS: usize = 32;

/// Settings for a [`crate::FeedDecoder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Skip dump header lines (`orderid,regionid,...`).
    pub skip_header: bool,
    /// Decode with this era instead of the one implied by the feed date.
    pub era: Option<Era>,
    /// How many rejected lines are logged one by one before going quiet.
    pub max_logged_rejects: usize,
    /// Return invalid records from batch decoding as well.
    pub keep_invalid: bool,
}

impl FeedConfig {
    /// Returns a builder starting from the defaults.
    #[must_use]
    pub fn builder() -> FeedConfigBuilder {
        FeedConfigBuilder::new()
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            skip_header: true,
            era: None,
            max_logged_rejects: DEFAULT_MAX_LOGGED_REJECTS,
            keep_invalid: false,
        }
    }
}

/// Builder for [`FeedConfig`].
#[derive(Debug, Clone, Default)]
pub struct FeedConfigBuilder {
    config: FeedConfig,
}

impl FeedConfigBuilder {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether header lines are skipped.
    #[must_use]
    pub fn skip_header(mut self, skip: bool) -> Self {
        self.config.skip_header = skip;
        self
    }

    /// Forces a decoding era.
    #[must_use]
    pub fn era(mut self, era: Era) -> Self {
        self.config.era = Some(era);
        self
    }

    /// Sets how many rejects are logged individually.
    #[must_use]
    pub fn max_logged_rejects(mut self, max: usize) -> Self {
        self.config.max_logged_rejects = max;
        self
    }

    /// Sets whether invalid records are returned from batch decoding.
    #[must_use]
    pub fn keep_invalid(mut self, keep: bool) -> Self {
        self.config.keep_invalid = keep;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> FeedConfig {
        self.config
    }
}
