//! Batch decoder for the lines of one dump.

use evemkt_core::{Era, FeedDate, RawRecord, Verdict};

use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::stats::FeedStats;

/// Returns true for a dump header line such as `orderid,regionid,...`.
///
/// A header starts, after optional blanks and quotes, with an ASCII letter.
#[must_use]
pub fn is_header_line(line: &str) -> bool {
    line.bytes()
        .find(|b| !b.is_ascii_whitespace() && *b != b'"')
        .is_some_and(|b| b.is_ascii_alphabetic())
}

/// Decodes the lines of a single dump with one era.
///
/// The decoder does no I/O: the caller reads lines and hands them over. Each
/// decoder owns its counters, so several can run on separate threads and have
/// their [`FeedStats`] merged afterwards.
#[derive(Debug, Clone)]
pub struct FeedDecoder {
    config: FeedConfig,
    era: Era,
    date: Option<FeedDate>,
    stats: FeedStats,
    logged_rejects: usize,
}

impl FeedDecoder {
    /// Creates a decoder for a dump captured on `date`.
    ///
    /// The era comes from the date unless the configuration forces one; a
    /// forced era that disagrees with the date is logged and used anyway.
    #[must_use]
    pub fn new(config: FeedConfig, date: FeedDate) -> Self {
        let expected = date.era();
        let era = match config.era {
            Some(forced) if forced != expected => {
                tracing::warn!(
                    "Dump {} decoded as {} instead of {}",
                    date,
                    forced,
                    expected
                );
                forced
            }
            Some(forced) => forced,
            None => expected,
        };

        Self::build(config, era, Some(date))
    }

    /// Creates a decoder for a dump captured on `date`, refusing a forced
    /// era that disagrees with the date.
    ///
    /// # Errors
    /// Returns [`FeedError::EraMismatch`] on disagreement.
    pub fn new_strict(config: FeedConfig, date: FeedDate) -> Result<Self, FeedError> {
        let expected = date.era();
        match config.era {
            Some(configured) if configured != expected => Err(FeedError::EraMismatch {
                configured,
                date,
                expected,
            }),
            _ => Ok(Self::build(config, expected, Some(date))),
        }
    }

    /// Creates a decoder for a dump whose file name embeds its date.
    ///
    /// # Errors
    /// Returns [`FeedError::Core`] if the name carries no valid date.
    pub fn for_file_name(config: FeedConfig, name: &str) -> Result<Self, FeedError> {
        let date = FeedDate::from_file_name(name)?;
        Ok(Self::new(config, date))
    }

    /// Creates a decoder with an explicit era and no known date.
    ///
    /// The configured era, if any, takes precedence over `era`.
    #[must_use]
    pub fn with_era(config: FeedConfig, era: Era) -> Self {
        let era = config.era.unwrap_or(era);
        Self::build(config, era, None)
    }

    fn build(config: FeedConfig, era: Era, date: Option<FeedDate>) -> Self {
        tracing::debug!("Feed decoder for {:?} using era {}", date, era);
        Self {
            config,
            era,
            date,
            stats: FeedStats::new(),
            logged_rejects: 0,
        }
    }

    /// Returns the era lines are decoded with.
    #[must_use]
    pub const fn era(&self) -> Era {
        self.era
    }

    /// Returns the capture date, if known.
    #[must_use]
    pub const fn date(&self) -> Option<FeedDate> {
        self.date
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Returns the counters so far.
    #[must_use]
    pub const fn stats(&self) -> &FeedStats {
        &self.stats
    }

    /// Decodes one line.
    ///
    /// Returns `None` for blank lines and, when configured, header lines.
    pub fn decode_line(&mut self, line: &str) -> Option<(RawRecord, Verdict)> {
        if line.trim().is_empty() || (self.config.skip_header && is_header_line(line)) {
            self.stats.record_skip();
            return None;
        }

        let (record, verdict) = self.era.decode(line);
        self.stats.record(verdict);

        if !verdict.is_valid() {
            self.log_reject(&record, verdict);
        }

        Some((record, verdict))
    }

    fn log_reject(&mut self, record: &RawRecord, verdict: Verdict) {
        if self.logged_rejects < self.config.max_logged_rejects {
            tracing::debug!(
                "Line {} rejected (code {}): {}, order {}",
                self.stats.lines,
                verdict.code(),
                verdict,
                record.order_id
            );
        } else if self.logged_rejects == self.config.max_logged_rejects {
            tracing::warn!(
                "More than {} rejected lines, no longer logging each one",
                self.config.max_logged_rejects
            );
        }
        self.logged_rejects = self.logged_rejects.saturating_add(1);
    }

    /// Decodes a batch of lines and returns the accepted records.
    ///
    /// Invalid records are only returned when the configuration says so.
    pub fn decode_lines<'a, I>(&mut self, lines: I) -> Vec<RawRecord>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let keep_invalid = self.config.keep_invalid;
        lines
            .into_iter()
            .filter_map(|line| self.decode_line(line))
            .filter(|(_, verdict)| keep_invalid || verdict.is_valid())
            .map(|(record, _)| record)
            .collect()
    }

    /// Logs a summary of the counters and returns them.
    pub fn finish(&self) -> FeedStats {
        match self.date {
            Some(date) => tracing::info!("Dump {} ({}): {}", date, self.era, self.stats),
            None => tracing::info!("Dump ({}): {}", self.era, self.stats),
        }
        self.stats
    }

    /// Clears the counters and the reject log budget.
    pub fn reset(&mut self) {
        self.stats = FeedStats::new();
        self.logged_rejects = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evemkt_core::OrderRange;
    use evemkt_core::epoch::epoch_seconds_at;
    use evemkt_core::pacific::PDT_OFFSET;

    const HEADER: &str = "orderid,regionid,systemid,stationid,typeid,bid,price,minvolume,volremain,volenter,issued,duration,range,reportedby,reportedtime";

    fn line(order_id: u64, bid: u8, range: &str, issued: &str, rtime: &str) -> String {
        format!(
            "\"{order_id}\",\"10000002\",\"30000142\",\"60003760\",\"34\",\"{bid}\",\"4.50\",\"1\",\"100\",\"100\",\"{issued}\",\"90 days, 0:00:00\",\"{range}\",\"55\",\"{rtime}\""
        )
    }

    fn date(year: u32, month: u32, day: u32) -> FeedDate {
        FeedDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_is_header_line() {
        assert!(is_header_line(HEADER));
        assert!(is_header_line("\"orderid\",\"regionid\""));
        assert!(!is_header_line("\"1\",\"2\""));
        assert!(!is_header_line(""));
    }

    #[test]
    fn test_era_from_date() {
        let decoder = FeedDecoder::new(FeedConfig::default(), date(2006, 8, 1));
        assert_eq!(decoder.era(), Era::PacificLegacy);
        assert_eq!(decoder.date(), Some(date(2006, 8, 1)));

        let decoder = FeedDecoder::new(FeedConfig::default(), date(2007, 10, 1));
        assert_eq!(decoder.era(), Era::Utc);
    }

    #[test]
    fn test_forced_era_wins() {
        let config = FeedConfig::builder().era(Era::Utc).build();
        let decoder = FeedDecoder::new(config, date(2006, 8, 1));
        assert_eq!(decoder.era(), Era::Utc);
    }

    #[test]
    fn test_strict_rejects_mismatch() {
        let config = FeedConfig::builder().era(Era::Utc).build();
        let result = FeedDecoder::new_strict(config, date(2006, 8, 1));
        assert!(matches!(
            result,
            Err(FeedError::EraMismatch {
                configured: Era::Utc,
                expected: Era::PacificLegacy,
                ..
            })
        ));

        let config = FeedConfig::builder().era(Era::Pacific).build();
        assert!(FeedDecoder::new_strict(config, date(2007, 2, 1)).is_ok());
        assert!(FeedDecoder::new_strict(FeedConfig::default(), date(2007, 2, 1)).is_ok());
    }

    #[test]
    fn test_for_file_name() {
        let decoder =
            FeedDecoder::for_file_name(FeedConfig::default(), "2007-03-12.dump.gz").unwrap();
        assert_eq!(decoder.era(), Era::Pacific);

        let result = FeedDecoder::for_file_name(FeedConfig::default(), "latest.dump");
        assert!(matches!(result, Err(FeedError::Core(_))));
    }

    #[test]
    fn test_with_era() {
        let decoder = FeedDecoder::with_era(FeedConfig::default(), Era::Pacific);
        assert_eq!(decoder.era(), Era::Pacific);
        assert_eq!(decoder.date(), None);
    }

    #[test]
    fn test_decode_line_skips_header_and_blank() {
        let mut decoder = FeedDecoder::new(FeedConfig::default(), date(2006, 7, 1));
        assert!(decoder.decode_line(HEADER).is_none());
        assert!(decoder.decode_line("   ").is_none());
        assert_eq!(decoder.stats().skipped, 2);
        assert_eq!(decoder.stats().lines, 2);
    }

    #[test]
    fn test_decode_line_applies_era() {
        let mut decoder = FeedDecoder::new(FeedConfig::default(), date(2006, 7, 1));
        let text = line(7, 1, "10", "2006-07-01 10:00:00", "2006-07-01 11:00:00");

        let (record, verdict) = decoder.decode_line(&text).unwrap();
        assert!(verdict.is_valid());
        assert_eq!(record.order_id, 7);
        assert_eq!(record.range, OrderRange::ANY);
        assert_eq!(
            record.issued,
            epoch_seconds_at(2006, 7, 1, 10, 0, 0) + PDT_OFFSET
        );
        assert_eq!(decoder.stats().valid(), 1);
    }

    #[test]
    fn test_decode_lines_filters_invalid() {
        let lines = vec![
            HEADER.to_string(),
            line(1, 0, "5", "2007-11-01 10:00:00", "2007-11-01 11:00:00"),
            line(2, 0, "3", "2007-11-01 10:00:00", "2007-11-01 11:00:00"),
            line(3, 2, "5", "2007-11-01 10:00:00", "2007-11-01 11:00:00"),
            line(4, 1, "32767", "2007-11-02 10:00:00", "2007-11-01 11:00:00"),
            line(5, 1, "65535", "2007-11-01 10:00:00", "2007-11-01 11:00:00"),
        ];

        let mut decoder = FeedDecoder::new(FeedConfig::default(), date(2007, 11, 1));
        let records = decoder.decode_lines(lines.iter().map(String::as_str));

        let ids: Vec<u64> = records.iter().map(|r| r.order_id).collect();
        assert_eq!(ids, vec![1, 5]);

        let stats = decoder.finish();
        assert_eq!(stats.lines, 6);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.valid(), 2);
        assert_eq!(stats.count(Verdict::BadRange), 1);
        assert_eq!(stats.count(Verdict::BadBid), 1);
        assert_eq!(stats.count(Verdict::IssuedAfterReport), 1);
    }

    #[test]
    fn test_decode_lines_keep_invalid() {
        let lines = [
            line(1, 0, "5", "2007-11-01 10:00:00", "2007-11-01 11:00:00"),
            line(2, 0, "3", "2007-11-01 10:00:00", "2007-11-01 11:00:00"),
        ];

        let config = FeedConfig::builder().keep_invalid(true).build();
        let mut decoder = FeedDecoder::new(config, date(2007, 11, 1));
        let records = decoder.decode_lines(lines.iter().map(String::as_str));
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].range, OrderRange::INVALID);
    }

    #[test]
    fn test_header_kept_when_not_skipping() {
        let config = FeedConfig::builder().skip_header(false).build();
        let mut decoder = FeedDecoder::with_era(config, Era::Utc);
        let (_, verdict) = decoder.decode_line(HEADER).unwrap();
        // A header has no digits, so every field reads as zero.
        assert!(verdict.is_valid());
        assert_eq!(decoder.stats().skipped, 0);
    }

    #[test]
    fn test_reject_logging_is_capped() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let config = FeedConfig::builder().max_logged_rejects(2).build();
        let mut decoder = FeedDecoder::with_era(config, Era::Utc);
        let bad = line(9, 0, "3", "2007-11-01 10:00:00", "2007-11-01 11:00:00");
        for _ in 0..5 {
            decoder.decode_line(&bad);
        }
        assert_eq!(decoder.stats().count(Verdict::BadRange), 5);
        assert_eq!(decoder.logged_rejects, 5);

        decoder.reset();
        assert_eq!(decoder.stats(), &FeedStats::new());
        assert_eq!(decoder.logged_rejects, 0);
    }
}
