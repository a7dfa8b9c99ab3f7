//! Decode counters.

use evemkt_core::Verdict;

/// Per-batch line and verdict counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedStats {
    /// Lines handed to the decoder.
    pub lines: u64,
    /// Header and blank lines skipped.
    pub skipped: u64,
    /// Decoded lines per verdict, indexed by [`Verdict::code`].
    pub verdicts: [u64; 4],
}

impl FeedStats {
    /// Creates empty counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: 0,
            skipped: 0,
            verdicts: [0; 4],
        }
    }

    /// Counts one decoded line.
    pub fn record(&mut self, verdict: Verdict) {
        self.lines += 1;
        self.verdicts[verdict.code() as usize] += 1;
    }

    /// Counts one skipped line.
    pub fn record_skip(&mut self) {
        self.lines += 1;
        self.skipped += 1;
    }

    /// Returns the count for one verdict.
    #[must_use]
    pub const fn count(&self, verdict: Verdict) -> u64 {
        self.verdicts[verdict.code() as usize]
    }

    /// Returns the number of valid records.
    #[must_use]
    pub const fn valid(&self) -> u64 {
        self.count(Verdict::Valid)
    }

    /// Returns the number of decoded lines that failed validation.
    #[must_use]
    pub const fn rejected(&self) -> u64 {
        self.decoded() - self.valid()
    }

    /// Returns the number of lines that went through the decoder.
    #[must_use]
    pub const fn decoded(&self) -> u64 {
        self.lines - self.skipped
    }

    /// Fraction of decoded lines that failed validation.
    #[must_use]
    pub fn reject_rate(&self) -> f64 {
        match self.decoded() {
            0 => 0.0,
            decoded => self.rejected() as f64 / decoded as f64,
        }
    }

    /// Adds another decoder's counts into this one.
    pub fn merge(&mut self, other: &Self) {
        self.lines += other.lines;
        self.skipped += other.skipped;
        for (mine, theirs) in self.verdicts.iter_mut().zip(other.verdicts) {
            *mine += theirs;
        }
    }
}

impl std::fmt::Display for FeedStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} lines, {} skipped, {} valid, {} issued-after-report, {} bad-bid, {} bad-range",
            self.lines,
            self.skipped,
            self.valid(),
            self.count(Verdict::IssuedAfterReport),
            self.count(Verdict::BadBid),
            self.count(Verdict::BadRange),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_counts() {
        let mut stats = FeedStats::new();
        stats.record(Verdict::Valid);
        stats.record(Verdict::Valid);
        stats.record(Verdict::BadRange);
        stats.record_skip();

        assert_eq!(stats.lines, 4);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.decoded(), 3);
        assert_eq!(stats.valid(), 2);
        assert_eq!(stats.rejected(), 1);
        assert_eq!(stats.count(Verdict::BadRange), 1);
        assert_eq!(stats.count(Verdict::BadBid), 0);
        assert!((stats.reject_rate() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_reject_rate() {
        assert_eq!(FeedStats::new().reject_rate(), 0.0);
    }

    #[test]
    fn test_merge() {
        let mut a = FeedStats::new();
        a.record(Verdict::Valid);
        a.record_skip();

        let mut b = FeedStats::new();
        b.record(Verdict::BadBid);
        b.record(Verdict::Valid);

        a.merge(&b);
        assert_eq!(a.lines, 4);
        assert_eq!(a.skipped, 1);
        assert_eq!(a.valid(), 2);
        assert_eq!(a.count(Verdict::BadBid), 1);
    }

    #[test]
    fn test_display() {
        let mut stats = FeedStats::new();
        stats.record(Verdict::IssuedAfterReport);
        let text = stats.to_string();
        assert!(text.contains("1 lines"));
        assert!(text.contains("1 issued-after-report"));
    }
}
