//! # evemkt
//!
//! Decoder for the historical EVE Online market order dumps.
//!
//! The dumps went through three format revisions. Older ones stamp times in
//! US Pacific local time and, before 2007, carry unreliable ranges on buy
//! orders. evemkt decodes one line at a time without allocating, corrects the
//! quirks of the line's era and reports whether the record is usable.
//!
//! ## Quick Start
//!
//! ```
//! use evemkt::prelude::*;
//!
//! let date: FeedDate = "2006-09-01".parse()?;
//! let line = "\"1\",\"10000002\",\"30000142\",\"60003760\",\"34\",\"1\",\"4.5\",\"1\",\
//!             \"100\",\"100\",\"2006-09-01 10:00:00\",\"90 days, 0:00:00\",\"20\",\
//!             \"55\",\"2006-09-01 11:00:00\"";
//!
//! let (record, verdict) = date.era().decode(line);
//! assert_eq!(verdict, Verdict::Valid);
//! assert_eq!(record.price, 450);
//! assert_eq!(record.range, OrderRange::ANY);
//! # Ok::<(), evemkt::core::Error>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Tokenizer, time conversion, record decoding and validation
//! - [`feed`] - Batch decoding with counters and logging

pub mod prelude;

/// Tokenizer, time conversion, record decoding and validation.
pub mod core {
    pub use evemkt_core::*;
}

/// Batch decoding of whole dumps.
pub mod feed {
    pub use evemkt_feed::*;
}

// Re-export commonly used items at the crate root
pub use evemkt_core::{
    Era, FeedDate, FieldCursor, OrderRange, Parser, RawRecord, Verdict, parser_for_date,
};
pub use evemkt_feed::{FeedConfig, FeedDecoder, FeedStats};

#[cfg(test)]
mod tests {
    use super::prelude::*;

    fn line(bid: u8, range: &str, issued: &str, rtime: &str) -> String {
        format!(
            "\"5\",\"10000043\",\"30002187\",\"60008494\",\"587\",\"{bid}\",\"100.55\",\"1\",\"3\",\"3\",\"{issued}\",\"7 days, 0:00:00.000\",\"{range}\",\"9\",\"{rtime}\""
        )
    }

    #[test]
    fn test_parser_for_each_era() {
        let text = line(1, "20", "2007-02-01 10:00:00.000", "2007-02-01 10:30:00.000");

        let legacy = parser_for_date(2006, 12, 31);
        let (record, verdict) = legacy(&text);
        assert_eq!(verdict, Verdict::Valid);
        assert_eq!(record.range, OrderRange::ANY);

        let pacific = parser_for_date(2007, 1, 1);
        let (record, _) = pacific(&text);
        assert_eq!(record.range, OrderRange::JUMPS_20);
        assert_eq!(record.price, 10_055);

        let utc = parser_for_date(2007, 10, 1);
        let (utc_record, _) = utc(&text);
        assert_eq!(record.issued - utc_record.issued, 8 * 3_600);
    }

    #[test]
    fn test_feed_decoder_from_date() {
        let date: FeedDate = "2007-10-01".parse().unwrap();
        let mut decoder = FeedDecoder::new(FeedConfig::default(), date);
        let lines = [
            line(0, "40", "2007-10-01 10:00:00", "2007-10-01 10:00:00"),
            line(0, "41", "2007-10-01 10:00:00", "2007-10-01 10:00:00"),
        ];
        let records = decoder.decode_lines(lines.iter().map(String::as_str));
        assert_eq!(records.len(), 1);
        assert_eq!(decoder.stats().count(Verdict::BadRange), 1);
    }
}
