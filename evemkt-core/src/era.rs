//! Dump format eras and era-specific decoding.
//!
//! The dump format went through three revisions:
//!
//! | Era                   | Dump dates              | Buy ranges | Timestamps |
//! |-----------------------|-------------------------|------------|------------|
//! | [`Era::PacificLegacy`]| before 2007-01-01       | broken     | Pacific    |
//! | [`Era::Pacific`]      | 2007-01-01 - 2007-09-30 | correct    | Pacific    |
//! | [`Era::Utc`]          | from 2007-10-01         | correct    | UTC        |
//!
//! The era is chosen from the date a dump was captured, never from the line
//! itself. Decoding a line with the wrong era silently yields wrong corrections.

use std::str::FromStr;

use crate::epoch::epoch_seconds;
use crate::error::Error;
use crate::pacific;
use crate::range::OrderRange;
use crate::record::RawRecord;
use crate::verdict::Verdict;

/// First instant of [`Era::Pacific`].
pub const PACIFIC_ERA_START: i64 = epoch_seconds(2007, 1, 1);

/// First instant of [`Era::Utc`].
pub const UTC_ERA_START: i64 = epoch_seconds(2007, 10, 1);

/// A line decoder: one dump line in, decoded record and verdict out.
pub type Parser = fn(&str) -> (RawRecord, Verdict);

/// Dump format revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Era {
    /// Pacific timestamps; buy-order ranges unreliable.
    PacificLegacy,
    /// Pacific timestamps.
    Pacific,
    /// UTC timestamps.
    Utc,
}

impl Era {
    /// Every era, oldest first.
    pub const ALL: [Self; 3] = [Self::PacificLegacy, Self::Pacific, Self::Utc];

    /// Selects the era for a dump captured at the given epoch-seconds.
    #[must_use]
    pub const fn for_timestamp(captured: i64) -> Self {
        if captured < PACIFIC_ERA_START {
            Self::PacificLegacy
        } else if captured < UTC_ERA_START {
            Self::Pacific
        } else {
            Self::Utc
        }
    }

    /// Selects the era for a dump captured on the given calendar date.
    #[must_use]
    pub const fn for_date(year: u32, month: u32, day: u32) -> Self {
        Self::for_timestamp(epoch_seconds(year, month, day))
    }

    /// Returns the kebab-case name of the era.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PacificLegacy => "pacific-legacy",
            Self::Pacific => "pacific",
            Self::Utc => "utc",
        }
    }

    /// Returns true when timestamps of this era are Pacific local time.
    #[must_use]
    pub const fn is_pacific(self) -> bool {
        matches!(self, Self::PacificLegacy | Self::Pacific)
    }

    /// Applies this era's corrections to a freshly decoded record.
    ///
    /// In [`Era::PacificLegacy`] the range of a buy order is replaced with
    /// [`OrderRange::ANY`]. In both Pacific eras `issued` and `rtime` are
    /// shifted to UTC.
    #[must_use]
    pub fn correct(self, mut rec: RawRecord) -> RawRecord {
        if self == Self::PacificLegacy && rec.is_buy() {
            rec.range = OrderRange::ANY;
        }

        if self.is_pacific() {
            rec.issued = pacific::to_utc(rec.issued);
            rec.rtime = pacific::to_utc(rec.rtime);
        }

        rec
    }

    /// Decodes, corrects and validates one dump line.
    #[must_use]
    pub fn decode(self, line: &str) -> (RawRecord, Verdict) {
        self.decode_bytes(line.as_bytes())
    }

    /// Decodes, corrects and validates one dump line given as bytes.
    ///
    /// Timestamp order is checked on the wire values: Pacific correction can
    /// collapse two distinct local times onto one instant, which would hide
    /// an `issued` later than `rtime`. The other checks see the corrected
    /// record.
    #[must_use]
    pub fn decode_bytes(self, line: &[u8]) -> (RawRecord, Verdict) {
        let raw = RawRecord::decode_bytes(line);
        let rec = self.correct(raw);

        let verdict = if raw.issued > raw.rtime {
            Verdict::IssuedAfterReport
        } else {
            rec.verdict()
        };
        (rec, verdict)
    }

    /// Returns the line decoder for this era.
    #[must_use]
    pub const fn parser(self) -> Parser {
        match self {
            Self::PacificLegacy => parse_pacific_legacy,
            Self::Pacific => parse_pacific,
            Self::Utc => parse_utc,
        }
    }
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Era {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|era| era.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownEra {
                value: s.to_owned(),
            })
    }
}

/// Decodes a line from a dump captured before 2007-01-01.
#[must_use]
pub fn parse_pacific_legacy(line: &str) -> (RawRecord, Verdict) {
    Era::PacificLegacy.decode(line)
}

/// Decodes a line from a dump captured between 2007-01-01 and 2007-09-30.
#[must_use]
pub fn parse_pacific(line: &str) -> (RawRecord, Verdict) {
    Era::Pacific.decode(line)
}

/// Decodes a line from a dump captured on or after 2007-10-01.
#[must_use]
pub fn parse_utc(line: &str) -> (RawRecord, Verdict) {
    Era::Utc.decode(line)
}

/// Returns the line decoder for dumps captured on the given date.
#[must_use]
pub const fn parser_for_date(year: u32, month: u32, day: u32) -> Parser {
    Era::for_date(year, month, day).parser()
}
