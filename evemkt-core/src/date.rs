//! Capture date of a dump.
//!
//! Dumps are published one file per day with the date in the file name
//! (`2007-03-12.dump.gz`). The date is what selects the decoding era.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::epoch::epoch_seconds;
use crate::era::{Era, Parser};
use crate::error::{Error, Result};

/// Calendar date a dump was captured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedDate {
    /// Gregorian year.
    pub year: u32,
    /// Month of year (1-12).
    pub month: u32,
    /// Day of month (1-31).
    pub day: u32,
}

impl FeedDate {
    /// Creates a feed date, checking month and day ranges.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if the month is not 1-12 or the day is
    /// not a day of that month.
    pub fn new(year: u32, month: u32, day: u32) -> Result<Self> {
        i32::try_from(year)
            .ok()
            .and_then(|y| NaiveDate::from_ymd_opt(y, month, day))
            .map(|_| Self { year, month, day })
            .ok_or_else(|| Error::InvalidDate {
                value: format!("{year:04}-{month:02}-{day:02}"),
            })
    }

    /// Finds the first `YYYY-MM-DD` date embedded in a file name.
    ///
    /// # Errors
    /// Returns [`Error::NoDateInName`] if no valid date is present.
    pub fn from_file_name(name: &str) -> Result<Self> {
        let bytes = name.as_bytes();
        (0..bytes.len().saturating_sub(9))
            .filter_map(|start| bytes.get(start..start + 10))
            .filter(|window| is_date_shape(window))
            .find_map(|window| std::str::from_utf8(window).ok()?.parse().ok())
            .ok_or_else(|| Error::NoDateInName {
                name: name.to_owned(),
            })
    }

    /// Returns the date as a [`NaiveDate`].
    #[must_use]
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(i32::try_from(self.year).ok()?, self.month, self.day)
    }

    /// Returns epoch-seconds of midnight UTC on this date.
    #[must_use]
    pub const fn epoch_seconds(&self) -> i64 {
        epoch_seconds(self.year, self.month, self.day)
    }

    /// Returns the era of dumps captured on this date.
    #[must_use]
    pub const fn era(&self) -> Era {
        Era::for_date(self.year, self.month, self.day)
    }

    /// Returns the line decoder for dumps captured on this date.
    #[must_use]
    pub const fn parser(&self) -> Parser {
        self.era().parser()
    }
}

impl TryFrom<NaiveDate> for FeedDate {
    type Error = Error;

    fn try_from(date: NaiveDate) -> Result<Self> {
        let year = u32::try_from(date.year()).map_err(|_| Error::InvalidDate {
            value: date.to_string(),
        })?;
        Ok(Self {
            year,
            month: date.month(),
            day: date.day(),
        })
    }
}

impl std::fmt::Display for FeedDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for FeedDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidDate {
            value: s.to_owned(),
        };

        // chrono accepts unpadded fields, file names never carry them.
        let text = s.trim();
        if !is_date_shape(text.as_bytes()) {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map_err(|_| invalid())
            .and_then(|date| Self::try_from(date).map_err(|_| invalid()))
    }
}

/// `DDDD-DD-DD`
fn is_date_shape(bytes: &[u8]) -> bool {
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
