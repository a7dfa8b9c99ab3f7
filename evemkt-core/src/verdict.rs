//! Record validation.

use crate::record::RawRecord;

/// Outcome of validating a decoded record.
///
/// Only the first failing check is reported; checks run in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Verdict {
    /// The record passed every check.
    Valid = 0,
    /// `issued` is later than `rtime`.
    IssuedAfterReport = 1,
    /// `bid` is neither 0 nor 1.
    BadBid = 2,
    /// The range field held an unknown value.
    BadRange = 3,
}

impl Verdict {
    /// Every verdict, in code order.
    pub const ALL: [Self; 4] = [
        Self::Valid,
        Self::IssuedAfterReport,
        Self::BadBid,
        Self::BadRange,
    ];

    /// Returns the integer status code.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a verdict by status code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Valid),
            1 => Some(Self::IssuedAfterReport),
            2 => Some(Self::BadBid),
            3 => Some(Self::BadRange),
            _ => None,
        }
    }

    /// Returns true for [`Verdict::Valid`].
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid => write!(f, "valid"),
            Self::IssuedAfterReport => write!(f, "issued after report time"),
            Self::BadBid => write!(f, "bid flag not 0 or 1"),
            Self::BadRange => write!(f, "unknown range"),
        }
    }
}

impl RawRecord {
    /// Validates the record.
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        if self.issued > self.rtime {
            Verdict::IssuedAfterReport
        } else if self.bid > 1 {
            Verdict::BadBid
        } else if !self.range.is_valid() {
            Verdict::BadRange
        } else {
            Verdict::Valid
        }
    }
}
