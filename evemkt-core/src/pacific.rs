//! US Pacific local time to UTC correction.
//!
//! Early dumps stamp orders in Pacific wall-clock time. This module shifts
//! such timestamps to UTC using a fixed table of the daylight-saving
//! transitions that fall inside the captured window (2006-2007). No time zone
//! database is consulted.
//!
//! Local timestamps are epoch-seconds computed as if the wall-clock reading
//! were UTC, which is how the record decoder produces them.

use crate::epoch::{SECS_PER_HOUR, epoch_seconds_at};

/// UTC offset of Pacific Standard Time (UTC-8), in seconds to add.
pub const PST_OFFSET: i64 = 8 * SECS_PER_HOUR;

/// UTC offset of Pacific Daylight Time (UTC-7), in seconds to add.
pub const PDT_OFFSET: i64 = 7 * SECS_PER_HOUR;

/// A change of the Pacific UTC offset.
///
/// From `local_start` onward (local wall-clock seconds) the offset becomes
/// `offset`, until the next transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// First local timestamp of the new window.
    pub local_start: i64,
    /// Seconds to add to a local timestamp inside the window.
    pub offset: i64,
}

impl Transition {
    /// Creates a new transition.
    #[must_use]
    pub const fn new(local_start: i64, offset: i64) -> Self {
        Self {
            local_start,
            offset,
        }
    }

    /// UTC instant at which this window begins.
    #[must_use]
    pub const fn utc_start(&self) -> i64 {
        self.local_start + self.offset
    }
}

/// Offset applied to timestamps before the first transition.
pub const INITIAL_OFFSET: i64 = PST_OFFSET;

/// Pacific offset changes in ascending order.
///
/// The last window stays open: anything after 2007-03-11 is treated as
/// daylight time. Dumps switched to UTC stamps before the 2007-11-04 return to
/// standard time, so that transition is never needed.
pub const TRANSITIONS: [Transition; 3] = [
    Transition::new(epoch_seconds_at(2006, 4, 2, 3, 0, 0), PDT_OFFSET),
    Transition::new(epoch_seconds_at(2006, 10, 29, 1, 0, 0), PST_OFFSET),
    Transition::new(epoch_seconds_at(2007, 3, 11, 3, 0, 0), PDT_OFFSET),
];

/// Returns the seconds [`to_utc`] adds to a local Pacific timestamp.
///
/// Inside the skipped spring-forward hour this lies between the two offsets.
#[inline]
#[must_use]
pub fn offset_at(local: i64) -> i64 {
    to_utc(local) - local
}

/// Converts a local Pacific timestamp to UTC.
///
/// A local time inside a window never maps past the UTC instant at which the
/// next window begins, so wall-clock readings in the skipped spring-forward
/// hour collapse onto the transition instant and the conversion stays
/// monotonic.
#[inline]
#[must_use]
pub fn to_utc(local: i64) -> i64 {
    let mut offset = INITIAL_OFFSET;

    for transition in &TRANSITIONS {
        if local < transition.local_start {
            return (local + offset).min(transition.utc_start());
        }
        offset = transition.offset;
    }

    local + offset
}
