//! Calendar date to epoch-seconds conversion.
//!
//! This module provides [`epoch_seconds`], a closed-form Julian-day-number
//! style conversion from a Gregorian `(year, month, day)` triple to the number
//! of seconds between 1970-01-01T00:00:00 and midnight of that day.
//!
//! The function is `const`, so transition instants and era boundaries elsewhere
//! in the crate are computed at compile time from readable calendar dates.

/// Seconds in one day.
pub const SECS_PER_DAY: i64 = 86_400;

/// Seconds in one hour.
pub const SECS_PER_HOUR: i64 = 3_600;

/// Seconds in one minute.
pub const SECS_PER_MIN: i64 = 60;

/// Day number of 1970-01-01 in the March-based day count used below.
const EPOCH_DAY: i64 = 719_468;

/// Returns the epoch-seconds of midnight on the given Gregorian date.
///
/// The year is shifted so it starts in March, which puts the leap day at the
/// end of the counted year and lets `(306 * m + 5) / 10` produce the day
/// offset of each month without a table.
///
/// # Arguments
/// * `year` - Four-digit Gregorian year
/// * `month` - Month of year (1-12)
/// * `day` - Day of month (1-31)
///
/// Out-of-range months or days are not rejected: they yield a defined but
/// meaningless timestamp, the same way every other malformed field is left for
/// record validation to catch.
#[inline]
#[must_use]
pub const fn epoch_seconds(year: u32, month: u32, day: u32) -> i64 {
    let (year, month, day) = (year as i64, month as i64, day as i64);

    // March = 0, ..., January = 10, February = 11
    let y = if month <= 2 { year - 1 } else { year };
    let m = (month + 9) % 12;

    let days = 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        + (306 * m + 5) / 10
        + (day - 1)
        - EPOCH_DAY;

    days * SECS_PER_DAY
}

/// Returns the epoch-seconds of the given date and time of day.
///
/// Hour, minute and second are added linearly, so values past their usual
/// range roll into the following day or hour.
#[inline]
#[must_use]
pub const fn epoch_seconds_at(
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> i64 {
    epoch_seconds(year, month, day)
        + hour as i64 * SECS_PER_HOUR
        + minute as i64 * SECS_PER_MIN
        + second as i64
}
