//! Field tokenizer for dump lines.
//!
//! [`FieldCursor`] walks a line byte by byte and pulls numeric fields out of
//! it. Every read first skips whatever non-digit bytes precede the field
//! (commas, quotes, spaces, dashes, colons), so the exact separator layout of a
//! dump does not matter. Nothing is allocated and nothing can fail: a missing
//! field reads as zero and leaves the record for validation to reject.

use crate::epoch::epoch_seconds_at;
use crate::range::OrderRange;

/// Cursor over the bytes of a single dump line.
///
/// One cursor belongs to one decode call; it is advanced by each field read.
#[derive(Debug, Clone)]
pub struct FieldCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> FieldCursor<'a> {
    /// Creates a cursor at the start of `line`.
    #[inline]
    #[must_use]
    pub fn new(line: &'a str) -> Self {
        Self::from_bytes(line.as_bytes())
    }

    /// Creates a cursor at the start of a raw byte line.
    #[inline]
    #[must_use]
    pub const fn from_bytes(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Returns the current byte offset.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the unread part of the line.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    /// Returns true once every byte has been consumed.
    #[inline]
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Returns the byte under the cursor without consuming it.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    #[inline]
    fn peek_digit(&self) -> Option<u8> {
        self.peek().filter(u8::is_ascii_digit).map(|b| b - b'0')
    }

    #[inline]
    fn skip_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
    }

    #[inline]
    fn skip_separators(&mut self) {
        self.skip_while(|b| !b.is_ascii_digit());
    }

    #[inline]
    fn skip_digits(&mut self) {
        self.skip_while(|b| b.is_ascii_digit());
    }

    /// Consumes a run of digits and returns its base-10 value.
    ///
    /// Overlong runs wrap rather than panic.
    #[inline]
    fn take_digits(&mut self) -> u64 {
        let mut value: u64 = 0;
        while let Some(d) = self.peek_digit() {
            value = value.wrapping_mul(10).wrapping_add(u64::from(d));
            self.pos += 1;
        }
        value
    }

    /// Reads the next unsigned integer.
    ///
    /// Skips leading non-digits, then consumes digits up to the first
    /// non-digit. Returns 0 when the line ends before any digit.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.skip_separators();
        self.take_digits()
    }

    /// Reads the next unsigned integer narrowed to 32 bits.
    ///
    /// Values wider than 32 bits keep their low bits.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    /// Reads the next range field.
    ///
    /// A leading minus sign (after separators) means [`OrderRange::ANY`]; the
    /// sign and its digits are consumed without looking at the value.
    /// Otherwise the unsigned value is normalized with
    /// [`OrderRange::from_wire`].
    pub fn next_range(&mut self) -> OrderRange {
        self.skip_while(|b| !b.is_ascii_digit() && b != b'-');

        if self.peek() == Some(b'-') {
            self.pos += 1;
            self.skip_digits();
            return OrderRange::ANY;
        }

        OrderRange::from_wire(self.take_digits())
    }

    /// Reads a `year month day hour minute second[.fraction]` date-time.
    ///
    /// Returns epoch-seconds as written (no zone correction). A fractional
    /// part whose first digit is above 5 rounds the seconds up by one; the
    /// rest of the fraction is discarded.
    pub fn next_datetime(&mut self) -> i64 {
        let year = self.next_u32();
        let month = self.next_u32();
        let day = self.next_u32();
        let hour = self.next_u32();
        let minute = self.next_u32();
        let second = self.next_u32();

        epoch_seconds_at(year, month, day, hour, minute, second) + i64::from(self.round_fraction())
    }

    /// Reads an `hour minute second[.fraction]` time of day and discards it.
    pub fn skip_time(&mut self) {
        self.next_u32();
        self.next_u32();
        self.next_u32();
        self.round_fraction();
    }

    /// Consumes an optional `.digits` suffix.
    ///
    /// Returns 1 when the first fractional digit is above 5, else 0.
    fn round_fraction(&mut self) -> u8 {
        if self.peek() != Some(b'.') {
            return 0;
        }
        self.pos += 1;

        let round_up = matches!(self.peek_digit(), Some(d) if d > 5);
        self.skip_digits();
        u8::from(round_up)
    }

    /// Reads a price as fixed-point hundredths.
    ///
    /// `123` reads as 12300 and `123.45` as 12345. A single fractional digit
    /// counts as tenths, so `123.5` reads as 12350. Digits past the second are
    /// dropped.
    pub fn next_price(&mut self) -> u64 {
        let mut price = self.next_u64().wrapping_mul(100);

        if self.peek() != Some(b'.') {
            return price;
        }
        self.pos += 1;

        if let Some(tenths) = self.peek_digit() {
            price = price.wrapping_add(u64::from(tenths) * 10);
            self.pos += 1;

            if let Some(cents) = self.peek_digit() {
                price = price.wrapping_add(u64::from(cents));
                self.pos += 1;
            }
        }
        self.skip_digits();

        price
    }
}
