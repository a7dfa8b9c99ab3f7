//! Order range codes.
//!
//! The range of an order says how far from its station it can be filled. The
//! dumps carry it as a small integer; [`OrderRange`] holds the canonical byte
//! form the decoder produces.

/// Canonical order range.
///
/// Wraps the signed byte code stored in a record. Besides the jump radii
/// there are three special values: [`OrderRange::ANY`], [`OrderRange::UNLIMITED`]
/// and [`OrderRange::INVALID`], the latter marking a wire value that is not a
/// known range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OrderRange(i8);

impl OrderRange {
    /// Negative wire value: the smallest range (buy orders in the oldest dumps).
    pub const ANY: Self = Self(-1);
    /// Only at the order's station.
    pub const STATION: Self = Self(0);
    /// Within 5 jumps.
    pub const JUMPS_5: Self = Self(5);
    /// Within 10 jumps.
    pub const JUMPS_10: Self = Self(10);
    /// Within 20 jumps.
    pub const JUMPS_20: Self = Self(20);
    /// Within 40 jumps.
    pub const JUMPS_40: Self = Self(40);
    /// Whole region.
    pub const UNLIMITED: Self = Self(127);
    /// Unrecognized wire value.
    pub const INVALID: Self = Self(-2);

    /// Maps a raw unsigned wire value to its canonical range.
    ///
    /// The unlimited range shows up both as `32767` and as `65535`, depending
    /// on whether the exporter treated the 16-bit field as signed or unsigned.
    /// Any value outside the known set yields [`OrderRange::INVALID`].
    #[inline]
    #[must_use]
    pub const fn from_wire(raw: u64) -> Self {
        match raw {
            0 => Self::STATION,
            5 => Self::JUMPS_5,
            10 => Self::JUMPS_10,
            20 => Self::JUMPS_20,
            40 => Self::JUMPS_40,
            32_767 | 65_535 => Self::UNLIMITED,
            _ => Self::INVALID,
        }
    }

    /// Returns the canonical byte code.
    #[inline]
    #[must_use]
    pub const fn code(self) -> i8 {
        self.0
    }

    /// Returns true unless this is [`OrderRange::INVALID`].
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != Self::INVALID.0
    }

    /// Returns true for [`OrderRange::ANY`].
    #[inline]
    #[must_use]
    pub const fn is_any(self) -> bool {
        self.0 == Self::ANY.0
    }

    /// Returns true for [`OrderRange::UNLIMITED`].
    #[inline]
    #[must_use]
    pub const fn is_unlimited(self) -> bool {
        self.0 == Self::UNLIMITED.0
    }

    /// Returns the jump radius for the bounded ranges (station is 0 jumps).
    #[must_use]
    pub const fn jumps(self) -> Option<u8> {
        match self.0 {
            0 | 5 | 10 | 20 | 40 => Some(self.0 as u8),
            _ => None,
        }
    }
}

impl Default for OrderRange {
    fn default() -> Self {
        Self::STATION
    }
}

impl std::fmt::Display for OrderRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::ANY => write!(f, "any"),
            Self::STATION => write!(f, "station"),
            Self::UNLIMITED => write!(f, "region"),
            Self::INVALID => write!(f, "invalid"),
            other => write!(f, "{} jumps", other.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_wire_values() {
        assert_eq!(OrderRange::from_wire(0).code(), 0);
        assert_eq!(OrderRange::from_wire(5).code(), 5);
        assert_eq!(OrderRange::from_wire(10).code(), 10);
        assert_eq!(OrderRange::from_wire(20).code(), 20);
        assert_eq!(OrderRange::from_wire(40).code(), 40);
        assert_eq!(OrderRange::from_wire(32_767).code(), 127);
        assert_eq!(OrderRange::from_wire(65_535).code(), 127);
    }

    #[test]
    fn test_unknown_wire_values_are_invalid() {
        for raw in [1, 2, 4, 6, 15, 30, 41, 127, 9_999, 32_766, 32_768, 65_534, 65_536] {
            assert_eq!(OrderRange::from_wire(raw), OrderRange::INVALID, "{raw}");
        }
        assert_eq!(
            OrderRange::from_wire(u64::from(u32::MAX)),
            OrderRange::INVALID
        );
        assert_eq!(OrderRange::from_wire(u64::MAX), OrderRange::INVALID);
    }

    #[test]
    fn test_predicates() {
        assert!(OrderRange::ANY.is_any());
        assert!(OrderRange::ANY.is_valid());
        assert!(OrderRange::UNLIMITED.is_unlimited());
        assert!(!OrderRange::INVALID.is_valid());
        assert!(OrderRange::JUMPS_10.is_valid());
        assert!(!OrderRange::JUMPS_10.is_any());
    }

    #[test]
    fn test_jumps() {
        assert_eq!(OrderRange::STATION.jumps(), Some(0));
        assert_eq!(OrderRange::JUMPS_40.jumps(), Some(40));
        assert_eq!(OrderRange::UNLIMITED.jumps(), None);
        assert_eq!(OrderRange::ANY.jumps(), None);
        assert_eq!(OrderRange::INVALID.jumps(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(OrderRange::ANY.to_string(), "any");
        assert_eq!(OrderRange::STATION.to_string(), "station");
        assert_eq!(OrderRange::JUMPS_20.to_string(), "20 jumps");
        assert_eq!(OrderRange::UNLIMITED.to_string(), "region");
        assert_eq!(OrderRange::INVALID.to_string(), "invalid");
    }

    #[test]
    fn test_default_is_station() {
        assert_eq!(OrderRange::default(), OrderRange::STATION);
    }
}
