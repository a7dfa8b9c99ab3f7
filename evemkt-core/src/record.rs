//! Decoded market order record.

use crate::cursor::FieldCursor;
use crate::range::OrderRange;

/// One market order as read from a dump line.
///
/// Prices are fixed-point hundredths of an ISK. Timestamps are
/// epoch-seconds; whether they are UTC depends on which era decoder produced
/// the record (see [`crate::era::Era`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawRecord {
    /// Order identifier.
    pub order_id: u64,
    /// Region the order was placed in.
    pub region_id: u32,
    /// Solar system of the order's station.
    pub system_id: u32,
    /// Station the order was placed at.
    pub station_id: u32,
    /// Item type traded.
    pub type_id: u32,
    /// 0 for a sell order, 1 for a buy order. Anything else is bad input.
    pub bid: u8,
    /// Price in hundredths.
    pub price: u64,
    /// Minimum volume per fill.
    pub vol_min: u32,
    /// Volume remaining.
    pub vol_rem: u32,
    /// Volume entered.
    pub vol_ent: u32,
    /// When the order was issued.
    pub issued: i64,
    /// Days the order stays open.
    pub duration: u32,
    /// Order range.
    pub range: OrderRange,
    /// Identifier of the reporting source.
    pub reported_by: u64,
    /// When the order was captured.
    pub rtime: i64,
}

impl RawRecord {
    /// Decodes a dump line.
    ///
    /// Field order:
    /// ```text
    /// orderid, regionid, systemid, stationid, typeid, bid, price[.cents],
    /// volmin, volrem, volent, issued (Y-M-D h:m:s[.f]),
    /// duration (days, h:m:s[.f]), range, reportedby, rtime (Y-M-D h:m:s[.f])
    /// ```
    ///
    /// Fields may be separated by any run of non-digit bytes. Timestamps are
    /// taken as written; era-specific corrections are applied by
    /// [`crate::era::Era::decode`]. A malformed line still yields a record,
    /// usually one that fails [`RawRecord::verdict`].
    #[must_use]
    pub fn decode(line: &str) -> Self {
        Self::decode_bytes(line.as_bytes())
    }

    /// Decodes a dump line given as bytes.
    #[must_use]
    pub fn decode_bytes(line: &[u8]) -> Self {
        let mut cursor = FieldCursor::from_bytes(line);

        let order_id = cursor.next_u64();
        let region_id = cursor.next_u32();
        let system_id = cursor.next_u32();
        let station_id = cursor.next_u32();
        let type_id = cursor.next_u32();
        // Out-of-range flags saturate so they can never alias 0 or 1.
        let bid = u8::try_from(cursor.next_u64()).unwrap_or(u8::MAX);
        let price = cursor.next_price();
        let vol_min = cursor.next_u32();
        let vol_rem = cursor.next_u32();
        let vol_ent = cursor.next_u32();
        let issued = cursor.next_datetime();
        let duration = cursor.next_u32();
        cursor.skip_time();
        let range = cursor.next_range();
        let reported_by = cursor.next_u64();
        let rtime = cursor.next_datetime();

        Self {
            order_id,
            region_id,
            system_id,
            station_id,
            type_id,
            bid,
            price,
            vol_min,
            vol_rem,
            vol_ent,
            issued,
            duration,
            range,
            reported_by,
            rtime,
        }
    }

    /// Returns true for a buy order.
    #[inline]
    #[must_use]
    pub const fn is_buy(&self) -> bool {
        self.bid == 1
    }

    /// Returns the price as a floating point amount.
    #[must_use]
    pub fn price_f64(&self) -> f64 {
        self.price as f64 / 100.0
    }
}
