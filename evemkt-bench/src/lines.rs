//! Synthetic dump lines.

use evemkt_core::Era;

/// Builder for one dump line in the quoted CSV layout of the dumps.
#[derive(Debug, Clone)]
pub struct LineBuilder {
    order_id: u64,
    type_id: u32,
    bid: u8,
    price: String,
    vol_rem: u32,
    issued: String,
    range: String,
    rtime: String,
}

impl LineBuilder {
    /// Creates a builder for a valid sell order.
    #[must_use]
    pub fn new(order_id: u64) -> Self {
        Self {
            order_id,
            type_id: 34,
            bid: 0,
            price: "4.50".to_string(),
            vol_rem: 1_000,
            issued: "2007-11-01 10:00:00.000".to_string(),
            range: "32767".to_string(),
            rtime: "2007-11-01 12:30:45.000".to_string(),
        }
    }

    /// Sets the item type.
    #[must_use]
    pub fn type_id(mut self, type_id: u32) -> Self {
        self.type_id = type_id;
        self
    }

    /// Sets the bid flag.
    #[must_use]
    pub fn bid(mut self, bid: u8) -> Self {
        self.bid = bid;
        self
    }

    /// Sets the price text as written in the dump.
    #[must_use]
    pub fn price(mut self, price: &str) -> Self {
        self.price = price.to_string();
        self
    }

    /// Sets the remaining volume.
    #[must_use]
    pub fn vol_rem(mut self, vol_rem: u32) -> Self {
        self.vol_rem = vol_rem;
        self
    }

    /// Sets the range text as written in the dump.
    #[must_use]
    pub fn range(mut self, range: &str) -> Self {
        self.range = range.to_string();
        self
    }

    /// Sets the issued and report date-times.
    #[must_use]
    pub fn times(mut self, issued: &str, rtime: &str) -> Self {
        self.issued = issued.to_string();
        self.rtime = rtime.to_string();
        self
    }

    /// Renders the line.
    #[must_use]
    pub fn build(&self) -> String {
        format!(
            "\"{}\",\"10000002\",\"30000142\",\"60003760\",\"{}\",\"{}\",\"{}\",\"1\",\"{}\",\"{}\",\"{}\",\"90 days, 0:00:00\",\"{}\",\"1000101\",\"{}\"",
            self.order_id,
            self.type_id,
            self.bid,
            self.price,
            self.vol_rem,
            self.vol_rem,
            self.issued,
            self.range,
            self.rtime,
        )
    }
}

/// Representative capture day for each era.
#[must_use]
pub const fn sample_day(era: Era) -> &'static str {
    match era {
        Era::PacificLegacy => "2006-09-01",
        Era::Pacific => "2007-05-01",
        Era::Utc => "2007-11-01",
    }
}

const RANGES: [&str; 8] = ["0", "5", "10", "20", "40", "32767", "65535", "-1"];

/// Generates `count` valid lines dated within the given era.
///
/// Output is deterministic so benchmark runs are comparable.
#[must_use]
pub fn sample_lines(count: usize, era: Era) -> Vec<String> {
    let day = sample_day(era);
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;

    (0..count)
        .map(|i| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let r = state >> 33;

            let hour = r % 12;
            let issued = format!("{day} {:02}:{:02}:{:02}.{:03}", hour, r % 60, (r >> 6) % 60, r % 1000);
            let rtime = format!("{day} {:02}:00:00.000", hour + 12);

            LineBuilder::new(1_000_000_000 + i as u64)
                .type_id((r % 30_000) as u32)
                .bid((r & 1) as u8)
                .price(&format!("{}.{:02}", r % 100_000, r % 100))
                .vol_rem((r % 10_000) as u32 + 1)
                .range(RANGES[(r as usize) % RANGES.len()])
                .times(&issued, &rtime)
                .build()
        })
        .collect()
}
