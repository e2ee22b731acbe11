//! Seat categories and per-category values.
//!
//! Every train entry carries two parallel tables keyed by [`SeatCategory`]:
//! the remaining-ticket counts and the indicative prices. Both start out as
//! the [`PLACEHOLDER`] token and are never left empty.

use std::fmt;

/// Display value substituted for any absent or empty data field.
pub const PLACEHOLDER: &str = "--";

/// A named class of accommodation with its own availability and price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SeatCategory {
    /// 商务座
    Business,
    /// 一等座
    First,
    /// 二等座
    Second,
    /// 高级软卧
    PremiumSoftSleeper,
    /// 软卧
    SoftSleeper,
    /// 动卧
    DeluxeSleeper,
    /// 硬卧
    HardSleeper,
    /// 软座
    SoftSeat,
    /// 硬座
    HardSeat,
    /// 无座
    NoSeat,
}

impl SeatCategory {
    /// Number of seat categories.
    pub const COUNT: usize = 10;

    /// All categories, in display order.
    pub const ALL: [SeatCategory; Self::COUNT] = [
        SeatCategory::Business,
        SeatCategory::First,
        SeatCategory::Second,
        SeatCategory::PremiumSoftSleeper,
        SeatCategory::SoftSleeper,
        SeatCategory::DeluxeSleeper,
        SeatCategory::HardSleeper,
        SeatCategory::SoftSeat,
        SeatCategory::HardSeat,
        SeatCategory::NoSeat,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Column heading used in the rendered table.
    pub fn label(self) -> &'static str {
        match self {
            SeatCategory::Business => "商务座",
            SeatCategory::First => "一等",
            SeatCategory::Second => "二等",
            SeatCategory::PremiumSoftSleeper => "高级软卧",
            SeatCategory::SoftSleeper => "软卧",
            SeatCategory::DeluxeSleeper => "动卧",
            SeatCategory::HardSleeper => "硬卧",
            SeatCategory::SoftSeat => "软座",
            SeatCategory::HardSeat => "硬座",
            SeatCategory::NoSeat => "无座",
        }
    }

    /// Fare-class codes the price endpoint uses for this category, in
    /// order of precedence. The first code present in a response wins.
    pub fn fare_codes(self) -> &'static [&'static str] {
        match self {
            SeatCategory::Business => &["A9", "p"],
            SeatCategory::First => &["M"],
            SeatCategory::Second => &["O"],
            SeatCategory::PremiumSoftSleeper => &["A6"],
            SeatCategory::SoftSleeper => &["A4"],
            SeatCategory::DeluxeSleeper => &["F"],
            SeatCategory::HardSleeper => &["A3"],
            SeatCategory::SoftSeat => &["A2"],
            SeatCategory::HardSeat => &["A1"],
            SeatCategory::NoSeat => &["WZ"],
        }
    }
}

impl fmt::Display for SeatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One string value per seat category.
///
/// Values are normalized on the way in: an empty string is stored as
/// [`PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatValues([String; SeatCategory::COUNT]);

impl SeatValues {
    /// Every category set to the placeholder.
    pub fn placeholder() -> Self {
        Self(std::array::from_fn(|_| PLACEHOLDER.to_string()))
    }

    /// Value for a category.
    pub fn get(&self, category: SeatCategory) -> &str {
        &self.0[category.index()]
    }

    /// Set the value for a category, normalizing empty input.
    pub fn set(&mut self, category: SeatCategory, value: impl Into<String>) {
        self.0[category.index()] = normalize(value.into());
    }

    /// Builder-style [`SeatValues::set`].
    pub fn with(mut self, category: SeatCategory, value: impl Into<String>) -> Self {
        self.set(category, value);
        self
    }

    /// Iterate over `(category, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (SeatCategory, &str)> {
        SeatCategory::ALL
            .iter()
            .map(move |&category| (category, self.get(category)))
    }

    /// True if every category holds the placeholder.
    pub fn is_all_placeholder(&self) -> bool {
        self.0.iter().all(|v| v == PLACEHOLDER)
    }
}

impl Default for SeatValues {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// Replace an empty value with the placeholder.
pub fn normalize(value: String) -> String {
    if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value
    }
}
