//! Train entry type.

use super::seat::{PLACEHOLDER, SeatValues};

/// One scheduled train service matching the queried route and date.
///
/// Built by the record parser with every field normalized (no empty strings),
/// then optionally merged with a separately fetched price table via
/// [`TrainEntry::with_prices`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainEntry {
    /// Public train number, e.g. "G101".
    pub train_code: String,
    /// Internal train id used for price lookups, e.g. "240000G1010C".
    pub train_no: String,
    /// Origin station name, `None` if the response's code map lacks it.
    pub from_station: Option<String>,
    /// Destination station name, `None` if the response's code map lacks it.
    pub to_station: Option<String>,
    /// Ordinal stop index of the origin on this train's route.
    pub from_station_no: String,
    /// Ordinal stop index of the destination on this train's route.
    pub to_station_no: String,
    /// Departure time, "HH:MM".
    pub start_time: String,
    /// Arrival time, "HH:MM".
    pub end_time: String,
    /// Journey duration, "HH:MM".
    pub duration: String,
    /// Date the train departs its first station, "YYYYMMDD".
    pub train_date: String,
    /// Booking remark, e.g. "预订" or a suspension notice.
    pub remark: String,
    /// Opaque code telling the price endpoint which fare classes to return.
    pub seat_type_code: String,
    /// Remaining tickets per seat category.
    pub seats: SeatValues,
    /// Indicative price per seat category.
    pub prices: SeatValues,
}

impl TrainEntry {
    /// Replace the price table, consuming the entry.
    pub fn with_prices(self, prices: SeatValues) -> Self {
        Self { prices, ..self }
    }

    /// Origin station name, or the placeholder if unresolved.
    pub fn from_station_name(&self) -> &str {
        self.from_station.as_deref().unwrap_or(PLACEHOLDER)
    }

    /// Destination station name, or the placeholder if unresolved.
    pub fn to_station_name(&self) -> &str {
        self.to_station.as_deref().unwrap_or(PLACEHOLDER)
    }

    /// Leading character of the train code, lowercased.
    pub fn category_letter(&self) -> Option<char> {
        self.train_code
            .chars()
            .next()
            .map(|c| c.to_ascii_lowercase())
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::entry;
    use super::*;
    use crate::domain::SeatCategory;

    #[test]
    fn with_prices_keeps_everything_else() {
        let original = entry("G101");
        let prices = SeatValues::placeholder().with(SeatCategory::Second, "¥553.0");

        let priced = original.clone().with_prices(prices.clone());

        assert_eq!(priced.prices, prices);
        assert_eq!(priced.seats, original.seats);
        assert_eq!(priced.train_code, original.train_code);
    }

    #[test]
    fn unresolved_station_renders_placeholder() {
        let mut e = entry("G101");
        e.to_station = None;
        assert_eq!(e.from_station_name(), "北京南");
        assert_eq!(e.to_station_name(), PLACEHOLDER);
    }

    #[test]
    fn category_letter_is_lowercase() {
        assert_eq!(entry("G101").category_letter(), Some('g'));
        assert_eq!(entry("k303").category_letter(), Some('k'));
        assert_eq!(entry("").category_letter(), None);
    }
}
