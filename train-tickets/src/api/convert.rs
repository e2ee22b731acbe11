//! Conversion from ticketing API responses to domain types.
//!
//! Availability records are pipe-delimited strings whose layout is fixed by
//! the API but not documented. Header fields sit at fixed positions from the
//! start; the seat-count block sits at fixed positions from the end, because
//! the number of trailing fields has varied between API versions. Each field
//! is named here by an [`Anchor`], and a record's field count is checked
//! before anything is extracted.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::{SeatCategory, SeatValues, TrainEntry, normalize};

/// Fewest fields a record may have: the header block (positions 0..=17)
/// plus the trailing block (the last 15 fields) without overlap.
pub const MIN_RECORD_FIELDS: usize = 33;

/// Most fields a record may have before it is considered malformed.
pub const MAX_RECORD_FIELDS: usize = 64;

/// Error during record conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// Record does not have a plausible number of fields
    #[error("unexpected record format: {found} fields, expected {min}..={max}")]
    FieldCount {
        found: usize,
        min: usize,
        max: usize,
    },
}

/// Position of a named field within a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Zero-based index from the start.
    Head(usize),
    /// One-based offset from the end (`Tail(1)` is the last field).
    Tail(usize),
}

const REMARK: Anchor = Anchor::Head(1);
const TRAIN_NO: Anchor = Anchor::Head(2);
const TRAIN_CODE: Anchor = Anchor::Head(3);
const FROM_STATION: Anchor = Anchor::Head(6);
const TO_STATION: Anchor = Anchor::Head(7);
const START_TIME: Anchor = Anchor::Head(8);
const END_TIME: Anchor = Anchor::Head(9);
const DURATION: Anchor = Anchor::Head(10);
const TRAIN_DATE: Anchor = Anchor::Head(13);
const FROM_STATION_NO: Anchor = Anchor::Head(16);
const TO_STATION_NO: Anchor = Anchor::Head(17);
const SEAT_TYPES: Anchor = Anchor::Tail(2);

/// Where each category's remaining-ticket count sits.
fn seat_anchor(category: SeatCategory) -> Anchor {
    match category {
        SeatCategory::Business => Anchor::Tail(5),
        SeatCategory::First => Anchor::Tail(6),
        SeatCategory::Second => Anchor::Tail(7),
        SeatCategory::PremiumSoftSleeper => Anchor::Tail(8),
        SeatCategory::SoftSleeper => Anchor::Tail(9),
        SeatCategory::DeluxeSleeper => Anchor::Tail(10),
        SeatCategory::HardSleeper => Anchor::Tail(11),
        SeatCategory::SoftSeat => Anchor::Tail(12),
        SeatCategory::HardSeat => Anchor::Tail(13),
        SeatCategory::NoSeat => Anchor::Tail(14),
    }
}

/// One availability record split into its fields.
#[derive(Debug, Clone)]
pub struct RawRecord<'a> {
    fields: Vec<&'a str>,
}

impl<'a> RawRecord<'a> {
    /// Split a record on `|`, checking the field count.
    pub fn split(line: &'a str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.split('|').collect();

        if !(MIN_RECORD_FIELDS..=MAX_RECORD_FIELDS).contains(&fields.len()) {
            return Err(RecordError::FieldCount {
                found: fields.len(),
                min: MIN_RECORD_FIELDS,
                max: MAX_RECORD_FIELDS,
            });
        }

        Ok(Self { fields })
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the record has no fields (never the case after `split`).
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Raw field at an anchor. The count check in `split` keeps every
    /// anchor in range; an out-of-range anchor reads as empty.
    pub fn field(&self, anchor: Anchor) -> &'a str {
        let index = match anchor {
            Anchor::Head(i) => Some(i),
            Anchor::Tail(n) => self.fields.len().checked_sub(n),
        };
        index
            .and_then(|i| self.fields.get(i))
            .copied()
            .unwrap_or_default()
    }

    /// Field at an anchor with empty values replaced by the placeholder.
    pub fn text(&self, anchor: Anchor) -> String {
        normalize(self.field(anchor).to_string())
    }
}

/// Parse one availability record into a train entry.
///
/// Station codes are resolved through `station_names`, the code → name map
/// that accompanies the records. A code missing from the map leaves the
/// name as `None`. Prices start out as placeholders.
pub fn parse_record(
    line: &str,
    station_names: &HashMap<String, String>,
) -> Result<TrainEntry, RecordError> {
    let record = RawRecord::split(line)?;

    let resolve = |anchor: Anchor| {
        station_names
            .get(record.field(anchor))
            .filter(|name| !name.is_empty())
            .cloned()
    };

    let mut seats = SeatValues::placeholder();
    for category in SeatCategory::ALL {
        seats.set(category, record.field(seat_anchor(category)));
    }

    Ok(TrainEntry {
        train_code: record.text(TRAIN_CODE),
        train_no: record.text(TRAIN_NO),
        from_station: resolve(FROM_STATION),
        to_station: resolve(TO_STATION),
        from_station_no: record.text(FROM_STATION_NO),
        to_station_no: record.text(TO_STATION_NO),
        start_time: record.text(START_TIME),
        end_time: record.text(END_TIME),
        duration: record.text(DURATION),
        train_date: record.text(TRAIN_DATE),
        remark: record.text(REMARK),
        seat_type_code: record.text(SEAT_TYPES),
        seats,
        prices: SeatValues::placeholder(),
    })
}

/// Parse every record, skipping (and logging) malformed ones.
pub fn parse_records(
    records: &[String],
    station_names: &HashMap<String, String>,
) -> Vec<TrainEntry> {
    records
        .iter()
        .enumerate()
        .filter_map(|(i, line)| match parse_record(line, station_names) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(record = i, error = %e, "Skipping malformed availability record");
                None
            }
        })
        .collect()
}

/// Build a price table from the `data` object of a price response.
///
/// Each category takes the first of its fare codes present as a string;
/// categories with no such code keep the placeholder. Non-string members
/// (such as `OT: []`) are ignored.
pub fn price_table(fares: &Map<String, Value>) -> SeatValues {
    let mut prices = SeatValues::placeholder();

    for category in SeatCategory::ALL {
        let price = category
            .fare_codes()
            .iter()
            .find_map(|code| fares.get(*code).and_then(Value::as_str));

        if let Some(price) = price {
            prices.set(category, price);
        }
    }

    prices
}
