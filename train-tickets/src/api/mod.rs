//! Ticketing API client.
//!
//! Two endpoints are used:
//! - the availability query, which returns one pipe-delimited record per
//!   train plus a station telecode → name map
//! - the price query, which returns fare-class code → price for one train
//!   between two stops
//!
//! Records and fares are converted into [`crate::domain`] types here.

mod client;
mod convert;
mod error;
mod types;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_QUERY_PATH, PriceRequest, TicketClient, TicketClientConfig,
};
pub use convert::{
    Anchor, MAX_RECORD_FIELDS, MIN_RECORD_FIELDS, RawRecord, RecordError, parse_record,
    parse_records, price_table,
};
pub use error::ApiError;
pub use types::{AvailabilityData, AvailabilityResponse, PriceResponse};

#[cfg(test)]
pub(crate) use convert::test_support;
