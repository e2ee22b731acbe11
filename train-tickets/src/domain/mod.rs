//! Domain types for the ticket viewer.
//!
//! Types here hold normalized data: fields that the ticketing API leaves
//! empty are stored as [`PLACEHOLDER`], and codes are validated at
//! construction time.

mod category;
mod date;
mod duration;
mod seat;
mod station;
mod train;

pub use category::{CategoryFilter, TrainCategory};
pub use date::{InvalidDate, TravelDate};
pub use duration::format_duration;
pub use seat::{PLACEHOLDER, SeatCategory, SeatValues, normalize};
pub use station::{InvalidTelecode, Telecode};
pub use train::TrainEntry;

#[cfg(test)]
pub(crate) use train::test_support;
