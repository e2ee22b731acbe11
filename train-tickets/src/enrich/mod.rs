//! Price enrichment.
//!
//! Looks up indicative prices for a batch of train entries concurrently,
//! tolerating individual failures.

mod config;
mod coordinator;
mod source;

pub use config::EnrichConfig;
pub use coordinator::{EnrichReport, enrich_prices};
pub use source::PriceSource;
