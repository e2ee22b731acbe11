//! Command-line train ticket viewer.
//!
//! Queries remaining tickets between two stations, optionally looks up
//! indicative prices for each train, and prints a table.

pub mod api;
pub mod cli;
pub mod domain;
pub mod enrich;
pub mod logging;
pub mod query;
pub mod render;
pub mod stations;
