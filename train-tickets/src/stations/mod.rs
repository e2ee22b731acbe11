//! Station name → telecode lookup.
//!
//! User input names stations in Chinese ("北京南"); the ticketing API
//! wants telecodes ("VNP").

mod builtin;
mod directory;
mod error;

pub use directory::StationDirectory;
pub use error::StationError;
