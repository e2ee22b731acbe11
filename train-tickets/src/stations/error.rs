//! Station directory error types.

use std::path::PathBuf;

/// Errors that can occur when loading a station table.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Station table file could not be read
    #[error("failed to read station table {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Station table file held no usable entries
    #[error("no stations found in {}", .path.display())]
    Empty { path: PathBuf },
}
