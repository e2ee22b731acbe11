//! Station name lookup.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::domain::Telecode;

use super::builtin::BUILTIN_STATIONS;
use super::error::StationError;

/// Station name → telecode lookup.
///
/// Starts from a built-in table of major stations and can be extended from
/// the operator's `station_name` file, whose entries look like
/// `@bjb|北京北|VAP|beijingbei|bjb|0`.
#[derive(Debug, Clone)]
pub struct StationDirectory {
    by_name: HashMap<String, Telecode>,
}

impl StationDirectory {
    /// A directory holding only the built-in stations.
    pub fn builtin() -> Self {
        let by_name = BUILTIN_STATIONS
            .iter()
            .filter_map(|(name, code)| {
                Telecode::parse(code)
                    .ok()
                    .map(|code| ((*name).to_string(), code))
            })
            .collect();
        Self { by_name }
    }

    /// The built-in stations extended with a `station_name` file.
    ///
    /// Entries from the file replace built-in entries of the same name.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| StationError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = parse_station_names(&contents);
        if parsed.is_empty() {
            return Err(StationError::Empty {
                path: path.to_path_buf(),
            });
        }
        debug!(count = parsed.len(), path = %path.display(), "Loaded station table");

        let mut directory = Self::builtin();
        directory.by_name.extend(parsed);
        Ok(directory)
    }

    /// Look up a station telecode by exact name.
    pub fn get(&self, name: &str) -> Option<Telecode> {
        self.by_name.get(name).copied()
    }

    /// Resolve user input to a telecode.
    ///
    /// Known station names win; otherwise input that is itself a valid
    /// telecode (e.g. "VNP" or "vnp") is accepted.
    pub fn resolve(&self, input: &str) -> Option<Telecode> {
        let input = input.trim();
        self.get(input).or_else(|| Telecode::parse(input).ok())
    }

    /// Number of stations in the lookup.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Check if the lookup is empty.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for StationDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Parse the `station_name` format.
///
/// Entries are separated by `@`; within an entry, field 1 is the name and
/// field 2 the telecode. Anything else (including the JavaScript wrapper
/// the file is usually served in) is skipped.
fn parse_station_names(contents: &str) -> HashMap<String, Telecode> {
    contents
        .split('@')
        .filter_map(|entry| {
            let mut fields = entry.split('|');
            let _abbreviation = fields.next()?;
            let name = fields.next()?.trim();
            let code = Telecode::parse(fields.next()?.trim()).ok()?;
            if name.is_empty() {
                return None;
            }
            Some((name.to_string(), code))
        })
        .collect()
}
