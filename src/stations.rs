/// Station metadata table loader - parses raws_stations.toml
///
/// One `[[station]]` entry per RAWS station. Identifiers in the file may be
/// written loosely (`"52"` for FW13 station `000052`, `"WAWENU"` for WRCC
/// station `waWENU`); lookups normalize both sides before comparing.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{RawsError, Result};
use crate::ingest::{fw13, wrcc};
use crate::model::StationMeta;

/// Root structure for TOML parsing
#[derive(Debug, Deserialize)]
struct StationFile {
    #[serde(default)]
    station: Vec<StationMeta>,
}

/// In-memory station metadata table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationTable {
    stations: Vec<StationMeta>,
}

impl StationTable {
    pub fn new(stations: Vec<StationMeta>) -> Self {
        Self { stations }
    }

    /// Parses a TOML metadata document.
    pub fn parse(contents: &str) -> Result<Self> {
        let file: StationFile = toml::from_str(contents)?;
        Ok(Self::new(file.station))
    }

    /// Loads the full metadata table from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading station metadata");
        let contents = fs::read_to_string(path)?;
        let table = Self::parse(&contents)?;
        info!(stations = table.len(), path = %path.display(), "loaded station metadata");
        Ok(table)
    }

    pub fn stations(&self) -> &[StationMeta] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Finds the station whose `nwsID` matches an FW13 identifier.
    ///
    /// # Errors
    /// - `InvalidStationId` / `MissingStationId` if `nws_id` is malformed.
    /// - `StationNotFound` if no row matches.
    pub fn find_fw13(&self, nws_id: &str) -> Result<&StationMeta> {
        let wanted = fw13::normalize_station_id(nws_id)?;
        self.stations
            .iter()
            .find(|s| {
                s.nws_id
                    .as_deref()
                    .and_then(|id| fw13::normalize_station_id(id).ok())
                    .is_some_and(|id| id == wanted)
            })
            .ok_or(RawsError::StationNotFound { id: wanted })
    }

    /// Finds the station whose `wrccID` matches a WRCC identifier.
    pub fn find_wrcc(&self, wrcc_id: &str) -> Result<&StationMeta> {
        let wanted = wrcc::normalize_station_id(wrcc_id)?;
        self.stations
            .iter()
            .find(|s| {
                s.wrcc_id
                    .as_deref()
                    .and_then(|id| wrcc::normalize_station_id(id).ok())
                    .is_some_and(|id| id == wanted)
            })
            .ok_or(RawsError::StationNotFound { id: wanted })
    }
}
