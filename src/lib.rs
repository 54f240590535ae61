/// raws_ingest: RAWS (Remote Automated Weather Station) data acquisition.
///
/// Downloads FW13 archive files and WRCC live data, parses them, and
/// harmonizes units, precipitation and timestamps into one canonical
/// hourly table per station.
///
/// # Module structure
///
/// ```text
/// raws_ingest
/// ├── model       — shared data types (StationMeta, RawObservation, Observation, …)
/// ├── error       — RawsError and the crate Result alias
/// ├── config      — service configuration loader (raws.toml)
/// ├── stations    — station metadata table (raws_stations.toml)
/// ├── timezones   — IANA zone → fixed standard-time UTC offset
/// ├── ingest
/// │   ├── fetch   — RawFetcher trait + blocking HTTP implementation
/// │   ├── fw13    — FW13 archive: URL construction + fixed-width parsing
/// │   ├── wrcc    — WRCC service: URL construction + delimited parsing
/// │   └── fixtures (test only) — representative upstream payloads
/// ├── harmonize
/// │   ├── precipitation — cumulative counter → hourly amounts
/// │   ├── units         — US → metric conversions
/// │   └── datetime      — local standard time → UTC
/// ├── timeseries  — RawsTimeseries object, assembler, RawsClient
/// └── analysis
///     └── long_format — wide ⇄ long reshaping
/// ```

/// Public modules
pub mod analysis;
pub mod config;
pub mod error;
pub mod harmonize;
pub mod ingest;
pub mod model;
pub mod stations;
pub mod timeseries;
pub mod timezones;

pub use error::{RawsError, Result};
pub use model::{MeasurementType, MonitorType, Observation, Parameter, RawObservation, StationMeta};
pub use stations::StationTable;
pub use timeseries::{RawsClient, RawsTimeseries};
