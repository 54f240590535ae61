/// Error types for RAWS data acquisition and harmonization.
///
/// Lookup and configuration failures are fatal and surface here. Malformed
/// upstream text is not an error: parsers skip bad lines and an empty
/// response yields an empty timeseries.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RawsError {
    #[error("Station identifier is required")]
    MissingStationId,

    #[error("Invalid station identifier '{id}': {reason}")]
    InvalidStationId { id: String, reason: String },

    #[error("No station metadata found for identifier '{id}'")]
    StationNotFound { id: String },

    #[error("Timezone '{timezone}' is not in the reference offset table")]
    UnknownTimezone { timezone: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream request to {url} failed with status {status}")]
    UpstreamStatus { url: String, status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Long format error: {reason}")]
    LongFormat { reason: String },
}

pub type Result<T> = std::result::Result<T, RawsError>;
