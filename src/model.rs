/// Shared data types for RAWS station metadata and observations.
///
/// Raw observations carry source-native units and local-standard-time
/// date/time strings. Canonical observations are metric, UTC, and hourly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::timezones;

// ---------------------------------------------------------------------------
// Source tags
// ---------------------------------------------------------------------------

/// Unit system flag reported per observation row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasurementType {
    /// Fahrenheit, miles/hour, thousandths of an inch.
    Us,
    Metric,
}

impl MeasurementType {
    /// Decodes the FW13 measurement-type code (1 = US, 2 = metric).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(MeasurementType::Us),
            2 => Some(MeasurementType::Metric),
            _ => None,
        }
    }
}

/// Upstream service an observation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonitorType {
    #[serde(rename = "FW13")]
    Fw13,
    #[serde(rename = "WRCC")]
    Wrcc,
}

impl MonitorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MonitorType::Fw13 => "FW13",
            MonitorType::Wrcc => "WRCC",
        }
    }

    /// FW13 reports precipitation as a daily counter reset at local
    /// midnight; WRCC already reports hourly amounts.
    pub fn has_cumulative_precipitation(&self) -> bool {
        matches!(self, MonitorType::Fw13)
    }
}

impl fmt::Display for MonitorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Observations
// ---------------------------------------------------------------------------

/// One hourly observation as reported by a source, before harmonization.
///
/// `date` is `YYYYMMDD` and `time` is `HHMM`, both local standard time.
/// Numeric fields are in the units named by `measurement_type`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawObservation {
    pub date: String,
    pub time: String,
    pub measurement_type: Option<MeasurementType>,
    pub dry_bulb_temp: Option<f64>,
    pub humidity: Option<f64>,
    pub av_wind_speed: Option<f64>,
    pub wind_direction: Option<f64>,
    pub max_gust_speed: Option<f64>,
    pub max_gust_direction: Option<f64>,
    /// Precipitation; thousandths of an inch when US.
    pub precip_amount: Option<f64>,
    pub solar_radiation: Option<f64>,
    pub fuel_moisture: Option<f64>,
    pub fuel_temperature: Option<f64>,
}

/// Canonical hourly observation: UTC, metric, hourly precipitation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub datetime: DateTime<Utc>,
    /// Degrees Celsius.
    pub temperature: Option<f64>,
    /// Percent relative humidity.
    pub humidity: Option<f64>,
    /// Meters per second.
    pub wind_speed: Option<f64>,
    /// Degrees.
    pub wind_direction: Option<f64>,
    /// Meters per second.
    pub max_gust_speed: Option<f64>,
    /// Degrees.
    pub max_gust_direction: Option<f64>,
    /// Millimeters fallen during the hour.
    pub precipitation: Option<f64>,
    /// W/m².
    pub solar_radiation: Option<f64>,
    pub fuel_moisture: Option<f64>,
    pub fuel_temperature: Option<f64>,
    pub monitor_type: MonitorType,
}

impl Observation {
    /// An observation at `datetime` with every parameter missing.
    pub fn empty(datetime: DateTime<Utc>, monitor_type: MonitorType) -> Self {
        Observation {
            datetime,
            temperature: None,
            humidity: None,
            wind_speed: None,
            wind_direction: None,
            max_gust_speed: None,
            max_gust_direction: None,
            precipitation: None,
            solar_radiation: None,
            fuel_moisture: None,
            fuel_temperature: None,
            monitor_type,
        }
    }
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Numeric columns of the canonical observation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Parameter {
    Temperature,
    Humidity,
    WindSpeed,
    WindDirection,
    MaxGustSpeed,
    MaxGustDirection,
    Precipitation,
    SolarRadiation,
    FuelMoisture,
    FuelTemperature,
}

impl Parameter {
    /// Canonical column order.
    pub const ALL: [Parameter; 10] = [
        Parameter::Temperature,
        Parameter::Humidity,
        Parameter::WindSpeed,
        Parameter::WindDirection,
        Parameter::MaxGustSpeed,
        Parameter::MaxGustDirection,
        Parameter::Precipitation,
        Parameter::SolarRadiation,
        Parameter::FuelMoisture,
        Parameter::FuelTemperature,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::Temperature => "temperature",
            Parameter::Humidity => "humidity",
            Parameter::WindSpeed => "windSpeed",
            Parameter::WindDirection => "windDirection",
            Parameter::MaxGustSpeed => "maxGustSpeed",
            Parameter::MaxGustDirection => "maxGustDirection",
            Parameter::Precipitation => "precipitation",
            Parameter::SolarRadiation => "solarRadiation",
            Parameter::FuelMoisture => "fuelMoisture",
            Parameter::FuelTemperature => "fuelTemperature",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Parameter::ALL.into_iter().find(|p| p.as_str() == name)
    }

    /// Reads this parameter's column from an observation.
    pub fn value(&self, obs: &Observation) -> Option<f64> {
        match self {
            Parameter::Temperature => obs.temperature,
            Parameter::Humidity => obs.humidity,
            Parameter::WindSpeed => obs.wind_speed,
            Parameter::WindDirection => obs.wind_direction,
            Parameter::MaxGustSpeed => obs.max_gust_speed,
            Parameter::MaxGustDirection => obs.max_gust_direction,
            Parameter::Precipitation => obs.precipitation,
            Parameter::SolarRadiation => obs.solar_radiation,
            Parameter::FuelMoisture => obs.fuel_moisture,
            Parameter::FuelTemperature => obs.fuel_temperature,
        }
    }

    pub fn set_value(&self, obs: &mut Observation, value: Option<f64>) {
        let slot = match self {
            Parameter::Temperature => &mut obs.temperature,
            Parameter::Humidity => &mut obs.humidity,
            Parameter::WindSpeed => &mut obs.wind_speed,
            Parameter::WindDirection => &mut obs.wind_direction,
            Parameter::MaxGustSpeed => &mut obs.max_gust_speed,
            Parameter::MaxGustDirection => &mut obs.max_gust_direction,
            Parameter::Precipitation => &mut obs.precipitation,
            Parameter::SolarRadiation => &mut obs.solar_radiation,
            Parameter::FuelMoisture => &mut obs.fuel_moisture,
            Parameter::FuelTemperature => &mut obs.fuel_temperature,
        };
        *slot = value;
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Station metadata
// ---------------------------------------------------------------------------

/// One row of the station metadata table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationMeta {
    #[serde(rename = "nwsID", default)]
    pub nws_id: Option<String>,
    #[serde(rename = "wrccID", default)]
    pub wrcc_id: Option<String>,
    #[serde(rename = "siteName")]
    pub site_name: String,
    pub longitude: f64,
    pub latitude: f64,
    /// IANA timezone name, e.g. `America/Los_Angeles`.
    pub timezone: String,
    #[serde(default)]
    pub elevation: Option<f64>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub agency: Option<String>,
}

impl StationMeta {
    /// Fixed standard-time UTC offset in hours, ignoring daylight saving.
    pub fn utc_offset_hours(&self) -> Result<f64> {
        timezones::utc_offset_hours(&self.timezone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_measurement_type_codes() {
        assert_eq!(MeasurementType::from_code(1), Some(MeasurementType::Us));
        assert_eq!(MeasurementType::from_code(2), Some(MeasurementType::Metric));
        assert_eq!(MeasurementType::from_code(0), None);
    }

    #[test]
    fn test_only_fw13_precipitation_is_cumulative() {
        assert!(MonitorType::Fw13.has_cumulative_precipitation());
        assert!(!MonitorType::Wrcc.has_cumulative_precipitation());
    }

    #[test]
    fn test_parameter_names_round_trip() {
        for p in Parameter::ALL {
            assert_eq!(Parameter::from_name(p.as_str()), Some(p));
        }
        assert_eq!(Parameter::from_name("monitorType"), None);
    }

    #[test]
    fn test_parameter_set_then_read() {
        let dt = Utc.with_ymd_and_hms(2017, 1, 1, 8, 0, 0).unwrap();
        let mut obs = Observation::empty(dt, MonitorType::Fw13);
        for (i, p) in Parameter::ALL.iter().enumerate() {
            p.set_value(&mut obs, Some(i as f64));
        }
        for (i, p) in Parameter::ALL.iter().enumerate() {
            assert_eq!(p.value(&obs), Some(i as f64), "{} column mismatch", p);
        }
    }

    #[test]
    fn test_station_meta_offset_lookup() {
        let meta = StationMeta {
            nws_id: Some("500742".to_string()),
            wrcc_id: None,
            site_name: "Test".to_string(),
            longitude: -120.0,
            latitude: 45.0,
            timezone: "America/Los_Angeles".to_string(),
            elevation: None,
            state: None,
            agency: None,
        };
        assert_eq!(meta.utc_offset_hours().unwrap(), -8.0);
    }
}
