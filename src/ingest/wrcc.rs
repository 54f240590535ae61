/// WRCC live-data client.
///
/// Retrieves recent hourly RAWS observations from the Western Regional
/// Climate Center `wea_list2` service:
///   https://wrcc.dri.edu/cgi-bin/wea_list2.pl
///
/// Requests ask for comma-delimited output with a single header, metric
/// units and `-9999` as the missing marker. The response begins with a
/// station title line followed by two `:`-prefixed header rows: column
/// labels, then units. Columns are located by label so that stations
/// reporting fewer sensors still parse.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use crate::error::{RawsError, Result};
use crate::model::{MeasurementType, RawObservation};

/// WRCC missing-value marker requested via `miss=08`.
const MISSING_MARKER: f64 = -9999.0;

// ---------------------------------------------------------------------------
// Station identifiers and URL construction
// ---------------------------------------------------------------------------

/// Normalizes a WRCC identifier: two-letter state prefix in lower case,
/// four-character station code in upper case (`WAWENU` → `waWENU`).
///
/// # Errors
/// - `MissingStationId` — empty or whitespace-only input.
/// - `InvalidStationId` — not exactly six ASCII alphanumerics.
pub fn normalize_station_id(id: &str) -> Result<String> {
    let id = id.trim();
    if id.is_empty() {
        return Err(RawsError::MissingStationId);
    }
    if id.len() != 6 || !id.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(RawsError::InvalidStationId {
            id: id.to_string(),
            reason: "WRCC identifiers are six alphanumeric characters".to_string(),
        });
    }
    Ok(format!("{}{}", id[..2].to_ascii_lowercase(), id[2..].to_ascii_uppercase()))
}

/// Builds a `wea_list2` URL for a normalized station identifier and an
/// inclusive date range.
pub fn build_wrcc_url(
    base_url: &str,
    station_id: &str,
    start: NaiveDate,
    end: NaiveDate,
    password: Option<&str>,
) -> String {
    let mut url = format!(
        "{}?stn={}&smon={:02}&sday={:02}&syr={:02}&emon={:02}&eday={:02}&eyr={:02}\
         &dfor=04&srce=W&miss=08&flag=N&Dfmt=01&Tfmt=01&Head=01&Deli=01&unit=M\
         &WsMon=01&WsDay=01&WeMon=12&WeDay=31&WsHou=00&WeHou=24",
        base_url,
        urlencoding::encode(station_id),
        start.month(),
        start.day(),
        start.year() % 100,
        end.month(),
        end.day(),
        end.year() % 100,
    );
    if let Some(pwd) = password {
        url.push_str("&pwd=");
        url.push_str(&urlencoding::encode(pwd));
    }
    url
}

// ---------------------------------------------------------------------------
// Column mapping
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WrccColumn {
    Precipitation,
    WindSpeed,
    WindDirection,
    Temperature,
    FuelTemperature,
    Humidity,
    FuelMoisture,
    GustDirection,
    GustSpeed,
    SolarRadiation,
}

impl WrccColumn {
    /// Maps a header label onto a column. Labels WRCC abbreviates
    /// inconsistently are matched on their stable prefix.
    fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_ascii_lowercase();
        let column = if label.starts_with("precip") {
            WrccColumn::Precipitation
        } else if label.starts_with("wind speed") {
            WrccColumn::WindSpeed
        } else if label.starts_with("wind dir") {
            WrccColumn::WindDirection
        } else if label.starts_with("av air temp") || label.starts_with("air temp") {
            WrccColumn::Temperature
        } else if label.starts_with("fuel temp") {
            WrccColumn::FuelTemperature
        } else if label.starts_with("rel hum") {
            WrccColumn::Humidity
        } else if label.starts_with("fuel moist") {
            WrccColumn::FuelMoisture
        } else if label.starts_with("dir mxgust") || label.starts_with("dir of max gust") {
            WrccColumn::GustDirection
        } else if label.starts_with("mx gust") || label.starts_with("max gust") {
            WrccColumn::GustSpeed
        } else if label.starts_with("solar rad") {
            WrccColumn::SolarRadiation
        } else {
            return None;
        };
        Some(column)
    }
}

/// Unit system implied by the temperature unit in the units header row.
fn measurement_type_from_units(columns: &[Option<WrccColumn>], units: &[&str]) -> MeasurementType {
    let temperature_unit = columns
        .iter()
        .zip(units.iter())
        .find(|(c, _)| matches!(c, Some(WrccColumn::Temperature)))
        .map(|(_, u)| u.trim().to_ascii_lowercase());

    match temperature_unit.as_deref() {
        Some("f") | Some("deg f") | Some("degf") => MeasurementType::Us,
        _ => MeasurementType::Metric,
    }
}

fn parse_value(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(v) if v <= MISSING_MARKER => None,
        Ok(v) => Some(v),
        Err(_) => None,
    }
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses a WRCC response body into raw observations, in file order.
///
/// A body without a label header (an HTML error page, an empty month)
/// yields an empty vector. Data rows with an unreadable `YYMMDDhhmm`
/// timestamp are skipped with a warning.
pub fn parse_wrcc(text: &str) -> Vec<RawObservation> {
    let mut headers: Vec<&str> = Vec::new();
    let mut columns: Vec<Option<WrccColumn>> = Vec::new();
    let mut measurement_type = MeasurementType::Metric;
    let mut observations = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim_end();
        if line.trim().is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix(':') {
            let fields: Vec<&str> = header.split(',').collect();
            if headers.is_empty() {
                columns = fields.iter().map(|f| WrccColumn::from_label(f)).collect();
                headers = fields;
            } else {
                measurement_type = measurement_type_from_units(&columns, &fields);
            }
            continue;
        }

        if headers.is_empty() {
            // Station title line or a non-data page.
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        let stamp = fields[0].trim();
        let local = match NaiveDateTime::parse_from_str(stamp, "%y%m%d%H%M") {
            Ok(dt) => dt,
            Err(_) => {
                warn!(line = line_no + 1, value = stamp, "skipping WRCC row with bad timestamp");
                continue;
            }
        };

        let mut obs = RawObservation {
            date: local.format("%Y%m%d").to_string(),
            time: local.format("%H%M").to_string(),
            measurement_type: Some(measurement_type),
            ..RawObservation::default()
        };

        for (column, raw) in columns.iter().zip(fields.iter()).skip(1) {
            let Some(column) = column else { continue };
            let value = parse_value(raw);
            match column {
                WrccColumn::Precipitation => {
                    // Inches are rescaled to the implied-decimal thousandths
                    // that the shared unit conversion expects.
                    obs.precip_amount = match measurement_type {
                        MeasurementType::Us => value.map(|v| v * 1000.0),
                        MeasurementType::Metric => value,
                    }
                }
                WrccColumn::WindSpeed => obs.av_wind_speed = value,
                WrccColumn::WindDirection => obs.wind_direction = value,
                WrccColumn::Temperature => obs.dry_bulb_temp = value,
                WrccColumn::FuelTemperature => obs.fuel_temperature = value,
                WrccColumn::Humidity => obs.humidity = value,
                WrccColumn::FuelMoisture => obs.fuel_moisture = value,
                WrccColumn::GustDirection => obs.max_gust_direction = value,
                WrccColumn::GustSpeed => obs.max_gust_speed = value,
                WrccColumn::SolarRadiation => obs.solar_radiation = value,
            }
        }

        observations.push(obs);
    }

    if headers.is_empty() && !text.trim().is_empty() {
        warn!("WRCC response has no header rows; treating as no data");
    }
    debug!(records = observations.len(), "parsed WRCC response");
    observations
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
