/// FW13 historical archive client.
///
/// Handles URL construction, station identifier normalization and parsing
/// of the fixed-column FW13 fire weather format served from:
///   https://cefa.dri.edu/raws/fw13/{stationID}.fw13
///
/// Each line is one hourly observation. Columns are positional; a blank
/// field means the value was not reported. See `fixtures.rs` for annotated
/// example lines.

use tracing::{debug, warn};

use crate::error::{RawsError, Result};
use crate::harmonize::units;
use crate::model::{MeasurementType, RawObservation};

// ---------------------------------------------------------------------------
// Record layout
// ---------------------------------------------------------------------------

/// Column widths in line order. Offsets are the running sum.
const WIDTHS: [usize; 27] = [
    3, // recordType
    6, // stationID
    8, // observationDate
    4, // observationTime
    1, // observationType
    1, // weatherCode
    3, // dryBulbTemp
    3, // atmosMoisture
    3, // windDirection
    3, // avWindSpeed
    2, // fuelMoisture
    3, // maxTemp
    3, // minTemp
    3, // maxRelHumidity
    3, // minRelHumidity
    2, // precipDuration
    5, // precipAmount
    1, // wetFlag
    2, // herbaceousGreenness
    2, // shrubGreenness
    1, // moistureType
    1, // measurementType
    1, // seasonCode
    4, // solarRadiation
    3, // maxGustDirection
    3, // maxGustSpeed
    1, // snowFlag
];

/// Full line width of an FW13 record.
pub const RECORD_WIDTH: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < WIDTHS.len() {
        total += WIDTHS[i];
        i += 1;
    }
    total
};

/// Atmospheric moisture encodings (`moistureType`).
pub const MOISTURE_WET_BULB: u8 = 1;
pub const MOISTURE_RELATIVE_HUMIDITY: u8 = 2;
pub const MOISTURE_DEW_POINT: u8 = 3;

/// One parsed FW13 line, in source-native units.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fw13Record {
    pub record_type: String,
    pub station_id: String,
    /// `YYYYMMDD`, local standard time.
    pub observation_date: String,
    /// `HHMM`, local standard time.
    pub observation_time: String,
    pub observation_type: Option<char>,
    pub weather_code: Option<u8>,
    pub dry_bulb_temp: Option<f64>,
    pub atmos_moisture: Option<f64>,
    pub wind_direction: Option<f64>,
    pub av_wind_speed: Option<f64>,
    pub fuel_moisture: Option<f64>,
    pub max_temp: Option<f64>,
    pub min_temp: Option<f64>,
    pub max_rel_humidity: Option<f64>,
    pub min_rel_humidity: Option<f64>,
    pub precip_duration: Option<f64>,
    /// Daily cumulative precipitation, implied decimal (thousandths of an
    /// inch when US).
    pub precip_amount: Option<f64>,
    pub wet_flag: Option<char>,
    pub herbaceous_greenness: Option<f64>,
    pub shrub_greenness: Option<f64>,
    pub moisture_type: Option<u8>,
    pub measurement_type: Option<u8>,
    pub season_code: Option<u8>,
    pub solar_radiation: Option<f64>,
    pub max_gust_direction: Option<f64>,
    pub max_gust_speed: Option<f64>,
    pub snow_flag: Option<char>,
}

impl Fw13Record {
    /// Parses a single FW13 line.
    ///
    /// Returns `None` for lines that cannot be an observation: non-ASCII
    /// content or a date/time that is not all digits. Individual numeric
    /// fields that fail to parse become missing.
    pub fn from_line(line: &str) -> Option<Self> {
        if !line.is_ascii() {
            return None;
        }

        let mut cols = Columns::new(line);
        let record_type = cols.text();
        let station_id = cols.text();
        let observation_date = cols.text();
        let observation_time = cols.text();

        if !is_digits(&observation_date, 8) || !is_digits(&observation_time, 4) {
            return None;
        }

        Some(Fw13Record {
            record_type,
            station_id,
            observation_date,
            observation_time,
            observation_type: cols.flag(),
            weather_code: cols.code(),
            dry_bulb_temp: cols.number(),
            atmos_moisture: cols.number(),
            wind_direction: cols.number(),
            av_wind_speed: cols.number(),
            fuel_moisture: cols.number(),
            max_temp: cols.number(),
            min_temp: cols.number(),
            max_rel_humidity: cols.number(),
            min_rel_humidity: cols.number(),
            precip_duration: cols.number(),
            precip_amount: cols.number(),
            wet_flag: cols.flag(),
            herbaceous_greenness: cols.number(),
            shrub_greenness: cols.number(),
            moisture_type: cols.code(),
            measurement_type: cols.code(),
            season_code: cols.code(),
            solar_radiation: cols.number(),
            max_gust_direction: cols.number(),
            max_gust_speed: cols.number(),
            snow_flag: cols.flag(),
        })
    }

    /// Projects onto the source-independent raw observation.
    ///
    /// Humidity is taken directly when `moistureType` is relative humidity
    /// and derived from the dry bulb temperature when it is a dew point.
    /// Wet bulb readings are not converted.
    pub fn to_raw(&self) -> RawObservation {
        let measurement_type = self.measurement_type.and_then(MeasurementType::from_code);

        let humidity = match self.moisture_type {
            Some(MOISTURE_RELATIVE_HUMIDITY) => self.atmos_moisture,
            Some(MOISTURE_DEW_POINT) => match (self.dry_bulb_temp, self.atmos_moisture, measurement_type) {
                (Some(t), Some(td), Some(mt)) => units::relative_humidity_from_dew_point(
                    units::temperature_celsius(mt, t),
                    units::temperature_celsius(mt, td),
                ),
                _ => None,
            },
            // Wet bulb needs station pressure, which FW13 does not carry.
            Some(MOISTURE_WET_BULB) => None,
            _ => None,
        };

        RawObservation {
            date: self.observation_date.clone(),
            time: self.observation_time.clone(),
            measurement_type,
            dry_bulb_temp: self.dry_bulb_temp,
            humidity,
            av_wind_speed: self.av_wind_speed,
            wind_direction: self.wind_direction,
            max_gust_speed: self.max_gust_speed,
            max_gust_direction: self.max_gust_direction,
            precip_amount: self.precip_amount,
            solar_radiation: self.solar_radiation,
            fuel_moisture: self.fuel_moisture,
            fuel_temperature: None,
        }
    }
}

/// Sequential cursor over the fixed-width columns of one line.
struct Columns<'a> {
    line: &'a str,
    offset: usize,
    index: usize,
}

impl<'a> Columns<'a> {
    fn new(line: &'a str) -> Self {
        Self { line, offset: 0, index: 0 }
    }

    /// Next column, trimmed. Columns past the end of a short line are empty.
    fn next_raw(&mut self) -> &'a str {
        let line = self.line;
        let width = WIDTHS.get(self.index).copied().unwrap_or(0);
        let start = self.offset.min(line.len());
        let end = (self.offset + width).min(line.len());
        self.offset += width;
        self.index += 1;
        line[start..end].trim()
    }

    fn text(&mut self) -> String {
        self.next_raw().to_string()
    }

    fn number(&mut self) -> Option<f64> {
        let raw = self.next_raw();
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<f64>() {
            Ok(v) => Some(v),
            Err(_) => {
                debug!(value = raw, column = self.index - 1, "unparseable FW13 numeric field");
                None
            }
        }
    }

    fn code(&mut self) -> Option<u8> {
        self.next_raw().parse().ok()
    }

    fn flag(&mut self) -> Option<char> {
        self.next_raw().chars().next()
    }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

// ---------------------------------------------------------------------------
// Station identifiers and URL construction
// ---------------------------------------------------------------------------

/// Normalizes an FW13 station identifier to its 6-digit zero-padded form.
///
/// # Errors
/// - `MissingStationId` — empty or whitespace-only input.
/// - `InvalidStationId` — non-digit characters or more than six digits.
pub fn normalize_station_id(id: &str) -> Result<String> {
    let id = id.trim();
    if id.is_empty() {
        return Err(RawsError::MissingStationId);
    }
    if !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RawsError::InvalidStationId {
            id: id.to_string(),
            reason: "FW13 identifiers are numeric".to_string(),
        });
    }
    if id.len() > 6 {
        return Err(RawsError::InvalidStationId {
            id: id.to_string(),
            reason: "FW13 identifiers have at most six digits".to_string(),
        });
    }
    Ok(format!("{:0>6}", id))
}

/// Builds the archive URL for a normalized station identifier.
pub fn build_fw13_url(base_url: &str, station_id: &str) -> String {
    format!("{}/{}.fw13", base_url.trim_end_matches('/'), station_id)
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses an FW13 response body into records, in file order.
///
/// Blank lines are ignored and malformed lines are skipped with a warning,
/// so an empty or garbage body yields an empty vector rather than an error.
pub fn parse_fw13(text: &str) -> Vec<Fw13Record> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match Fw13Record::from_line(line) {
            Some(record) => records.push(record),
            None => {
                skipped += 1;
                warn!(line = line_no + 1, "skipping malformed FW13 line");
            }
        }
    }

    debug!(records = records.len(), skipped, "parsed FW13 response");
    records
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
