/// Raw → canonical observation pipeline.
///
/// Order matters: precipitation is corrected on the source's own counter
/// before unit conversion, then values are converted row by row, then
/// timestamps are moved to UTC.
///
/// - `precipitation` — cumulative counter → hourly amounts
/// - `units`         — US → metric conversions
/// - `datetime`      — local standard time → UTC

pub mod datetime;
pub mod precipitation;
pub mod units;

use tracing::{debug, warn};

use crate::model::{MonitorType, Observation, RawObservation};

/// Harmonizes one station's raw observations into canonical rows.
///
/// Rows are first stably sorted by local timestamp. Rows whose date/time
/// cannot be parsed are dropped after precipitation correction, so they
/// still take part in the two-row lookback.
pub fn harmonize_observations(
    mut raw: Vec<RawObservation>,
    monitor_type: MonitorType,
    utc_offset_hours: f64,
) -> Vec<Observation> {
    raw.sort_by(|a, b| (&a.date, &a.time).cmp(&(&b.date, &b.time)));

    let precip: Vec<Option<f64>> = raw.iter().map(|r| r.precip_amount).collect();
    let precip = if monitor_type.has_cumulative_precipitation() {
        precipitation::hourly_from_cumulative(&precip)
    } else {
        precip
    };

    let mut observations = Vec::with_capacity(raw.len());
    let mut dropped = 0usize;

    for (row, hourly_precip) in raw.iter().zip(precip) {
        let Some(datetime) = datetime::harmonize(&row.date, &row.time, utc_offset_hours) else {
            dropped += 1;
            warn!(date = %row.date, time = %row.time, "dropping row with unreadable timestamp");
            continue;
        };

        let mt = row.measurement_type;
        observations.push(Observation {
            datetime,
            temperature: units::convert(mt, row.dry_bulb_temp, units::temperature_celsius),
            humidity: row.humidity,
            wind_speed: units::convert(mt, row.av_wind_speed, units::speed_mps),
            wind_direction: row.wind_direction,
            max_gust_speed: units::convert(mt, row.max_gust_speed, units::speed_mps),
            max_gust_direction: row.max_gust_direction,
            precipitation: units::convert(mt, hourly_precip, units::precipitation_mm),
            solar_radiation: row.solar_radiation,
            fuel_moisture: row.fuel_moisture,
            fuel_temperature: units::convert(mt, row.fuel_temperature, units::temperature_celsius),
            monitor_type,
        });
    }

    debug!(rows = observations.len(), dropped, %monitor_type, "harmonized observations");
    observations
}
