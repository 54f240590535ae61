/// Unit normalization to the metric system.
///
/// Every conversion is keyed on the row's own measurement type, since a
/// station can switch unit systems partway through its history.

use crate::model::MeasurementType;

/// Meters per statute mile.
pub const METERS_PER_MILE: f64 = 1609.344;
/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// °F → °C for US rows; metric rows pass through.
pub fn temperature_celsius(mt: MeasurementType, value: f64) -> f64 {
    match mt {
        MeasurementType::Us => 5.0 / 9.0 * (value - 32.0),
        MeasurementType::Metric => value,
    }
}

/// miles/hour → m/s for US rows; metric rows pass through.
pub fn speed_mps(mt: MeasurementType, value: f64) -> f64 {
    match mt {
        MeasurementType::Us => value * METERS_PER_MILE / 3600.0,
        MeasurementType::Metric => value,
    }
}

/// Implied-decimal thousandths of an inch → mm for US rows; metric rows
/// pass through.
pub fn precipitation_mm(mt: MeasurementType, value: f64) -> f64 {
    match mt {
        MeasurementType::Us => value * MM_PER_INCH / 1000.0,
        MeasurementType::Metric => value,
    }
}

/// Relative humidity (%) from air temperature and dew point, both °C,
/// using the Magnus approximation.
pub fn relative_humidity_from_dew_point(temperature_c: f64, dew_point_c: f64) -> Option<f64> {
    const A: f64 = 17.625;
    const B: f64 = 243.04;
    let rh = 100.0 * ((A * dew_point_c) / (B + dew_point_c)).exp()
        / ((A * temperature_c) / (B + temperature_c)).exp();
    rh.is_finite().then_some(rh)
}

/// Applies `f` when both the flag and the value are present. Rows without a
/// recognized measurement type cannot be converted and yield missing values.
pub(crate) fn convert(
    mt: Option<MeasurementType>,
    value: Option<f64>,
    f: fn(MeasurementType, f64) -> f64,
) -> Option<f64> {
    match (mt, value) {
        (Some(mt), Some(v)) => Some(f(mt, v)),
        _ => None,
    }
}
