/// Long-format flattening for plotting and analysis tools.
///
/// `to_long` turns the wide observation table (one column per parameter)
/// into one row per (timestamp, parameter) with the station's identifying
/// metadata repeated on every row. Rows are datetime-major: all parameters
/// of the first observation in `Parameter::ALL` order, then the next
/// observation, and so on.
///
/// `widen` is the inverse. Flattening then widening returns the same
/// observations exactly, missing values included.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::{RawsError, Result};
use crate::model::{MonitorType, Observation, Parameter};
use crate::timeseries::RawsTimeseries;

/// One (station, timestamp, parameter) value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongRecord {
    #[serde(rename = "nwsID")]
    pub nws_id: Option<String>,
    #[serde(rename = "wrccID")]
    pub wrcc_id: Option<String>,
    #[serde(rename = "siteName")]
    pub site_name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub datetime: DateTime<Utc>,
    pub parameter: Parameter,
    pub value: Option<f64>,
    #[serde(rename = "monitorType")]
    pub monitor_type: MonitorType,
}

/// Flattens a timeseries. Output length is rows × `Parameter::ALL.len()`.
pub fn to_long(ts: &RawsTimeseries) -> Vec<LongRecord> {
    let meta = &ts.meta;
    let mut rows = Vec::with_capacity(ts.data.len() * Parameter::ALL.len());

    for obs in &ts.data {
        for parameter in Parameter::ALL {
            rows.push(LongRecord {
                nws_id: meta.nws_id.clone(),
                wrcc_id: meta.wrcc_id.clone(),
                site_name: meta.site_name.clone(),
                longitude: meta.longitude,
                latitude: meta.latitude,
                datetime: obs.datetime,
                parameter,
                value: parameter.value(obs),
                monitor_type: obs.monitor_type,
            });
        }
    }

    rows
}

/// Re-aggregates long rows into wide observations, grouped by datetime in
/// first-seen order. Parameters absent for a timestamp stay missing.
///
/// # Errors
/// `LongFormat` if a (datetime, parameter) pair appears twice or one
/// timestamp carries two monitor types.
pub fn widen(rows: &[LongRecord]) -> Result<Vec<Observation>> {
    let mut observations: Vec<Observation> = Vec::new();
    let mut index: HashMap<DateTime<Utc>, usize> = HashMap::new();
    let mut seen: HashSet<(DateTime<Utc>, Parameter)> = HashSet::new();

    for row in rows {
        if !seen.insert((row.datetime, row.parameter)) {
            return Err(RawsError::LongFormat {
                reason: format!("duplicate {} at {}", row.parameter, row.datetime),
            });
        }

        let i = *index.entry(row.datetime).or_insert_with(|| {
            observations.push(Observation::empty(row.datetime, row.monitor_type));
            observations.len() - 1
        });

        let obs = &mut observations[i];
        if obs.monitor_type != row.monitor_type {
            return Err(RawsError::LongFormat {
                reason: format!("conflicting monitor types at {}", row.datetime),
            });
        }
        row.parameter.set_value(obs, row.value);
    }

    Ok(observations)
}

/// Resolves a long-format parameter name read back from CSV or another
/// untyped source.
pub fn parse_parameter(name: &str) -> Result<Parameter> {
    Parameter::from_name(name).ok_or_else(|| RawsError::LongFormat {
        reason: format!("unknown parameter '{}'", name),
    })
}
