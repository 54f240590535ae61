/// Local standard time → UTC.
///
/// RAWS timestamps are local standard time with no daylight saving and no
/// zone designator. They are parsed as if they were UTC and then shifted by
/// the station's fixed standard offset, which a zone-aware parse would get
/// wrong for every summer date.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

/// Joins `YYYYMMDD` and `HHMM` and parses the result as a naive timestamp.
///
/// Both fields must be exactly eight and four digits; chrono would
/// otherwise accept short trailing fields and shift them into the wrong
/// position.
pub fn parse_local(date: &str, time: &str) -> Option<NaiveDateTime> {
    let (date, time) = (date.trim(), time.trim());
    if !is_fixed_digits(date, 8) || !is_fixed_digits(time, 4) {
        return None;
    }
    let stamp = format!("{}{}", date, time);
    NaiveDateTime::parse_from_str(&stamp, "%Y%m%d%H%M").ok()
}

fn is_fixed_digits(field: &str, width: usize) -> bool {
    field.len() == width && field.bytes().all(|b| b.is_ascii_digit())
}

/// Shifts a local-standard-time timestamp to UTC given the zone's offset
/// in hours east of UTC (negative in the Americas).
pub fn local_standard_to_utc(local: NaiveDateTime, utc_offset_hours: f64) -> DateTime<Utc> {
    let offset = Duration::seconds((utc_offset_hours * 3600.0).round() as i64);
    DateTime::from_naive_utc_and_offset(local - offset, Utc)
}

/// The inverse shift, for filtering on local calendar days.
pub fn utc_to_local_standard(utc: DateTime<Utc>, utc_offset_hours: f64) -> NaiveDateTime {
    let offset = Duration::seconds((utc_offset_hours * 3600.0).round() as i64);
    utc.naive_utc() + offset
}

/// Parses and shifts in one step. `None` if the date/time are unreadable.
pub fn harmonize(date: &str, time: &str, utc_offset_hours: f64) -> Option<DateTime<Utc>> {
    parse_local(date, time).map(|local| local_standard_to_utc(local, utc_offset_hours))
}
