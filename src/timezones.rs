/// Reference table of fixed standard-time UTC offsets.
///
/// RAWS loggers record local standard time all year round, so station
/// timestamps are shifted with the zone's winter offset and never with
/// daylight-saving rules. This is the single source of truth for those
/// offsets; station metadata only carries the IANA zone name.

use crate::error::{RawsError, Result};

/// A timezone and its standard-time offset from UTC.
pub struct ZoneOffset {
    /// IANA zone name.
    pub timezone: &'static str,
    /// Hours east of UTC during standard time.
    pub utc_offset: f64,
}

/// Zones RAWS stations report in: the US, its territories, and UTC.
pub static ZONE_OFFSETS: &[ZoneOffset] = &[
    ZoneOffset { timezone: "UTC", utc_offset: 0.0 },
    ZoneOffset { timezone: "Etc/UTC", utc_offset: 0.0 },
    // Pacific
    ZoneOffset { timezone: "America/Los_Angeles", utc_offset: -8.0 },
    ZoneOffset { timezone: "America/Vancouver", utc_offset: -8.0 },
    ZoneOffset { timezone: "America/Tijuana", utc_offset: -8.0 },
    // Mountain
    ZoneOffset { timezone: "America/Denver", utc_offset: -7.0 },
    ZoneOffset { timezone: "America/Boise", utc_offset: -7.0 },
    ZoneOffset { timezone: "America/Phoenix", utc_offset: -7.0 },
    // Central
    ZoneOffset { timezone: "America/Chicago", utc_offset: -6.0 },
    ZoneOffset { timezone: "America/Menominee", utc_offset: -6.0 },
    ZoneOffset { timezone: "America/North_Dakota/Center", utc_offset: -6.0 },
    ZoneOffset { timezone: "America/North_Dakota/New_Salem", utc_offset: -6.0 },
    ZoneOffset { timezone: "America/North_Dakota/Beulah", utc_offset: -6.0 },
    ZoneOffset { timezone: "America/Indiana/Knox", utc_offset: -6.0 },
    ZoneOffset { timezone: "America/Indiana/Tell_City", utc_offset: -6.0 },
    // Eastern
    ZoneOffset { timezone: "America/New_York", utc_offset: -5.0 },
    ZoneOffset { timezone: "America/Detroit", utc_offset: -5.0 },
    ZoneOffset { timezone: "America/Indiana/Indianapolis", utc_offset: -5.0 },
    ZoneOffset { timezone: "America/Indiana/Marengo", utc_offset: -5.0 },
    ZoneOffset { timezone: "America/Indiana/Petersburg", utc_offset: -5.0 },
    ZoneOffset { timezone: "America/Indiana/Vevay", utc_offset: -5.0 },
    ZoneOffset { timezone: "America/Indiana/Vincennes", utc_offset: -5.0 },
    ZoneOffset { timezone: "America/Indiana/Winamac", utc_offset: -5.0 },
    ZoneOffset { timezone: "America/Kentucky/Louisville", utc_offset: -5.0 },
    ZoneOffset { timezone: "America/Kentucky/Monticello", utc_offset: -5.0 },
    // Atlantic
    ZoneOffset { timezone: "America/Puerto_Rico", utc_offset: -4.0 },
    ZoneOffset { timezone: "America/St_Thomas", utc_offset: -4.0 },
    ZoneOffset { timezone: "America/Halifax", utc_offset: -4.0 },
    ZoneOffset { timezone: "America/St_Johns", utc_offset: -3.5 },
    // Alaska
    ZoneOffset { timezone: "America/Anchorage", utc_offset: -9.0 },
    ZoneOffset { timezone: "America/Juneau", utc_offset: -9.0 },
    ZoneOffset { timezone: "America/Sitka", utc_offset: -9.0 },
    ZoneOffset { timezone: "America/Yakutat", utc_offset: -9.0 },
    ZoneOffset { timezone: "America/Nome", utc_offset: -9.0 },
    ZoneOffset { timezone: "America/Metlakatla", utc_offset: -9.0 },
    ZoneOffset { timezone: "America/Adak", utc_offset: -10.0 },
    // Pacific islands
    ZoneOffset { timezone: "Pacific/Honolulu", utc_offset: -10.0 },
    ZoneOffset { timezone: "Pacific/Pago_Pago", utc_offset: -11.0 },
    ZoneOffset { timezone: "Pacific/Guam", utc_offset: 10.0 },
    ZoneOffset { timezone: "Pacific/Saipan", utc_offset: 10.0 },
];

/// Looks up the standard-time offset (hours) for an IANA zone name.
///
/// # Errors
/// `RawsError::UnknownTimezone` if the zone is not in `ZONE_OFFSETS`.
pub fn utc_offset_hours(timezone: &str) -> Result<f64> {
    ZONE_OFFSETS
        .iter()
        .find(|z| z.timezone == timezone)
        .map(|z| z.utc_offset)
        .ok_or_else(|| RawsError::UnknownTimezone {
            timezone: timezone.to_string(),
        })
}
