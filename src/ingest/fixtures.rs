/// Test fixtures: representative FW13 lines and WRCC responses.
///
/// FW13 lines are 75 columns, positional:
///   W13 | stationID(6) | YYYYMMDD | HHMM | obsType | wxCode
///   | dryBulb(3) | moisture(3) | windDir(3) | windSpd(3) | fuelMoist(2)
///   | maxT(3) | minT(3) | maxRH(3) | minRH(3) | pcpDur(2) | pcpAmt(5)
///   | wet | herb(2) | shrub(2) | moistType | measType | season
///   | solar(4) | gustDir(3) | gustSpd(3) | snow
///
/// WRCC responses are comma delimited with a title line and two `:`
/// prefixed header rows (labels, then units) ahead of the data rows.

/// US units, relative humidity, 0.050 in cumulative precipitation.
#[cfg(test)]
pub(crate) fn fixture_fw13_line_us() -> &'static str {
    "W13500742201701011300R0 50 45270 1012 55 38 80 40 000050N    213 450280 22N"
}

/// Only the dry bulb temperature and the type codes are reported.
#[cfg(test)]
pub(crate) fn fixture_fw13_line_sparse() -> &'static str {
    "W13500742201701011400R0 61                                   21            "
}

/// Builds an FW13 line varying the fields tests care about; the rest match
/// `fixture_fw13_line_us`.
#[cfg(test)]
pub(crate) fn fw13_line(
    station_id: &str,
    date: &str,
    time: &str,
    dry_bulb: &str,
    moisture_type: &str,
    measurement_type: &str,
    precip_amount: &str,
) -> String {
    format!(
        "W13{:>6}{:>8}{:>4}R0{:>3} 45270 1012 55 38 80 40 0{:>5}N    {}{}3 450280 22N",
        station_id, date, time, dry_bulb, precip_amount, moisture_type, measurement_type
    )
}

/// Three US-unit hours with a midnight counter reset before the last one:
/// dry bulb 50/60/70 °F, cumulative precipitation 0 / 1.000 / 0.500 in.
#[cfg(test)]
pub(crate) fn fixture_fw13_reset_body() -> String {
    [
        fw13_line("500742", "20170101", "2200", "50", "2", "1", "00000"),
        fw13_line("500742", "20170101", "2300", "60", "2", "1", "01000"),
        fw13_line("500742", "20170102", "0000", "70", "2", "1", "00500"),
    ]
    .join("\n")
}

/// Metric WRCC response, including a row of missing markers.
#[cfg(test)]
pub(crate) fn fixture_wrcc_metric() -> &'static str {
    " Wenatchee  Washington
:Date/Time,Precip,Wind Speed,Wind Direc,Av Air Temp,Fuel Temp,Rel Humidty,Battery Voltage,Fuel Moistr,Dir MxGust,Mx Gust Spd,Solar Rad.
:YYMMDDhhmm,mm,m/s,Deg,Deg C,Deg C,%,volts,%,Deg,m/s,W/m2
1701010000,0.00,1.3,225,-2.5,-3.1,85,13.2,14.5,230,3.1,0
1701010100,0.25,2.2,240,-2.8,-3.4,88,13.2,14.6,250,4.0,0
1701010200,-9999,-9999,-9999,-3.0,-3.6,90,13.1,14.7,-9999,-9999,0
"
}

/// English-unit WRCC response.
#[cfg(test)]
pub(crate) fn fixture_wrcc_english() -> &'static str {
    " Wenatchee  Washington
:Date/Time,Precip,Wind Speed,Wind Direc,Av Air Temp,Rel Humidty
:YYMMDDhhmm,in,mph,Deg,Deg F,%
1707151400,0.10,10,180,86,20
"
}

/// What WRCC returns for an unknown station or a bad password.
#[cfg(test)]
pub(crate) fn fixture_wrcc_error_page() -> &'static str {
    "<html><body>Access to this station requires a password.</body></html>"
}
