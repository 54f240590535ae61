/// RAWS timeseries objects and the client that builds them.
///
/// A `RawsTimeseries` pairs one station's metadata with its canonical
/// hourly observations, ascending by UTC time. `RawsClient` runs the full
/// chain for a station: normalize the identifier, resolve metadata,
/// fetch, parse, harmonize, assemble.

use chrono::{Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::RawsConfig;
use crate::error::{RawsError, Result};
use crate::harmonize::{self, datetime};
use crate::ingest::fetch::{HttpFetcher, RawFetcher};
use crate::ingest::{fw13, wrcc};
use crate::model::{MonitorType, Observation, RawObservation, StationMeta};
use crate::stations::StationTable;

// ---------------------------------------------------------------------------
// Timeseries object
// ---------------------------------------------------------------------------

/// Station metadata plus its harmonized observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawsTimeseries {
    pub meta: StationMeta,
    pub data: Vec<Observation>,
}

impl RawsTimeseries {
    /// True when there are no observation rows. Callers check this before
    /// plotting or aggregating; an empty object is a normal result.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Keeps observations whose local-standard-time calendar day falls in
    /// `[start, end]`, both inclusive.
    ///
    /// # Errors
    /// - `InvalidDateRange` if `start > end`.
    /// - `UnknownTimezone` if the station's zone has no reference offset.
    pub fn filter_date(mut self, start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(RawsError::InvalidDateRange { start, end });
        }
        let offset = self.meta.utc_offset_hours()?;

        self.data.retain(|obs| {
            let local_day = datetime::utc_to_local_standard(obs.datetime, offset).date();
            local_day >= start && local_day <= end
        });
        Ok(self)
    }
}

/// Builds a timeseries from pre-parsed raw observations without touching
/// the network.
///
/// # Errors
/// `UnknownTimezone` if the station's zone has no reference offset.
pub fn assemble(
    meta: StationMeta,
    raw: Vec<RawObservation>,
    monitor_type: MonitorType,
) -> Result<RawsTimeseries> {
    let offset = meta.utc_offset_hours()?;
    let data = harmonize::harmonize_observations(raw, monitor_type, offset);
    Ok(RawsTimeseries { meta, data })
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Fetches and assembles RAWS timeseries, one station per call.
pub struct RawsClient {
    config: RawsConfig,
    fetcher: Box<dyn RawFetcher>,
}

impl RawsClient {
    /// Client backed by the blocking HTTP fetcher.
    pub fn new(config: RawsConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::with_fetcher(config, Box::new(fetcher)))
    }

    /// Client backed by any fetcher (canned bodies in tests, a cache, ...).
    pub fn with_fetcher(config: RawsConfig, fetcher: Box<dyn RawFetcher>) -> Self {
        Self { config, fetcher }
    }

    /// Loads the full metadata table from the configured path.
    pub fn load_metadata(&self) -> Result<StationTable> {
        let path = self.config.metadata_path.as_ref().ok_or_else(|| RawsError::Configuration {
            message: "no station metadata supplied and metadata_path is not configured".to_string(),
        })?;
        StationTable::load(path)
    }

    /// Timeseries for an FW13 station from the historical archive.
    ///
    /// `meta` is searched when supplied, otherwise the configured table is
    /// loaded. An empty or unparseable archive file yields an empty
    /// timeseries.
    ///
    /// # Errors
    /// - `MissingStationId` / `InvalidStationId` before any I/O.
    /// - `StationNotFound` if metadata has no matching `nwsID`.
    /// - `UnknownTimezone`, and fetch errors from the transport.
    pub fn fw13_timeseries(&self, nws_id: &str, meta: Option<&StationTable>) -> Result<RawsTimeseries> {
        let station_id = fw13::normalize_station_id(nws_id)?;
        let station = self.resolve(meta, |table| table.find_fw13(&station_id).cloned())?;

        let url = fw13::build_fw13_url(&self.config.fw13_base_url, &station_id);
        let body = self.fetcher.fetch_text(&url)?;
        let raw: Vec<RawObservation> = fw13::parse_fw13(&body).iter().map(|r| r.to_raw()).collect();

        let ts = assemble(station, raw, MonitorType::Fw13)?;
        info!(station = %station_id, rows = ts.len(), "assembled FW13 timeseries");
        Ok(ts)
    }

    /// Timeseries for a WRCC station over `[start, end]`, defaulting to the
    /// current month.
    pub fn wrcc_timeseries(
        &self,
        wrcc_id: &str,
        meta: Option<&StationTable>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<RawsTimeseries> {
        let station_id = wrcc::normalize_station_id(wrcc_id)?;
        let (start, end) = resolve_range(start, end);
        if start > end {
            return Err(RawsError::InvalidDateRange { start, end });
        }
        let station = self.resolve(meta, |table| table.find_wrcc(&station_id).cloned())?;

        let url = wrcc::build_wrcc_url(
            &self.config.wrcc_base_url,
            &station_id,
            start,
            end,
            self.config.wrcc_password.as_deref(),
        );
        let body = self.fetcher.fetch_text(&url)?;
        let raw = wrcc::parse_wrcc(&body);

        let ts = assemble(station, raw, MonitorType::Wrcc)?;
        info!(station = %station_id, rows = ts.len(), %start, %end, "assembled WRCC timeseries");
        Ok(ts)
    }

    fn resolve<F>(&self, meta: Option<&StationTable>, find: F) -> Result<StationMeta>
    where
        F: Fn(&StationTable) -> Result<StationMeta>,
    {
        match meta {
            Some(table) => find(table),
            None => {
                debug!("no metadata supplied; loading configured table");
                let table = self.load_metadata()?;
                find(&table)
            }
        }
    }
}

/// Fills missing bounds: a lone `end` starts at the first of its month, a
/// lone `start` ends at the last of its month, neither means this month.
fn resolve_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> (NaiveDate, NaiveDate) {
    let start = start.unwrap_or_else(|| {
        let anchor = end.unwrap_or_else(|| Utc::now().date_naive());
        anchor.with_day(1).unwrap_or(anchor)
    });
    let end = end.unwrap_or_else(|| end_of_month(start));
    (start, end)
}

fn end_of_month(day: NaiveDate) -> NaiveDate {
    let (y, m) = if day.month() == 12 {
        (day.year() + 1, 1)
    } else {
        (day.year(), day.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)
        .map(|first| first - Duration::days(1))
        .unwrap_or(day)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::fixtures::*;
    use chrono::TimeZone;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Returns a fixed body and records requested URLs.
    struct CannedFetcher {
        body: String,
        urls: Rc<RefCell<Vec<String>>>,
    }

    impl RawFetcher for CannedFetcher {
        fn fetch_text(&self, url: &str) -> Result<String> {
            self.urls.borrow_mut().push(url.to_string());
            Ok(self.body.clone())
        }
    }

    fn client_with(body: &str) -> (RawsClient, Rc<RefCell<Vec<String>>>) {
        let urls = Rc::new(RefCell::new(Vec::new()));
        let fetcher = CannedFetcher {
            body: body.to_string(),
            urls: Rc::clone(&urls),
        };
        (RawsClient::with_fetcher(RawsConfig::default(), Box::new(fetcher)), urls)
    }

    fn wenatchee() -> StationMeta {
        StationMeta {
            nws_id: Some("500742".to_string()),
            wrcc_id: Some("waWENU".to_string()),
            site_name: "Wenatchee".to_string(),
            longitude: -120.3,
            latitude: 47.4,
            timezone: "America/Los_Angeles".to_string(),
            elevation: None,
            state: Some("WA".to_string()),
            agency: None,
        }
    }

    fn table() -> StationTable {
        StationTable::new(vec![wenatchee()])
    }

    // --- Assembler ----------------------------------------------------------

    #[test]
    fn test_fw13_end_to_end() {
        let (client, urls) = client_with(&fixture_fw13_reset_body());
        let ts = client.fw13_timeseries("500742", Some(&table())).unwrap();

        assert_eq!(urls.borrow().as_slice(), ["https://cefa.dri.edu/raws/fw13/500742.fw13"]);
        assert_eq!(ts.meta.site_name, "Wenatchee");
        assert_eq!(ts.len(), 3);
        assert!(!ts.is_empty());

        let expected = [10.0, 15.56, 21.11];
        for (obs, want) in ts.data.iter().zip(expected) {
            assert!((obs.temperature.unwrap() - want).abs() < 0.01);
            assert_eq!(obs.monitor_type, MonitorType::Fw13);
        }
        assert!(ts.data[2].precipitation.unwrap() >= 0.0);
        assert_eq!(ts.data[0].datetime, Utc.with_ymd_and_hms(2017, 1, 2, 6, 0, 0).unwrap());
    }

    #[test]
    fn test_missing_station_id_fails_before_fetch() {
        let (client, urls) = client_with("");
        let result = client.fw13_timeseries("   ", Some(&table()));
        assert!(matches!(result, Err(RawsError::MissingStationId)));
        assert!(urls.borrow().is_empty(), "no request should be made");
    }

    #[test]
    fn test_unknown_station_fails_before_fetch() {
        let (client, urls) = client_with("");
        let result = client.fw13_timeseries("123456", Some(&table()));
        assert!(matches!(result, Err(RawsError::StationNotFound { .. })));
        assert!(urls.borrow().is_empty());
    }

    #[test]
    fn test_empty_response_gives_empty_timeseries() {
        let (client, _) = client_with("");
        let ts = client.fw13_timeseries("500742", Some(&table())).unwrap();
        assert!(ts.is_empty());
        assert_eq!(ts.meta, wenatchee());
    }

    #[test]
    fn test_unknown_timezone_is_error() {
        let mut meta = wenatchee();
        meta.timezone = "Nowhere/Special".to_string();
        let (client, _) = client_with(&fixture_fw13_reset_body());
        let result = client.fw13_timeseries("500742", Some(&StationTable::new(vec![meta])));
        assert!(matches!(result, Err(RawsError::UnknownTimezone { .. })));
    }

    #[test]
    fn test_no_metadata_and_no_path_is_configuration_error() {
        let (client, _) = client_with("");
        let result = client.fw13_timeseries("500742", None);
        assert!(matches!(result, Err(RawsError::Configuration { .. })));
    }

    #[test]
    fn test_wrcc_end_to_end_uses_password() {
        let urls = Rc::new(RefCell::new(Vec::new()));
        let fetcher = CannedFetcher {
            body: fixture_wrcc_metric().to_string(),
            urls: Rc::clone(&urls),
        };
        let config = RawsConfig {
            wrcc_password: Some("pw".to_string()),
            ..RawsConfig::default()
        };
        let client = RawsClient::with_fetcher(config, Box::new(fetcher));
        let start = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2017, 1, 31).unwrap();

        let ts = client
            .wrcc_timeseries("WAWENU", Some(&table()), Some(start), Some(end))
            .unwrap();

        assert!(urls.borrow()[0].contains("stn=waWENU"));
        assert!(urls.borrow()[0].ends_with("&pwd=pw"));
        assert_eq!(ts.len(), 3);
        assert_eq!(ts.data[1].precipitation, Some(0.25));
        assert_eq!(ts.data[0].datetime, Utc.with_ymd_and_hms(2017, 1, 1, 8, 0, 0).unwrap());
        assert!(ts.data.iter().all(|o| o.monitor_type == MonitorType::Wrcc));
    }

    #[test]
    fn test_wrcc_lone_end_requests_that_month() {
        let (client, urls) = client_with(fixture_wrcc_metric());
        let end = NaiveDate::from_ymd_opt(2017, 1, 31).unwrap();

        let ts = client.wrcc_timeseries("waWENU", Some(&table()), None, Some(end)).unwrap();

        assert_eq!(ts.len(), 3);
        assert!(urls.borrow()[0].contains("smon=01&sday=01&syr=17&emon=01&eday=31&eyr=17"));
    }

    #[test]
    fn test_wrcc_rejects_inverted_range() {
        let (client, urls) = client_with("");
        let start = NaiveDate::from_ymd_opt(2017, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();
        let result = client.wrcc_timeseries("waWENU", Some(&table()), Some(start), Some(end));
        assert!(matches!(result, Err(RawsError::InvalidDateRange { .. })));
        assert!(urls.borrow().is_empty());
    }

    // --- Date filter --------------------------------------------------------

    #[test]
    fn test_filter_date_uses_local_standard_days() {
        let (client, _) = client_with(&fixture_fw13_reset_body());
        let ts = client.fw13_timeseries("500742", Some(&table())).unwrap();
        let jan1 = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();
        let jan2 = NaiveDate::from_ymd_opt(2017, 1, 2).unwrap();

        // 22:00 and 23:00 PST on Jan 1 are already Jan 2 in UTC.
        let filtered = ts.clone().filter_date(jan1, jan1).unwrap();
        assert_eq!(filtered.len(), 2);
        let filtered = ts.clone().filter_date(jan2, jan2).unwrap();
        assert_eq!(filtered.len(), 1);
        let filtered = ts.filter_date(jan1, jan2).unwrap();
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_filter_date_rejects_inverted_range() {
        let ts = RawsTimeseries { meta: wenatchee(), data: Vec::new() };
        let result = ts.filter_date(
            NaiveDate::from_ymd_opt(2017, 1, 2).unwrap(),
            NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(),
        );
        assert!(matches!(result, Err(RawsError::InvalidDateRange { .. })));
    }

    // --- Helpers ------------------------------------------------------------

    #[test]
    fn test_end_of_month() {
        let feb = NaiveDate::from_ymd_opt(2016, 2, 10).unwrap();
        assert_eq!(end_of_month(feb), NaiveDate::from_ymd_opt(2016, 2, 29).unwrap());
        let dec = NaiveDate::from_ymd_opt(2017, 12, 1).unwrap();
        assert_eq!(end_of_month(dec), NaiveDate::from_ymd_opt(2017, 12, 31).unwrap());
    }

    #[test]
    fn test_resolve_range_keeps_explicit_bounds() {
        let start = NaiveDate::from_ymd_opt(2017, 3, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2017, 3, 9).unwrap();
        assert_eq!(resolve_range(Some(start), Some(end)), (start, end));
        assert_eq!(resolve_range(Some(start), None).1, NaiveDate::from_ymd_opt(2017, 3, 31).unwrap());
    }

    #[test]
    fn test_resolve_range_lone_end_starts_at_its_month() {
        let end = NaiveDate::from_ymd_opt(2017, 1, 20).unwrap();
        assert_eq!(
            resolve_range(None, Some(end)),
            (NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(), end)
        );
    }

    #[test]
    fn test_resolve_range_defaults_to_current_month() {
        let (start, end) = resolve_range(None, None);
        assert_eq!(start.day(), 1);
        assert_eq!(end, end_of_month(start));
    }
}
