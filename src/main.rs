//! RAWS fetch tool
//!
//! Downloads one station's observations from the FW13 archive or the WRCC
//! live service, harmonizes them, and prints CSV to stdout.
//!
//! Usage:
//!   raws_fetch --fw13 500742 [--config raws.toml] [--long]
//!   raws_fetch --wrcc waWENU --start 2017-01-01 --end 2017-01-31 [--json]
//!
//! Environment:
//!   RUST_LOG            - log filter (e.g. `raws_ingest=debug`)
//!   RAWS_WRCC_PASSWORD  - WRCC password, overrides the config file
//!   RAWS_METADATA_PATH  - station metadata table, overrides the config file

use chrono::NaiveDate;
use raws_ingest::analysis::long_format;
use raws_ingest::config::{self, RawsConfig};
use raws_ingest::{Parameter, RawsClient, RawsTimeseries};
use std::env;
use std::error::Error;
use std::process;

enum Source {
    Fw13(String),
    Wrcc(String),
}

struct Args {
    source: Source,
    config_path: Option<String>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    long: bool,
    json: bool,
}

fn usage(program: &str) -> ! {
    eprintln!(
        "Usage: {} (--fw13 ID | --wrcc ID) [--start YYYY-MM-DD] [--end YYYY-MM-DD] [--config PATH] [--long] [--json]",
        program
    );
    process::exit(1);
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| format!("invalid date '{}': {}", value, e))
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut source = None;
    let mut config_path = None;
    let mut start = None;
    let mut end = None;
    let mut long = false;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "--fw13" | "--wrcc" | "--config" | "--start" | "--end" if value.is_none() => {
                return Err(format!("{} requires a value", args[i]));
            }
            "--fw13" => source = value.map(|v| Source::Fw13(v.clone())),
            "--wrcc" => source = value.map(|v| Source::Wrcc(v.clone())),
            "--config" => config_path = value.cloned(),
            "--start" => start = value.map(|v| parse_date(v)).transpose()?,
            "--end" => end = value.map(|v| parse_date(v)).transpose()?,
            "--long" => {
                long = true;
                i += 1;
                continue;
            }
            "--json" => {
                json = true;
                i += 1;
                continue;
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
        i += 2;
    }

    let source = source.ok_or("one of --fw13 or --wrcc is required")?;
    if let Source::Fw13(_) = source {
        if start.is_some() != end.is_some() {
            return Err("--fw13 filtering needs both --start and --end".to_string());
        }
    }
    Ok(Args { source, config_path, start, end, long, json })
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn csv_value(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn print_wide(ts: &RawsTimeseries) {
    let header: Vec<&str> = Parameter::ALL.iter().map(|p| p.as_str()).collect();
    println!("datetime,{},monitorType", header.join(","));
    for obs in &ts.data {
        let values: Vec<String> = Parameter::ALL.iter().map(|p| csv_value(p.value(obs))).collect();
        println!("{},{},{}", obs.datetime.to_rfc3339(), values.join(","), obs.monitor_type);
    }
}

fn print_long(ts: &RawsTimeseries) {
    println!("nwsID,wrccID,siteName,longitude,latitude,datetime,parameter,value");
    for row in long_format::to_long(ts) {
        println!(
            "{},{},\"{}\",{},{},{},{},{}",
            row.nws_id.unwrap_or_default(),
            row.wrcc_id.unwrap_or_default(),
            row.site_name.replace('"', "\"\""),
            row.longitude,
            row.latitude,
            row.datetime.to_rfc3339(),
            row.parameter,
            csv_value(row.value)
        );
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = match &args.config_path {
        Some(path) => config::load_config(path)?,
        None => RawsConfig::default(),
    }
    .with_env_overrides();

    let client = RawsClient::new(config)?;
    let ts = match &args.source {
        Source::Fw13(id) => client.fw13_timeseries(id, None)?,
        Source::Wrcc(id) => client.wrcc_timeseries(id, None, args.start, args.end)?,
    };

    let ts = match (&args.source, args.start, args.end) {
        (Source::Fw13(_), Some(start), Some(end)) => ts.filter_date(start, end)?,
        _ => ts,
    };

    eprintln!(
        "{} ({}, {}): {} observations",
        ts.meta.site_name, ts.meta.latitude, ts.meta.longitude, ts.len()
    );
    if ts.is_empty() {
        return Ok(());
    }

    match (args.long, args.json) {
        (true, true) => println!("{}", serde_json::to_string_pretty(&long_format::to_long(&ts))?),
        (false, true) => println!("{}", serde_json::to_string_pretty(&ts)?),
        (true, false) => print_long(&ts),
        (false, false) => print_wide(&ts),
    }
    Ok(())
}

fn main() {
    dotenv::dotenv().ok();
    init_logging();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("raws_fetch");
    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {}", e);
            usage(program);
        }
    };

    if let Err(e) = run(parsed) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
