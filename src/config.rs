/// Service configuration loader - parses raws.toml
///
/// Keeps upstream endpoints, the WRCC password and the station metadata
/// location out of code. Every key is optional; a missing file section
/// falls back to the public FW13 and WRCC endpoints.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{RawsError, Result};

pub const DEFAULT_FW13_BASE_URL: &str = "https://cefa.dri.edu/raws/fw13";
pub const DEFAULT_WRCC_BASE_URL: &str = "https://wrcc.dri.edu/cgi-bin/wea_list2.pl";

/// Environment variable overriding `wrcc_password`.
pub const ENV_WRCC_PASSWORD: &str = "RAWS_WRCC_PASSWORD";
/// Environment variable overriding `metadata_path`.
pub const ENV_METADATA_PATH: &str = "RAWS_METADATA_PATH";

/// Settings passed explicitly to the client and metadata loader.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawsConfig {
    /// FW13 archive directory; station files live at `{base}/{id}.fw13`.
    pub fw13_base_url: String,
    /// WRCC `wea_list2` CGI endpoint.
    pub wrcc_base_url: String,
    /// Required by WRCC for some station classes.
    pub wrcc_password: Option<String>,
    /// TOML station metadata table used when callers pass none.
    pub metadata_path: Option<PathBuf>,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for RawsConfig {
    fn default() -> Self {
        Self {
            fw13_base_url: DEFAULT_FW13_BASE_URL.to_string(),
            wrcc_base_url: DEFAULT_WRCC_BASE_URL.to_string(),
            wrcc_password: None,
            metadata_path: None,
            user_agent: concat!("raws_ingest/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 60,
        }
    }
}

impl RawsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Applies `RAWS_WRCC_PASSWORD` / `RAWS_METADATA_PATH` when set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(password) = env::var(ENV_WRCC_PASSWORD) {
            if !password.is_empty() {
                self.wrcc_password = Some(password);
            }
        }
        if let Ok(path) = env::var(ENV_METADATA_PATH) {
            if !path.is_empty() {
                self.metadata_path = Some(PathBuf::from(path));
            }
        }
        self
    }
}

/// Parses a configuration document.
pub fn parse_config(contents: &str) -> Result<RawsConfig> {
    let config: RawsConfig = toml::from_str(contents)?;

    if config.fw13_base_url.trim().is_empty() || config.wrcc_base_url.trim().is_empty() {
        return Err(RawsError::Configuration {
            message: "base URLs must not be empty".to_string(),
        });
    }

    Ok(config)
}

/// Loads configuration from a TOML file.
///
/// Unlike the metadata table, a configuration file is optional for callers:
/// use `RawsConfig::default()` when there is none.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RawsConfig> {
    let contents = fs::read_to_string(path.as_ref())?;
    parse_config(&contents)
}
