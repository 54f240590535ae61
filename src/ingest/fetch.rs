/// Raw text retrieval.
///
/// `RawFetcher` is the seam between the network and everything else: the
/// client asks for a URL and gets the body back as text. The blocking HTTP
/// implementation is used in production; tests substitute canned bodies.

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::config::RawsConfig;
use crate::error::{RawsError, Result};

/// Retrieves the body of a URL as text.
pub trait RawFetcher {
    fn fetch_text(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP fetcher backed by `reqwest`.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a client with the configured user agent and timeout.
    pub fn new(config: &RawsConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;
        Ok(Self { client })
    }
}

impl RawFetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> Result<String> {
        info!(%url, "downloading raw data");

        let response = self.client.get(url).send()?;

        if !response.status().is_success() {
            return Err(RawsError::UpstreamStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let text = response.text()?;
        debug!(bytes = text.len(), "download complete");
        Ok(text)
    }
}
