// src/core/net.rs
//
// Blocking HTTP GET. One request per user action; nothing is cached.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

use crate::config::consts::{BROWSER_UA, TIMEOUT_SECS};
use crate::error::{Result, ScrapeError};

/// Whether to identify as a browser. The standings page is fetched without.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Agent {
    Plain,
    Browser,
}

/// Page source seam: the live site in the app, canned HTML in tests.
pub trait Fetch {
    fn get(&self, url: &str, agent: Agent) -> Result<String>;

    /// Raw bytes (headshot images). Default: not supported.
    fn get_bytes(&self, url: &str, _agent: Agent) -> Result<Vec<u8>> {
        Err(ScrapeError::fetch(url, "binary fetch not supported"))
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(|e| ScrapeError::fetch("<client>", e.to_string()))?;
        Ok(Self { client })
    }

    fn send(&self, url: &str, agent: Agent) -> Result<reqwest::blocking::Response> {
        let mut req = self.client.get(url);
        if agent == Agent::Browser {
            req = req.header(USER_AGENT, BROWSER_UA);
        }
        let resp = req.send().map_err(|e| ScrapeError::fetch(url, e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::fetch(url, format!("HTTP status {}", status.as_u16())));
        }
        Ok(resp)
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str, agent: Agent) -> Result<String> {
        logd!("GET {url} ({agent:?})");
        let body = self
            .send(url, agent)?
            .text()
            .map_err(|e| ScrapeError::fetch(url, e.to_string()))?;
        logd!("GET {url} → {} bytes", body.len());
        Ok(body)
    }

    fn get_bytes(&self, url: &str, agent: Agent) -> Result<Vec<u8>> {
        logd!("GET {url} ({agent:?}, binary)");
        let bytes = self
            .send(url, agent)?
            .bytes()
            .map_err(|e| ScrapeError::fetch(url, e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
