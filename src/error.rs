// src/error.rs
//
// One error type for the whole pipeline. The GUI boundary turns any of
// these into a status line; nothing here is fatal to the process.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network failure, non-2xx status, or a page with nothing to scrape.
    #[error("could not fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The page loaded but an expected table/element was not there.
    #[error("could not parse page: {0}")]
    Parse(String),

    /// A statistic could not be computed (e.g. text column selected).
    #[error("could not compute statistics: {0}")]
    Conversion(String),
}

impl ScrapeError {
    pub fn fetch(url: &str, reason: impl Into<String>) -> Self {
        ScrapeError::Fetch { url: s!(url), reason: reason.into() }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        ScrapeError::Parse(msg.into())
    }

    pub fn conversion(msg: impl Into<String>) -> Self {
        ScrapeError::Conversion(msg.into())
    }

    pub fn is_fetch(&self) -> bool { matches!(self, ScrapeError::Fetch { .. }) }
    pub fn is_parse(&self) -> bool { matches!(self, ScrapeError::Parse(_)) }
    pub fn is_conversion(&self) -> bool { matches!(self, ScrapeError::Conversion(_)) }
}
