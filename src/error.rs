// src/error.rs
// =============================================================================
// Typed errors for the fetch, scrape and output layers.
//
// The binary itself works with anyhow::Result (see main.rs); these variants
// exist so the fetcher can decide what is worth retrying and so tests can
// match on specific failures.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ScrapeError {
    /// Whether another attempt at the same request could succeed.
    ///
    /// Timeouts, connection failures, 5xx and 429 are transient; every other
    /// status and all local errors are not.
    pub fn is_transient(&self) -> bool {
        match self {
            ScrapeError::Http { source, .. } => source.is_timeout() || source.is_connect(),
            ScrapeError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
