// src/fetch/client.rs
// =============================================================================
// HTTP fetching with timeout, user agent and retries.
//
// How a fetch works:
// 1. GET the URL with the shared client
// 2. Non-2xx responses become ScrapeError::Status
// 3. Transient failures (timeouts, connect errors, 5xx, 429) are retried
//    up to `retries` times, waiting a little longer after every attempt
// =============================================================================

use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_BACKOFF: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    retries: u32,
    delay: Duration,
    backoff: Duration,
}

impl Fetcher {
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(ScrapeError::Client)?;

        Ok(Fetcher {
            client,
            retries: config.retries,
            delay: config.delay,
            backoff: DEFAULT_BACKOFF,
        })
    }

    /// Replaces the base retry backoff (the wait grows linearly per attempt).
    #[cfg(test)]
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Sleeps for the configured delay between two page requests
    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    /// Fetches a page and returns its HTML, retrying transient failures.
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        let mut attempt = 0;

        loop {
            match self.fetch_once(url).await {
                Ok(html) => return Ok(html),
                Err(e) if e.is_transient() && attempt < self.retries => {
                    attempt += 1;
                    warn!("{} (attempt {}/{}), retrying", e, attempt, self.retries + 1);
                    tokio::time::sleep(self.backoff * attempt).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn fetch_once(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ScrapeError::Http { url: url.to_string(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| ScrapeError::Http { url: url.to_string(), source })
    }
}
