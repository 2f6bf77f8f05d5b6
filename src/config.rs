// src/config.rs
// =============================================================================
// Validated run configuration.
//
// Cli (cli.rs) is what the user typed; ScrapeConfig is what the rest of the
// program works with: the base URL is already parsed and the numeric limits
// are known to be usable.
// =============================================================================

use crate::cli::{Cli, DEFAULT_USER_AGENT};
use crate::error::{Result, ScrapeError};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub base_url: Url,
    pub category: Option<String>,
    pub output_dir: PathBuf,
    pub max_pages: usize,
    pub delay: Duration,
    pub timeout: Duration,
    pub retries: u32,
    pub concurrency: usize,
    pub user_agent: String,
    pub subcategories: bool,
}

impl ScrapeConfig {
    /// Builds a config with defaults for everything but the base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(ScrapeConfig {
            base_url: parse_base_url(base_url)?,
            category: None,
            output_dir: PathBuf::from("output"),
            max_pages: 100,
            delay: Duration::from_millis(500),
            timeout: Duration::from_secs(30),
            retries: 2,
            concurrency: 1,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            subcategories: false,
        })
    }
}

impl TryFrom<&Cli> for ScrapeConfig {
    type Error = ScrapeError;

    fn try_from(cli: &Cli) -> Result<Self> {
        let category = cli
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Ok(ScrapeConfig {
            category,
            output_dir: PathBuf::from(&cli.output_dir),
            // 0 means "first page only"
            max_pages: cli.max_pages,
            delay: Duration::from_millis(cli.delay_ms),
            timeout: Duration::from_secs(cli.timeout_secs.max(1)),
            retries: cli.retries,
            concurrency: cli.concurrency.max(1),
            user_agent: cli.user_agent.clone(),
            subcategories: cli.subcategories,
            ..ScrapeConfig::new(&cli.url)?
        })
    }
}

// Only absolute http(s) URLs make sense as a starting point
fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| ScrapeError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        scheme => Err(ScrapeError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("expected an http(s) URL with a host, got scheme '{}'", scheme),
        }),
    }
}
