// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The derive API turns the Cli struct below into a parser; every field is
// either a positional argument or a --flag. Defaults live here, validation
// lives in config.rs.
// =============================================================================

use clap::Parser;

// Browser-like user agent; many shops serve an empty shell to unknown clients
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

// The whole application: one positional URL plus options
#[derive(Parser, Debug)]
#[command(
    name = "catalog-scraper",
    version = "0.1.0",
    about = "Scrape product information from e-commerce websites into CSV files",
    long_about = "catalog-scraper discovers the product categories of a shop, scrapes every \
                  product from each category page (following 'View More' pagination) and \
                  writes one CSV per category plus a merged, deduplicated all_products.csv."
)]
pub struct Cli {
    /// Base website URL (e.g., https://www.sinorbeauty.com/)
    pub url: String,

    /// Scrape only a specific category (e.g., HAIR), case-insensitive
    #[arg(short, long)]
    pub category: Option<String>,

    /// Directory the CSV files are written to (created if missing)
    #[arg(long, default_value = "output")]
    pub output_dir: String,

    /// Maximum number of "View More" pages followed per listing page
    #[arg(long, default_value_t = 100)]
    pub max_pages: usize,

    /// Delay between page requests, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// How many times a transient fetch failure is retried
    #[arg(long, default_value_t = 2)]
    pub retries: u32,

    /// Number of categories scraped at the same time
    #[arg(long, default_value_t = 1)]
    pub concurrency: usize,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Also scrape nested /products/... listings, grouped under their
    /// top-level category name
    #[arg(long)]
    pub subcategories: bool,

    /// Print the run summary as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Verbose logging (debug level) on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["catalog-scraper", "https://example.com/"]).unwrap();
        assert_eq!(cli.url, "https://example.com/");
        assert_eq!(cli.category, None);
        assert_eq!(cli.output_dir, "output");
        assert_eq!(cli.max_pages, 100);
        assert_eq!(cli.concurrency, 1);
        assert!(!cli.json);
        assert!(!cli.subcategories);
    }

    #[test]
    fn test_short_category_flag() {
        let cli =
            Cli::try_parse_from(["catalog-scraper", "https://example.com/", "-c", "HAIR"]).unwrap();
        assert_eq!(cli.category.as_deref(), Some("HAIR"));
    }

    #[test]
    fn test_url_is_required() {
        assert!(Cli::try_parse_from(["catalog-scraper"]).is_err());
    }
}
