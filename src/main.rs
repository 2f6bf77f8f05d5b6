// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr) and build the validated config
// 3. Run the scraping pipeline
// 4. Print the report (table or JSON) on stdout
// 5. Exit with proper code (0 = success, 1 = nothing to scrape, 2 = error)
// =============================================================================

mod cli;       // src/cli.rs - command-line parsing
mod config;    // src/config.rs - validated run settings
mod error;     // src/error.rs - typed errors
mod fetch;     // src/fetch/ - HTTP client with retries
mod logging;   // src/logging.rs - tracing setup
mod model;     // src/model.rs - Product, Category, RunSummary
mod output;    // src/output/ - CSV files and deduplication
mod pipeline;  // src/pipeline.rs - one complete run
mod scrape;    // src/scrape/ - HTML extraction and pagination

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::ScrapeConfig;
use model::RunSummary;
use pipeline::RunOutcome;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    let exit_code = match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = files written
//   Ok(1) = no categories, or the requested category does not exist
//   Err   = invalid input or a failure that stopped the run
async fn run(cli: &Cli) -> Result<i32> {
    let config = ScrapeConfig::try_from(cli)?;

    if !cli.json {
        println!("🕷️ Catalog Scraper");
        println!("   Target: {}", config.base_url);
        println!();
    }

    match pipeline::run_scrape(&config).await? {
        RunOutcome::Completed(summary) => {
            print_summary(&summary, cli.json)?;
            Ok(0)
        }
        RunOutcome::NoCategories => {
            eprintln!("❌ No categories found!");
            Ok(1)
        }
        RunOutcome::CategoryNotFound { requested, available } => {
            eprintln!("❌ Category '{}' not found!", requested);
            eprintln!("   Available: {}", available.join(", "));
            Ok(1)
        }
    }
}

fn print_summary(summary: &RunSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        print_table(summary);
    }
    Ok(())
}

fn print_table(summary: &RunSummary) {
    println!("{:<24} {:>10}   {:<40}", "CATEGORY", "PRODUCTS", "FILE");
    println!("{}", "=".repeat(78));

    for category in &summary.categories {
        let file = match &category.file {
            Some(path) => path.display().to_string(),
            None => "⚠️  no products".to_string(),
        };
        println!("{:<24} {:>10}   {:<40}", category.name, category.products, file);
    }

    println!();
    println!("📊 Summary:");
    println!("   Total products: {}", summary.total);
    println!("   Unique products: {}", summary.unique);
    println!("   ✅ Saved to {}", summary.merged_file.display());
    println!();
    println!("🎉 Done!");
}
