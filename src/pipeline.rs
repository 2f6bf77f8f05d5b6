// src/pipeline.rs
// =============================================================================
// One complete scraping run.
//
// Steps:
// 1. Create the output directory
// 2. Discover categories on the home page
// 3. Apply the --category filter (case-insensitive)
// 4. Scrape every category listing, a few at a time, keeping discovery order
// 5. Write one CSV per category name
// 6. Deduplicate everything by URL and write all_products.csv
// =============================================================================

use crate::config::ScrapeConfig;
use crate::fetch::Fetcher;
use crate::model::{Category, CategoryReport, Product, RunSummary};
use crate::output::{
    category_file_name, deduplicate_products, ensure_output_dir, save_to_csv, MERGED_FILE_NAME,
};
use crate::scrape::{discover_categories, scrape_listing};
use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use tracing::{info, warn};

/// How a run ended when it did not fail outright.
#[derive(Debug)]
pub enum RunOutcome {
    Completed(RunSummary),
    /// The home page had no category links
    NoCategories,
    /// `--category` did not match any discovered category
    CategoryNotFound {
        requested: String,
        available: Vec<String>,
    },
}

pub async fn run_scrape(config: &ScrapeConfig) -> Result<RunOutcome> {
    ensure_output_dir(&config.output_dir).with_context(|| {
        format!("failed to create output directory {}", config.output_dir.display())
    })?;

    let fetcher = Fetcher::new(config)?;

    let categories = discover_categories(&fetcher, &config.base_url, config.subcategories)
        .await
        .with_context(|| format!("failed to discover categories on {}", config.base_url))?;

    if categories.is_empty() {
        warn!("No categories found on {}", config.base_url);
        return Ok(RunOutcome::NoCategories);
    }

    let groups = group_by_name(categories);
    info!("Found {} categories:", groups.len());
    for (name, listings) in &groups {
        info!("   - {} ({} listing page(s))", name, listings.len());
    }

    let groups = match &config.category {
        Some(filter) => {
            let available: Vec<String> = groups.iter().map(|(name, _)| name.clone()).collect();
            let selected: Vec<_> = groups
                .into_iter()
                .filter(|(_, listings)| listings[0].matches(filter))
                .collect();

            if selected.is_empty() {
                warn!("Category '{}' not found", filter);
                return Ok(RunOutcome::CategoryNotFound {
                    requested: filter.clone(),
                    available,
                });
            }
            info!("Filtering to: {}", filter);
            selected
        }
        None => groups,
    };

    let scraped = scrape_groups(&fetcher, &groups, config).await;

    let mut reports = Vec::with_capacity(groups.len());
    let mut all_products = Vec::new();

    for ((name, listings), products) in groups.iter().zip(scraped) {
        let file = if products.is_empty() {
            warn!("No products found in {}", name);
            None
        } else {
            let path = config.output_dir.join(category_file_name(name));
            save_to_csv(&products, &path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Saved {} products to {}", products.len(), path.display());
            Some(path)
        };

        reports.push(CategoryReport {
            name: name.clone(),
            urls: listings.iter().map(|c| c.url.clone()).collect(),
            products: products.len(),
            file,
        });
        all_products.extend(products);
    }

    info!("Merging and deduplicating...");
    let total = all_products.len();
    let unique_products = deduplicate_products(all_products);

    let merged_file = config.output_dir.join(MERGED_FILE_NAME);
    save_to_csv(&unique_products, &merged_file)
        .with_context(|| format!("failed to write {}", merged_file.display()))?;

    Ok(RunOutcome::Completed(RunSummary {
        base_url: config.base_url.to_string(),
        categories: reports,
        total,
        unique: unique_products.len(),
        merged_file,
    }))
}

// Listing pages grouped by category name, in order of first appearance
fn group_by_name(categories: Vec<Category>) -> Vec<(String, Vec<Category>)> {
    let mut groups: Vec<(String, Vec<Category>)> = Vec::new();

    for category in categories {
        match groups.iter_mut().find(|(name, _)| *name == category.name) {
            Some((_, listings)) => listings.push(category),
            None => groups.push((category.name.clone(), vec![category])),
        }
    }

    groups
}

// Scrapes every group with at most `concurrency` listings in flight.
// Results line up with `groups`.
async fn scrape_groups(
    fetcher: &Fetcher,
    groups: &[(String, Vec<Category>)],
    config: &ScrapeConfig,
) -> Vec<Vec<Product>> {
    let jobs = groups
        .iter()
        .enumerate()
        .flat_map(|(index, (_, listings))| listings.iter().map(move |c| (index, c)));

    // buffered (not buffer_unordered) so listings come back in discovery order
    let results: Vec<(usize, Vec<Product>)> = stream::iter(jobs)
        .map(|(index, category)| async move {
            info!("Scraping {} ({})", category.name, category.url);
            let products =
                scrape_listing(fetcher, &category.url, &category.name, config.max_pages).await;
            (index, products)
        })
        .buffered(config.concurrency)
        .collect()
        .await;

    let mut per_group = vec![Vec::new(); groups.len()];
    for (index, products) in results {
        per_group[index].extend(products);
    }

    // Subcategory listings of one name may overlap
    per_group.into_iter().map(deduplicate_products).collect()
}
