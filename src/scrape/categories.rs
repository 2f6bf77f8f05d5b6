// src/scrape/categories.rs
// =============================================================================
// Category discovery.
//
// Shops link their category listings from the navigation menu on the home
// page, as URLs shaped like /products/{NAME}-{ID}/ (e.g. /products/HAIR-456/).
// Deeper URLs such as /products/HAIR-456/SHAMPOO-501/ are subcategories.
//
// We scan every <a href> on the home page:
// - main mode keeps only /products/{ID}/ links, one per category name
// - subcategory mode keeps every distinct /products/... listing URL
// =============================================================================

use super::links::{path_segments, resolve_link, same_host, selector};
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::model::Category;
use scraper::Html;
use std::collections::HashSet;
use tracing::{debug, info};
use url::Url;

const LISTING_SEGMENT: &str = "products";

/// Fetches the home page and extracts its categories.
///
/// An unreachable home page is an error; a page without category links
/// simply yields an empty list.
pub async fn discover_categories(
    fetcher: &Fetcher,
    base_url: &Url,
    include_subcategories: bool,
) -> Result<Vec<Category>> {
    info!("Discovering categories on {}", base_url);

    let html = fetcher.fetch_page(base_url.as_str()).await?;
    let categories = extract_categories(&html, base_url, include_subcategories);

    debug!("{} categories discovered", categories.len());
    Ok(categories)
}

/// Extracts category listing pages from HTML.
pub fn extract_categories(html: &str, base_url: &Url, include_subcategories: bool) -> Vec<Category> {
    let document = Html::parse_document(html);
    let anchors = selector("a[href]");

    let mut categories = Vec::new();
    let mut seen = HashSet::new();

    for element in document.select(&anchors) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Some(url) = resolve_link(base_url, href) else {
            continue;
        };
        if !same_host(&url, base_url) {
            continue;
        }

        let segments = path_segments(&url);
        if segments.len() < 2 || segments[0] != LISTING_SEGMENT {
            continue;
        }

        let id = segments[1];
        let name = category_name(id);
        if name.is_empty() {
            continue;
        }

        if include_subcategories {
            // Every distinct listing URL, several may share a name
            let mut listing = url.clone();
            listing.set_query(None);
            if seen.insert(listing.to_string()) {
                categories.push(Category {
                    name: name.to_string(),
                    url: listing.to_string(),
                });
            }
        } else if segments.len() == 2 && seen.insert(name.to_string()) {
            let canonical = match base_url.join(&format!("/{}/{}/", LISTING_SEGMENT, id)) {
                Ok(url) => url,
                Err(_) => continue,
            };
            categories.push(Category {
                name: name.to_string(),
                url: canonical.to_string(),
            });
        }
    }

    categories
}

// "HAIR-456" -> "HAIR"
fn category_name(id: &str) -> &str {
    id.split('-').next().unwrap_or_default().trim()
}
