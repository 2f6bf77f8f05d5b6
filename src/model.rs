// src/model.rs
// =============================================================================
// Plain data types shared by the scraper, the output writers and the report.
//
// - Product: one row of a CSV file
// - Category: a named listing page on the target site
// - RunSummary: what a full run produced (printed as a table or JSON)
// =============================================================================

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single product scraped from a category page.
///
/// Field order matters: it is the column order of every CSV file
/// (`name,url,category,price`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub url: String,
    pub category: String,
    /// Raw price text as shown on the page, empty when none was found
    pub price: String,
}

/// A category listing page discovered on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Short name such as "HAIR", also used for the output file name
    pub name: String,
    /// Absolute URL of the listing page
    pub url: String,
}

impl Category {
    /// Case-insensitive name match used by `--category`
    pub fn matches(&self, filter: &str) -> bool {
        self.name.to_uppercase() == filter.trim().to_uppercase()
    }
}

/// Result of scraping one category name (possibly several listing pages
/// when subcategories are enabled).
#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub name: String,
    pub urls: Vec<String>,
    pub products: usize,
    /// None when the category produced no products and no file was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Everything a successful run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub base_url: String,
    pub categories: Vec<CategoryReport>,
    /// Products across all categories before deduplication
    pub total: usize,
    /// Products left after URL deduplication
    pub unique: usize,
    pub merged_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_matches_ignores_case() {
        let category = Category {
            name: "HAIR".to_string(),
            url: "https://example.com/products/HAIR-456/".to_string(),
        };
        assert!(category.matches("hair"));
        assert!(category.matches(" Hair "));
        assert!(!category.matches("MAKEUP"));
    }

    #[test]
    fn test_category_matches_non_ascii_names() {
        let category = Category {
            name: "CRÈME".to_string(),
            url: "https://example.com/products/CRÈME-12/".to_string(),
        };
        assert!(category.matches("crème"));
        assert!(category.matches("Crème"));
    }
}
