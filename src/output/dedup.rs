// src/output/dedup.rs

use crate::model::Product;
use std::collections::HashSet;

/// Removes duplicate products based on URL.
///
/// The first occurrence wins and the original order is kept, so a product
/// listed in several categories is attributed to the first one scraped.
pub fn deduplicate_products(products: Vec<Product>) -> Vec<Product> {
    let mut seen_urls = HashSet::new();

    products
        .into_iter()
        .filter(|product| seen_urls.insert(product.url.clone()))
        .collect()
}
