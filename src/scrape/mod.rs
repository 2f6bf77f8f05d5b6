// src/scrape/mod.rs
// =============================================================================
// This module turns HTML into categories and products.
//
// Submodules:
// - links: resolving hrefs and building CSS selectors
// - categories: finds category listing pages on the home page
// - products: extracts product rows and the "View More" link from a page
// - pagination: walks a listing page by page until nothing new shows up
// =============================================================================

mod categories;
mod links;
mod pagination;
mod products;

pub use categories::discover_categories;
pub use pagination::scrape_listing;
