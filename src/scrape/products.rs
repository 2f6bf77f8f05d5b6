// src/scrape/products.rs
// =============================================================================
// Product extraction from a category listing page.
//
// Each product card looks roughly like:
//
//   <div class="sp-pr-info">
//     <a href="/details/herbal-shampoo/1234/"><h5>Herbal Shampoo</h5></a>
//     <strong class="price">Rs. 250</strong>
//   </div>
//
// The "View More" control at the bottom of the listing carries the URL of
// the next batch of products.
// =============================================================================

use super::links::{collapse_text, resolve_link, selector};
use crate::model::Product;
use regex::Regex;
use scraper::{ElementRef, Html};
use std::collections::HashSet;
use std::sync::OnceLock;
use url::Url;

const DETAILS_MARKER: &str = "/details/";

// Attributes that may hold the next-page URL, in order of preference
const NEXT_PAGE_ATTRS: [&str; 4] = ["href", "data-href", "data-url", "data-next"];

/// Extracts products from a listing page.
///
/// Products are returned in page order; repeated links on the same page
/// are kept once.
pub fn extract_products(html: &str, page_url: &Url, category: &str) -> Vec<Product> {
    let document = Html::parse_document(html);
    let containers = selector("div.sp-pr-info");
    let link_selector = selector("a[href]");
    let price_selector = selector("strong.price");

    let mut products = Vec::new();
    let mut seen_urls = HashSet::new();

    for container in document.select(&containers) {
        // The first link inside the card is the product link
        let Some(link) = container.select(&link_selector).next() else {
            continue;
        };
        let href = link.value().attr("href").unwrap_or_default();
        if !href.contains(DETAILS_MARKER) {
            continue;
        }

        let Some(url) = resolve_link(page_url, href) else {
            continue;
        };
        let url = url.to_string();
        if !seen_urls.insert(url.clone()) {
            continue;
        }

        let name = product_name(link, href);
        if name.is_empty() {
            continue;
        }

        let price = container
            .select(&price_selector)
            .next()
            .map(|p| collapse_text(p.text()))
            .unwrap_or_default();

        products.push(Product {
            name,
            url,
            category: category.to_string(),
            price,
        });
    }

    products
}

// Name from <h5> inside the link, then the link text, then the URL slug
fn product_name(link: ElementRef<'_>, href: &str) -> String {
    let heading = selector("h5");

    let name = match link.select(&heading).next() {
        Some(h5) => collapse_text(h5.text()),
        None => collapse_text(link.text()),
    };
    if !name.is_empty() {
        return name;
    }

    slug_regex()
        .captures(href)
        .and_then(|caps| caps.get(1))
        .map(|slug| slug.as_str().replace('-', " ").trim().to_string())
        .unwrap_or_default()
}

fn slug_regex() -> &'static Regex {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    SLUG.get_or_init(|| Regex::new(r"/details/([^/]+)/").expect("slug pattern is valid"))
}

/// Finds the URL behind the "View More" control, if the page has one.
pub fn find_next_page(html: &str, page_url: &Url) -> Option<Url> {
    let document = Html::parse_document(html);
    let controls = selector(r#"._ilmPaging, .view-more, [class*="load-more"]"#);

    for control in document.select(&controls) {
        for attr in NEXT_PAGE_ATTRS {
            if let Some(next) = control.value().attr(attr).and_then(|v| resolve_link(page_url, v)) {
                return Some(next);
            }
        }
    }

    None
}

/// Number of product detail links on a page, used for progress logging
pub fn count_product_links(html: &str) -> usize {
    let document = Html::parse_document(html);
    let details = selector(r#"a[href*="/details/"]"#);
    document.select(&details).count()
}
