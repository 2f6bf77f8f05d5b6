// src/scrape/pagination.rs
// =============================================================================
// Scrapes one listing page and every "View More" page behind it.
//
// How it works:
// 1. Wait the politeness delay, fetch the listing page, extract its products
// 2. Look for the "View More" control and its next-page URL
// 3. Fetch that page, keep only products we have not seen yet
// 4. Stop when there is no control, the URL was already visited, a page
//    adds nothing new, or the page limit is reached
// =============================================================================

use super::products::{count_product_links, extract_products, find_next_page};
use crate::fetch::Fetcher;
use crate::model::Product;
use std::collections::HashSet;
use tracing::{debug, info, warn};
use url::Url;

/// Scrapes all products of a listing page, following pagination.
///
/// `max_pages` bounds how many follow-up pages are fetched. Fetch failures
/// never abort the run: a failing first page yields no products, a failing
/// follow-up page ends pagination with what was collected so far.
pub async fn scrape_listing(
    fetcher: &Fetcher,
    listing_url: &str,
    category: &str,
    max_pages: usize,
) -> Vec<Product> {
    let mut page_url = match Url::parse(listing_url) {
        Ok(url) => url,
        Err(e) => {
            warn!("[{}] Invalid listing URL {}: {}", category, listing_url, e);
            return Vec::new();
        }
    };

    fetcher.pause().await;

    let mut html = match fetcher.fetch_page(page_url.as_str()).await {
        Ok(html) => html,
        Err(e) => {
            warn!("[{}] Failed to fetch {}: {}", category, listing_url, e);
            return Vec::new();
        }
    };

    let mut products = extract_products(&html, &page_url, category);
    let mut seen: HashSet<String> = products.iter().map(|p| p.url.clone()).collect();
    let mut visited = HashSet::from([page_url.to_string()]);

    info!(
        "[{}] Initial load: {} products ({} detail links)",
        category,
        products.len(),
        count_product_links(&html)
    );

    for page_number in 1..=max_pages {
        let Some(next_url) = find_next_page(&html, &page_url) else {
            debug!("[{}] No more 'View More' control found", category);
            break;
        };
        if !visited.insert(next_url.to_string()) {
            debug!("[{}] Next page {} already visited", category, next_url);
            break;
        }

        fetcher.pause().await;

        let next_html = match fetcher.fetch_page(next_url.as_str()).await {
            Ok(html) => html,
            Err(e) => {
                warn!("[{}] Stopping pagination, failed to fetch {}: {}", category, next_url, e);
                break;
            }
        };

        let before = products.len();
        for product in extract_products(&next_html, &next_url, category) {
            if seen.insert(product.url.clone()) {
                products.push(product);
            }
        }

        info!("[{}] After page {}: {} products", category, page_number + 1, products.len());

        if products.len() == before {
            debug!("[{}] No new products loaded, finished", category);
            break;
        }

        page_url = next_url;
        html = next_html;
    }

    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScrapeConfig;
    use mockito::Server;
    use std::time::Duration;

    fn fetcher(base: &str) -> Fetcher {
        let mut config = ScrapeConfig::new(base).unwrap();
        config.delay = Duration::ZERO;
        config.retries = 0;
        Fetcher::new(&config).unwrap()
    }

    fn card(slug: &str) -> String {
        format!(
            r#"<div class="sp-pr-info"><a href="/details/{0}/1/"><h5>{0}</h5></a><strong class="price">9</strong></div>"#,
            slug
        )
    }

    #[tokio::test]
    async fn test_follows_view_more_until_nothing_new() {
        let mut server = Server::new_async().await;
        let first = format!(
            r#"{}{}<a class="view-more" href="/products/HAIR-1/page/2/">View More</a>"#,
            card("comb"),
            card("brush")
        );
        // Page 2 repeats a product and adds one, then points at page 3
        let second = format!(
            r#"{}{}<a class="view-more" href="/products/HAIR-1/page/3/">View More</a>"#,
            card("brush"),
            card("dryer")
        );
        // Page 3 only repeats, which ends pagination
        let third = format!(
            r#"{}<a class="view-more" href="/products/HAIR-1/page/4/">View More</a>"#,
            card("dryer")
        );

        let _m1 = server.mock("GET", "/products/HAIR-1/").with_body(first).create_async().await;
        let _m2 = server.mock("GET", "/products/HAIR-1/page/2/").with_body(second).create_async().await;
        let _m3 = server.mock("GET", "/products/HAIR-1/page/3/").with_body(third).create_async().await;
        let m4 = server
            .mock("GET", "/products/HAIR-1/page/4/")
            .expect(0)
            .create_async()
            .await;

        let url = format!("{}/products/HAIR-1/", server.url());
        let products = scrape_listing(&fetcher(&server.url()), &url, "HAIR", 100).await;

        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["comb", "brush", "dryer"]);
        m4.assert_async().await;
    }

    #[tokio::test]
    async fn test_respects_page_limit() {
        let mut server = Server::new_async().await;
        let first = format!(r#"{}<a class="view-more" href="/l/2/">More</a>"#, card("a"));
        let second = format!(r#"{}<a class="view-more" href="/l/3/">More</a>"#, card("b"));

        let _m1 = server.mock("GET", "/l/").with_body(first).create_async().await;
        let _m2 = server.mock("GET", "/l/2/").with_body(second).create_async().await;
        let m3 = server.mock("GET", "/l/3/").expect(0).create_async().await;

        let url = format!("{}/l/", server.url());
        let products = scrape_listing(&fetcher(&server.url()), &url, "X", 1).await;

        assert_eq!(products.len(), 2);
        m3.assert_async().await;
    }

    #[tokio::test]
    async fn test_failed_first_page_yields_nothing() {
        let mut server = Server::new_async().await;
        let _m = server.mock("GET", "/gone/").with_status(404).create_async().await;

        let url = format!("{}/gone/", server.url());
        let products = scrape_listing(&fetcher(&server.url()), &url, "X", 5).await;
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_self_referencing_view_more_stops() {
        let mut server = Server::new_async().await;
        let body = format!(r#"{}<a class="view-more" href="/l/">More</a>"#, card("a"));
        let m = server.mock("GET", "/l/").with_body(body).expect(1).create_async().await;

        let url = format!("{}/l/", server.url());
        let products = scrape_listing(&fetcher(&server.url()), &url, "X", 10).await;

        assert_eq!(products.len(), 1);
        m.assert_async().await;
    }
}
