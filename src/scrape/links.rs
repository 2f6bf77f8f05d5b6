// src/scrape/links.rs
// =============================================================================
// Small helpers shared by the category and product extractors.
// =============================================================================

use scraper::Selector;
use url::Url;

// Builds a selector from a CSS literal.
// Every call site passes a constant, so a parse failure is a programmer error.
pub(crate) fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {:?}: {:?}", css, e))
}

// Resolves a link (possibly relative) to an absolute http(s) URL
//
// Examples:
//   base = "https://example.com/page"
//   href = "/docs"              -> Some("https://example.com/docs")
//   href = "#top"               -> None
//   href = "javascript:void(0)" -> None
pub(crate) fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();

    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
    {
        return None;
    }

    let mut url = base.join(href).ok()?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }
    url.set_fragment(None);
    Some(url)
}

// Same-site check; compares host names so IP hosts (like a local test
// server) work too
pub(crate) fn same_host(a: &Url, b: &Url) -> bool {
    a.host_str().is_some() && a.host_str() == b.host_str()
}

// Non-empty path segments, so "/products/HAIR-456/" gives ["products", "HAIR-456"]
pub(crate) fn path_segments(url: &Url) -> Vec<&str> {
    url.path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default()
}

// Joins the text nodes of an element and collapses runs of whitespace
pub(crate) fn collapse_text<'a>(pieces: impl Iterator<Item = &'a str>) -> String {
    pieces
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_link() {
        let base = Url::parse("https://example.com/page").unwrap();
        let result = resolve_link(&base, "/docs");
        assert_eq!(result.unwrap().as_str(), "https://example.com/docs");
    }

    #[test]
    fn test_resolve_strips_fragment() {
        let base = Url::parse("https://example.com/").unwrap();
        let result = resolve_link(&base, "/products/HAIR-456/#top");
        assert_eq!(result.unwrap().as_str(), "https://example.com/products/HAIR-456/");
    }

    #[test]
    fn test_skip_special_links() {
        let base = Url::parse("https://example.com/page").unwrap();
        assert_eq!(resolve_link(&base, "#section"), None);
        assert_eq!(resolve_link(&base, "mailto:test@example.com"), None);
        assert_eq!(resolve_link(&base, "javascript:void(0)"), None);
        assert_eq!(resolve_link(&base, "   "), None);
    }

    #[test]
    fn test_path_segments_ignore_slashes() {
        let url = Url::parse("https://example.com/products/HAIR-456/").unwrap();
        assert_eq!(path_segments(&url), vec!["products", "HAIR-456"]);
    }

    #[test]
    fn test_collapse_text() {
        let text = collapse_text(["  Herbal ", "\n Shampoo  ", "200ml"].into_iter());
        assert_eq!(text, "Herbal Shampoo 200ml");
    }
}
