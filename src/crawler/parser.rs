//! HTML link extraction
//!
//! This module parses fetched page bodies and extracts candidate URLs for
//! the frontier, resolved against the URL of the fetched page.

use scraper::{Html, Selector};
use url::Url;

/// Extracts candidate links from an HTML page
///
/// # Link Extraction Rules
///
/// **Include:** `<a href="...">` anchors, resolved to absolute URLs against
/// the fetched page's URL.
///
/// **Exclude:**
/// - `javascript:`, `mailto:`, `tel:` links
/// - Data URIs
/// - Fragment-only hrefs (same-page anchors)
/// - `<a href="..." download>` anchors
/// - Anything that does not resolve to an HTTP(S) URL
///
/// Malformed or unresolvable hrefs are discarded silently; they are not a
/// crawl failure.
pub fn extract_links(html: &str, base_url: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            // Skip if it has the download attribute
            if element.value().attr("download").is_some() {
                continue;
            }

            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_link(href, base_url) {
                    links.push(absolute_url);
                }
            }
        }
    }

    links
}

/// Resolves a link href to an absolute URL and validates it
///
/// Returns None if the link should be excluded.
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    // Skip empty hrefs
    if href.is_empty() {
        return None;
    }

    // Skip special schemes
    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    // Skip fragment-only links (same page anchors)
    if href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) => {
            // Only accept HTTP and HTTPS URLs
            if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
                Some(absolute_url)
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com/page").unwrap()
    }

    fn link_strings(html: &str) -> Vec<String> {
        extract_links(html, &base_url())
            .into_iter()
            .map(|u| u.to_string())
            .collect()
    }

    #[test]
    fn test_extract_absolute_link() {
        let links = link_strings(r#"<html><body><a href="https://other.com/page">Link</a></body></html>"#);
        assert_eq!(links, vec!["https://other.com/page"]);
    }

    #[test]
    fn test_extract_relative_link() {
        let links = link_strings(r#"<html><body><a href="/other">Link</a></body></html>"#);
        assert_eq!(links, vec!["https://example.com/other"]);
    }

    #[test]
    fn test_extract_relative_path_link() {
        let links = link_strings(r#"<html><body><a href="other">Link</a></body></html>"#);
        assert_eq!(links, vec!["https://example.com/other"]);
    }

    #[test]
    fn test_skip_javascript_link() {
        let links = link_strings(r#"<html><body><a href="javascript:void(0)">Link</a></body></html>"#);
        assert!(links.is_empty());
    }

    #[test]
    fn test_skip_mailto_link() {
        let links = link_strings(r#"<html><body><a href="mailto:test@example.com">Email</a></body></html>"#);
        assert!(links.is_empty());
    }

    #[test]
    fn test_skip_tel_link() {
        let links = link_strings(r#"<html><body><a href="tel:+1234567890">Call</a></body></html>"#);
        assert!(links.is_empty());
    }

    #[test]
    fn test_skip_data_uri() {
        let links = link_strings(r#"<html><body><a href="data:text/html,<h1>x</h1>">Data</a></body></html>"#);
        assert!(links.is_empty());
    }

    #[test]
    fn test_skip_download_link() {
        let links = link_strings(r#"<html><body><a href="/file.pdf" download>Download</a></body></html>"#);
        assert!(links.is_empty());
    }

    #[test]
    fn test_skip_fragment_only() {
        let links = link_strings(r##"<html><body><a href="#section">Jump</a></body></html>"##);
        assert!(links.is_empty());
    }

    #[test]
    fn test_skip_non_http_scheme_after_resolution() {
        let links = link_strings(r#"<html><body><a href="ftp://example.com/file">FTP</a></body></html>"#);
        assert!(links.is_empty());
    }

    #[test]
    fn test_multiple_links() {
        let links = link_strings(
            r#"
            <html>
            <body>
                <a href="/page1">Link 1</a>
                <a href="/page2">Link 2</a>
                <a href="https://other.com/page3">Link 3</a>
            </body>
            </html>
        "#,
        );
        assert_eq!(links.len(), 3);
    }

    #[test]
    fn test_mixed_valid_and_invalid_links() {
        let links = link_strings(
            r#"
            <html>
            <body>
                <a href="/valid">Valid</a>
                <a href="javascript:alert('no')">Invalid</a>
                <a href="mailto:test@example.com">Invalid</a>
                <a href="/another-valid">Valid</a>
            </body>
            </html>
        "#,
        );
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_unparseable_html_yields_no_panic() {
        // html5ever recovers from arbitrary input; worst case is no links.
        let links = link_strings("<<<not html>>>");
        assert!(links.is_empty());
    }
}
