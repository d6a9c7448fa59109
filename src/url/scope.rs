use crate::url::extract_domain;
use url::Url;

/// Checks whether a candidate URL is within the crawl scope of a base URL
///
/// A candidate is in scope iff its host equals the base URL's host. Candidate
/// URLs are resolved absolute URLs by construction (relative references are
/// joined against the fetched page before this check), so the comparison
/// reduces to a host equality test. Hosts are compared case-insensitively.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use tidecrawl::url::in_scope;
///
/// let base = Url::parse("https://example.com/").unwrap();
/// let same = Url::parse("https://example.com/about").unwrap();
/// let other = Url::parse("https://other.com/about").unwrap();
///
/// assert!(in_scope(&same, &base));
/// assert!(!in_scope(&other, &base));
/// ```
pub fn in_scope(candidate: &Url, base: &Url) -> bool {
    match (extract_domain(candidate), extract_domain(base)) {
        (Some(candidate_host), Some(base_host)) => candidate_host == base_host,
        _ => false,
    }
}
