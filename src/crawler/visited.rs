//! The dedup set of URLs already admitted to the frontier or fetched

use std::collections::HashSet;
use std::sync::Mutex;

/// Set of URLs that have been claimed for crawling
///
/// Monotonically growing, never shrinks. A URL is claimed at most once; once
/// present, no further frontier entry is ever created for it. This is the
/// sole mechanism preventing duplicate or infinite crawling of cyclic link
/// graphs.
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: Mutex<HashSet<String>>,
}

impl VisitedSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically claims a URL for crawling
    ///
    /// The check and the insert happen under one lock, so of any number of
    /// concurrent claims for the same URL exactly one returns true; the
    /// caller that receives true may queue the URL, every other caller must
    /// discard it.
    pub fn try_claim(&self, url: &str) -> bool {
        self.urls.lock().unwrap().insert(url.to_string())
    }

    /// Returns whether a URL has been claimed
    pub fn contains(&self, url: &str) -> bool {
        self.urls.lock().unwrap().contains(url)
    }

    /// Returns the number of claimed URLs
    pub fn len(&self) -> usize {
        self.urls.lock().unwrap().len()
    }

    /// Returns whether no URL has been claimed yet
    pub fn is_empty(&self) -> bool {
        self.urls.lock().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_first_claim_succeeds() {
        let visited = VisitedSet::new();
        assert!(visited.try_claim("https://example.com/"));
        assert!(visited.contains("https://example.com/"));
    }

    #[test]
    fn test_second_claim_fails() {
        let visited = VisitedSet::new();
        assert!(visited.try_claim("https://example.com/"));
        assert!(!visited.try_claim("https://example.com/"));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_distinct_urls_claim_independently() {
        let visited = VisitedSet::new();
        assert!(visited.try_claim("https://example.com/a"));
        assert!(visited.try_claim("https://example.com/b"));
        assert_eq!(visited.len(), 2);
    }

    #[test]
    fn test_exactly_one_concurrent_claim_wins() {
        let visited = Arc::new(VisitedSet::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let visited = visited.clone();
            handles.push(std::thread::spawn(move || {
                let mut wins = 0;
                for i in 0..100 {
                    if visited.try_claim(&format!("https://example.com/{}", i)) {
                        wins += 1;
                    }
                }
                wins
            }));
        }

        let total_wins: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        // Every URL was claimed by exactly one thread.
        assert_eq!(total_wins, 100);
        assert_eq!(visited.len(), 100);
    }
}
