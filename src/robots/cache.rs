//! Robots.txt fetching and per-host caching
//!
//! Rules are fetched once per host within a crawl run and cached for its
//! duration. Staleness is not a concern inside a single run, so there is no
//! expiry.

use crate::robots::RobotsRules;
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use url::{Position, Url};

/// Timeout for a robots.txt fetch
const ROBOTS_TIMEOUT: Duration = Duration::from_secs(5);

/// Host-keyed cache of parsed robots.txt rules
///
/// The cache is fail-open: if robots.txt is unreachable, returns a non-2xx
/// status, or contains no matching rule, the candidate is treated as allowed
/// and the failure is logged as a warning. A transient robots.txt fetch
/// failure never blocks a crawl.
pub struct RobotsCache {
    client: Client,
    rules: Mutex<HashMap<String, Arc<RobotsRules>>>,
}

impl RobotsCache {
    /// Creates an empty cache that fetches with the given HTTP client
    pub fn new(client: Client) -> Self {
        Self {
            client,
            rules: Mutex::new(HashMap::new()),
        }
    }

    /// Checks whether a URL may be crawled according to its host's robots.txt
    ///
    /// Fetches and caches the rules on first contact with a host. Blocked
    /// URLs are logged at info level.
    pub async fn is_allowed(&self, url: &Url) -> bool {
        if url.host_str().is_none() {
            return true;
        }

        // scheme://host:port, which is both the cache key and the base the
        // robots.txt URL is built from
        let origin = url[..Position::BeforePath].to_string();
        let rules = self.rules_for(&origin).await;

        if rules.is_allowed(url.path()) {
            true
        } else {
            tracing::info!("URL {} blocked by robots.txt", url);
            false
        }
    }

    /// Returns the cached rules for an origin, fetching them on a miss
    async fn rules_for(&self, origin: &str) -> Arc<RobotsRules> {
        if let Some(rules) = self.rules.lock().await.get(origin) {
            return rules.clone();
        }

        // The lock is not held across the fetch; two workers racing on the
        // same new host may both fetch, which is benign.
        let fetched = Arc::new(self.fetch_rules(origin).await);
        self.rules
            .lock()
            .await
            .entry(origin.to_string())
            .or_insert(fetched)
            .clone()
    }

    /// Fetches and parses robots.txt for an origin, failing open
    async fn fetch_rules(&self, origin: &str) -> RobotsRules {
        let robots_url = format!("{}/robots.txt", origin);
        tracing::debug!("Fetching robots.txt from {}", robots_url);

        let response = match self
            .client
            .get(&robots_url)
            .timeout(ROBOTS_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Could not retrieve robots.txt from {}: {}", robots_url, e);
                return RobotsRules::allow_all();
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                "Could not retrieve robots.txt from {}: status {}",
                robots_url,
                response.status()
            );
            return RobotsRules::allow_all();
        }

        match response.text().await {
            Ok(body) => RobotsRules::parse(&body),
            Err(e) => {
                tracing::warn!("Could not retrieve robots.txt from {}: {}", robots_url, e);
                RobotsRules::allow_all()
            }
        }
    }

    /// Number of hosts with cached rules
    pub async fn cached_hosts(&self) -> usize {
        self.rules.lock().await.len()
    }
}
