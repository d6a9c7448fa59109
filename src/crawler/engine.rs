//! Crawl engine: worker-pool scheduling over the frontier
//!
//! The engine owns every piece of shared crawl state (frontier, visited set,
//! robots cache, counters) with an explicit lifecycle: constructed once per
//! run, torn down when the run ends. Workers receive the state via `Arc`
//! rather than through module-scope globals.

use crate::config::CrawlConfig;
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchResult};
use crate::crawler::frontier::{Frontier, FrontierEntry};
use crate::crawler::parser::extract_links;
use crate::crawler::visited::VisitedSet;
use crate::robots::RobotsCache;
use crate::url::in_scope;
use crate::TideError;
use reqwest::Client;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Counters describing a crawl run
///
/// A plain-value snapshot taken from the engine's internal atomic counters
/// when the run finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Pages fetched successfully
    pub pages_fetched: usize,

    /// Fetches abandoned on a non-2xx response or transport error
    pub fetch_failures: usize,

    /// Candidate links rejected by robots.txt
    pub robots_blocked: usize,

    /// Links claimed and admitted to the frontier (the seed included)
    pub links_admitted: usize,
}

/// Thread-safe counters updated by concurrent fetch tasks
#[derive(Debug, Default)]
struct Counters {
    pages_fetched: AtomicUsize,
    fetch_failures: AtomicUsize,
    robots_blocked: AtomicUsize,
    links_admitted: AtomicUsize,
}

impl Counters {
    fn record_page_fetched(&self) {
        self.pages_fetched.fetch_add(1, Ordering::Relaxed);
    }

    fn record_fetch_failure(&self) {
        self.fetch_failures.fetch_add(1, Ordering::Relaxed);
    }

    fn record_robots_blocked(&self) {
        self.robots_blocked.fetch_add(1, Ordering::Relaxed);
    }

    fn record_link_admitted(&self) {
        self.links_admitted.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> CrawlStats {
        CrawlStats {
            pages_fetched: self.pages_fetched.load(Ordering::Relaxed),
            fetch_failures: self.fetch_failures.load(Ordering::Relaxed),
            robots_blocked: self.robots_blocked.load(Ordering::Relaxed),
            links_admitted: self.links_admitted.load(Ordering::Relaxed),
        }
    }
}

/// State shared between the engine loop and every fetch task
struct EngineShared {
    config: CrawlConfig,
    client: Client,
    frontier: Frontier,
    visited: VisitedSet,
    robots: RobotsCache,
    counters: Counters,
}

/// The crawl engine
///
/// Drains the frontier from a single coordinating task and dispatches fetch
/// tasks onto a semaphore-bounded worker pool. The frontier and the visited
/// set are the only shared mutable structures; each fetch task otherwise
/// holds only local intermediate state.
pub struct CrawlEngine {
    shared: Arc<EngineShared>,
    workers: Arc<Semaphore>,
}

impl CrawlEngine {
    /// Creates an engine for one crawl run
    pub fn new(config: CrawlConfig) -> Result<Self, TideError> {
        let client = build_http_client()?;
        let workers = Arc::new(Semaphore::new(config.max_workers.max(1)));
        let robots = RobotsCache::new(client.clone());

        Ok(Self {
            shared: Arc::new(EngineShared {
                config,
                client,
                frontier: Frontier::new(),
                visited: VisitedSet::new(),
                robots,
                counters: Counters::default(),
            }),
            workers,
        })
    }

    /// Runs the crawl to completion
    ///
    /// Terminates when the frontier is empty and no dispatched fetch is still
    /// in flight. A momentarily empty frontier while fetches are in flight is
    /// not termination: in-flight fetches can still push new entries, so the
    /// engine waits on the join set before re-checking.
    pub async fn run(&self) {
        let seed = self.shared.config.seed.clone();

        // The seed goes through the same claim as every discovered link, so a
        // page linking back to the seed is dropped by the dedup set rather
        // than by accident of traversal order.
        if self.shared.visited.try_claim(seed.as_str()) {
            self.shared.counters.record_link_admitted();
            self.shared.frontier.push(FrontierEntry { url: seed, depth: 0 });
        }

        let mut in_flight: JoinSet<()> = JoinSet::new();

        loop {
            // Reap finished fetches so the join set only tracks live work.
            while let Some(result) = in_flight.try_join_next() {
                if let Err(e) = result {
                    tracing::error!("Fetch task failed: {}", e);
                }
            }

            let entry = match self.shared.frontier.pop() {
                Some(entry) => entry,
                None => {
                    if in_flight.is_empty() {
                        break;
                    }

                    // Outstanding fetches may still push new work; wait for
                    // one to finish, then re-check the frontier.
                    if let Some(Err(e)) = in_flight.join_next().await {
                        tracing::error!("Fetch task failed: {}", e);
                    }
                    continue;
                }
            };

            if entry.depth > self.shared.config.max_depth {
                tracing::debug!(
                    "Dropping {} at depth {} (max depth {})",
                    entry.url,
                    entry.depth,
                    self.shared.config.max_depth
                );
                continue;
            }

            let permit = match self.workers.clone().acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => break,
            };

            let shared = self.shared.clone();
            in_flight.spawn(async move {
                fetch_and_expand(&shared, entry).await;
                drop(permit);
            });
        }

        let stats = self.shared.counters.snapshot();
        tracing::info!(
            "Crawl complete: {} pages fetched, {} failures, {} blocked by robots.txt",
            stats.pages_fetched,
            stats.fetch_failures,
            stats.robots_blocked
        );
    }

    /// Returns a snapshot of the run counters
    pub fn stats(&self) -> CrawlStats {
        self.shared.counters.snapshot()
    }
}

/// Fetches one claimed URL and enqueues its admissible links
///
/// Per-URL lifecycle is unclaimed → claimed → fetched (terminal, success or
/// failure). Candidates failing the scope, robots, or claim check are
/// discarded silently and never re-examined.
async fn fetch_and_expand(shared: &EngineShared, entry: FrontierEntry) {
    let user_agent = shared.config.user_agents.choose();

    match fetch_url(&shared.client, entry.url.as_str(), user_agent).await {
        FetchResult::Success { status_code: _, body } => {
            tracing::info!("Successfully crawled: {}", entry.url);
            println!("Crawled: {}", entry.url);
            shared.counters.record_page_fetched();

            for candidate in extract_links(&body, &entry.url) {
                if !in_scope(&candidate, &shared.config.seed) {
                    continue;
                }

                if !shared.robots.is_allowed(&candidate).await {
                    shared.counters.record_robots_blocked();
                    continue;
                }

                if shared.visited.try_claim(candidate.as_str()) {
                    shared.counters.record_link_admitted();
                    shared.frontier.push(FrontierEntry {
                        url: candidate,
                        depth: entry.depth + 1,
                    });
                }
            }
        }

        FetchResult::HttpError { status_code } => {
            tracing::warn!("Failed to retrieve {}, status code: {}", entry.url, status_code);
            shared.counters.record_fetch_failure();
        }

        FetchResult::NetworkError { error } => {
            tracing::error!("Error crawling {}: {}", entry.url, error);
            shared.counters.record_fetch_failure();
        }
    }

    // The worker slot stays occupied for the configured delay regardless of
    // outcome, throttling how fast any single slot issues requests.
    tokio::time::sleep(shared.config.delay).await;
}
