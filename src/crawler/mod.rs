//! Crawler module: the crawl engine and its parts
//!
//! This module contains the core crawling logic, including:
//! - The frontier work queue and the visited (dedup) set
//! - HTTP fetching with per-request user agents
//! - HTML link extraction
//! - The engine that schedules fetches onto a bounded worker pool

mod engine;
mod fetcher;
mod frontier;
mod parser;
mod visited;

pub use engine::{CrawlEngine, CrawlStats};
pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use frontier::{Frontier, FrontierEntry};
pub use parser::extract_links;
pub use visited::VisitedSet;

use crate::config::CrawlConfig;
use crate::TideError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl: it constructs a
/// [`CrawlEngine`] for the configuration, runs it to completion, and returns
/// the run counters.
pub async fn crawl(config: CrawlConfig) -> Result<CrawlStats, TideError> {
    let engine = CrawlEngine::new(config)?;
    engine.run().await;
    Ok(engine.stats())
}
