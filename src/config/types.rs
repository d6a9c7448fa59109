use crate::ConfigError;
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Main configuration structure for Tidecrawl
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(rename = "user-agents", default)]
    pub user_agents: UserAgentsConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Seed URL the crawl starts from; its host defines the crawl scope
    #[serde(rename = "seed-url")]
    pub seed_url: String,

    /// Maximum depth to crawl from the seed URL
    #[serde(rename = "max-depth", default = "default_max_depth")]
    pub max_depth: u32,

    /// Number of concurrent fetch workers
    #[serde(rename = "max-workers", default = "default_max_workers")]
    pub max_workers: usize,

    /// Delay held after each fetch, in seconds
    #[serde(default = "default_delay")]
    pub delay: f64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Path to the crawl log file
    #[serde(rename = "log-file", default = "default_log_file")]
    pub log_file: String,
}

/// Location of the user agent list
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentsConfig {
    /// Path to a file with one user agent string per line
    #[serde(default = "default_user_agents_path")]
    pub path: String,
}

fn default_max_depth() -> u32 {
    3
}

fn default_max_workers() -> usize {
    5
}

fn default_delay() -> f64 {
    1.0
}

fn default_log_file() -> String {
    "logs/crawl.log".to_string()
}

fn default_user_agents_path() -> String {
    "user_agents.txt".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
        }
    }
}

impl Default for UserAgentsConfig {
    fn default() -> Self {
        Self {
            path: default_user_agents_path(),
        }
    }
}

/// Fallback agent used if the pool is somehow empty
const FALLBACK_AGENT: &str = concat!("tidecrawl/", env!("CARGO_PKG_VERSION"));

/// Pool of user agent strings; one is chosen uniformly at random per fetch
#[derive(Debug, Clone)]
pub struct UserAgentPool {
    agents: Vec<String>,
}

impl UserAgentPool {
    /// Creates a pool from a list of agent strings
    ///
    /// The loader rejects empty lists, but an empty pool still degrades to a
    /// built-in agent rather than failing a fetch.
    pub fn new(agents: Vec<String>) -> Self {
        Self { agents }
    }

    /// Picks a user agent uniformly at random
    pub fn choose(&self) -> &str {
        self.agents
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or(FALLBACK_AGENT)
    }

    /// Returns the number of agents in the pool
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Returns whether the pool is empty
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

/// Immutable runtime configuration for one crawl run
///
/// Resolved once from the file configuration and the loaded user-agent pool;
/// read-only input to every component for the lifetime of the run.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Parsed seed URL; crawl scope is every URL on the same host
    pub seed: Url,

    /// Maximum link distance from the seed
    pub max_depth: u32,

    /// Size of the fetch worker pool
    pub max_workers: usize,

    /// Pause held by a worker after each fetch, success or failure
    pub delay: Duration,

    /// User agent pool sampled per fetch
    pub user_agents: UserAgentPool,
}

impl Config {
    /// Resolves the file configuration into the runtime [`CrawlConfig`]
    pub fn resolve(&self, user_agents: UserAgentPool) -> Result<CrawlConfig, ConfigError> {
        let seed = Url::parse(&self.crawler.seed_url).map_err(|e| {
            ConfigError::InvalidUrl(format!(
                "Invalid seed-url '{}': {}",
                self.crawler.seed_url, e
            ))
        })?;

        Ok(CrawlConfig {
            seed,
            max_depth: self.crawler.max_depth,
            max_workers: self.crawler.max_workers,
            delay: Duration::from_secs_f64(self.crawler.delay),
            user_agents,
        })
    }
}
