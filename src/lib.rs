//! Tidecrawl: a polite breadth-first web crawler
//!
//! This crate implements a same-domain web crawler that discovers and fetches
//! pages up to a configurable depth, respecting robots.txt and a per-fetch
//! delay, while never visiting the same URL twice.

pub mod config;
pub mod crawler;
pub mod robots;
pub mod url;

use thiserror::Error;

/// Main error type for Tidecrawl operations
#[derive(Debug, Error)]
pub enum TideError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("User agent list error: {0}")]
    UserAgents(String),
}

/// Result type alias for Tidecrawl operations
pub type Result<T> = std::result::Result<T, TideError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, CrawlConfig, UserAgentPool};
pub use crawler::{crawl, CrawlStats};
pub use url::{extract_domain, in_scope};
