//! Configuration module for Tidecrawl
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, plus the user agent pool loaded from its own line-oriented file.
//!
//! # Example
//!
//! ```no_run
//! use tidecrawl::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlConfig, CrawlerConfig, LoggingConfig, UserAgentPool, UserAgentsConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, load_user_agents};
