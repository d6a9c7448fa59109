//! Robots.txt handling module
//!
//! This module fetches, parses, and caches robots.txt files. Only
//! `Disallow:` path prefixes are honored; everything else in the file is
//! ignored. The policy is fail-open: a robots.txt that cannot be retrieved
//! is treated as allowing everything, so a transient fetch failure never
//! blocks a crawl.

mod cache;
mod parser;

pub use cache::RobotsCache;
pub use parser::RobotsRules;
