//! Tidecrawl main entry point
//!
//! This is the command-line interface for the Tidecrawl web crawler.

use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tidecrawl::config::{load_config_with_hash, load_user_agents, Config, UserAgentPool};
use tidecrawl::crawler::crawl;
use tracing_subscriber::EnvFilter;

/// Tidecrawl: a polite breadth-first web crawler
///
/// Tidecrawl fetches every page reachable from a seed URL on the same host,
/// up to a configurable depth, respecting robots.txt and a per-fetch delay.
#[derive(Parser, Debug)]
#[command(name = "tidecrawl")]
#[command(version)]
#[command(about = "A polite breadth-first web crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load and validate configuration; failure here aborts before any
    // crawling starts, with a non-zero exit.
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;

    setup_logging(&config.logging.log_file, cli.verbose, cli.quiet)
        .with_context(|| format!("failed to open log file {}", config.logging.log_file))?;
    tracing::info!("Logger initialized");
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    let user_agents = load_user_agents(Path::new(&config.user_agents.path))?;

    if cli.dry_run {
        handle_dry_run(&config, &user_agents);
        return Ok(());
    }

    let crawl_config = config.resolve(UserAgentPool::new(user_agents))?;

    tracing::info!(
        "Starting crawl for {} with max depth {}",
        crawl_config.seed,
        crawl_config.max_depth
    );

    let stats = crawl(crawl_config).await?;

    println!(
        "Crawl finished: {} pages fetched, {} failures, {} blocked by robots.txt",
        stats.pages_fetched, stats.fetch_failures, stats.robots_blocked
    );

    Ok(())
}

/// Sets up the tracing subscriber writing to the configured log file
fn setup_logging(log_file: &str, verbose: u8, quiet: bool) -> std::io::Result<()> {
    let path = Path::new(log_file);
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(path)?;

    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("tidecrawl=info,warn"),
            1 => EnvFilter::new("tidecrawl=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &Config, user_agents: &[String]) {
    println!("=== Tidecrawl Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Seed URL: {}", config.crawler.seed_url);
    println!("  Max depth: {}", config.crawler.max_depth);
    println!("  Max workers: {}", config.crawler.max_workers);
    println!("  Delay: {}s", config.crawler.delay);

    println!("\nLogging:");
    println!("  Log file: {}", config.logging.log_file);

    println!("\nUser Agents ({}):", user_agents.len());
    for agent in user_agents {
        println!("  - {}", agent);
    }

    println!("\n✓ Configuration is valid");
    println!("✓ Would start crawling from {}", config.crawler.seed_url);
}
