//! Rockpool main entry point
//!
//! Command-line interface for the Rockpool web crawler: scans a site from
//! a seed URL and reports the aggregate crawl summary.

use anyhow::Context;
use clap::Parser;
use rockpool::config::{load_config, Config};
use rockpool::crawler::scan_with_config;
use rockpool::output::{print_summary, write_markdown_summary};
use rockpool::CrawlError;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Rockpool: a bounded, single-domain web crawler
///
/// Rockpool fetches a limited number of pages starting at the seed URL,
/// staying inside the seed's domain, and summarizes the links, images,
/// titles, and text it found along the way.
#[derive(Parser, Debug)]
#[command(name = "rockpool")]
#[command(version)]
#[command(about = "Crawl a site and summarize its links, images, and text", long_about = None)]
struct Cli {
    /// Seed URL where the crawl begins
    #[arg(value_name = "SEED_URL")]
    seed_url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum number of pages to fetch (overrides the config file)
    #[arg(short, long, value_name = "N")]
    limit: Option<usize>,

    /// Fixed RNG seed for a reproducible traversal order
    #[arg(long, value_name = "N")]
    rng_seed: Option<u64>,

    /// Write a markdown summary to this path
    #[arg(short = 'o', long, value_name = "FILE")]
    summary: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    // CLI flags override file values
    if let Some(limit) = cli.limit {
        config.crawler.crawl_limit = limit;
    }
    if let Some(rng_seed) = cli.rng_seed {
        config.crawler.random_seed = Some(rng_seed);
    }
    if let Some(path) = &cli.summary {
        config.output.summary_path = Some(path.display().to_string());
    }

    tracing::info!(
        "Crawling {} (limit {}, domain match {:?})",
        cli.seed_url,
        config.crawler.crawl_limit,
        config.crawler.domain_match
    );

    let result = match scan_with_config(&cli.seed_url, &config).await {
        Ok(result) => result,
        Err(CrawlError::Network { url, source }) => {
            tracing::debug!("Transport failure for {}: {}", url, source);
            eprintln!("Sorry, that URL could not be reached.");
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    if !cli.quiet {
        print_summary(&result.summary);
    }

    if let Some(path) = &config.output.summary_path {
        write_markdown_summary(&result.summary, Path::new(path))
            .with_context(|| format!("failed to write markdown summary to {}", path))?;
        tracing::info!("Markdown summary written to {}", path);
    }

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("rockpool=info,warn"),
            1 => EnvFilter::new("rockpool=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
