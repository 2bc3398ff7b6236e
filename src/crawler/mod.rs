//! Crawler module for web page fetching and orchestration
//!
//! This module contains the core crawling logic, including:
//! - The fetch agent (boundary to the HTTP transport)
//! - The frontier (visited/unvisited bookkeeping, random selection)
//! - The coordinator (the bounded scan loop)

mod agent;
mod coordinator;
mod frontier;

pub use agent::{build_http_client, FetchAgent, FetchResult};
pub use coordinator::{CrawlResult, Crawler};
pub use frontier::Frontier;

use crate::config::Config;
use crate::metrics::CrawlMetrics;
use crate::CrawlError;
use url::Url;

/// Runs a complete crawl with default configuration.
///
/// This is the main library entry point: it builds a fetch agent and a
/// metrics store anchored to the seed's domain, scans at most
/// `crawl_limit` pages, and returns the recorded pages together with their
/// aggregate summary.
pub async fn scan(seed_url: &str, crawl_limit: usize) -> Result<CrawlResult, CrawlError> {
    let mut config = Config::default();
    config.crawler.crawl_limit = crawl_limit;
    scan_with_config(seed_url, &config).await
}

/// Runs a complete crawl with the given configuration.
pub async fn scan_with_config(seed_url: &str, config: &Config) -> Result<CrawlResult, CrawlError> {
    let trimmed = seed_url.trim();
    if trimmed.is_empty() {
        return Err(CrawlError::EmptySeed);
    }
    let seed = Url::parse(trimmed).map_err(|source| CrawlError::InvalidSeed {
        url: trimmed.to_string(),
        source,
    })?;

    let agent = FetchAgent::from_config(&config.user_agent)?;
    let metrics = CrawlMetrics::for_seed(&seed, config.crawler.domain_match);
    let crawler = Crawler::new(agent, &config.crawler);

    let metrics = crawler.scan(seed.as_str(), metrics).await?;
    let summary = metrics.build_summary();
    let pages = metrics.into_pages();

    Ok(CrawlResult { pages, summary })
}
