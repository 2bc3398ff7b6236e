//! Rockpool: a bounded, single-domain web crawler
//!
//! Given a seed URL, Rockpool fetches a limited number of pages, extracts
//! links, images, titles, and visible text from each, keeps traversal inside
//! the seed's domain, and aggregates the results into a crawl summary.

pub mod config;
pub mod crawler;
pub mod metrics;
pub mod output;
pub mod scraper;
pub mod url;

use thiserror::Error;

/// Main error type for Rockpool operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error for {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("A seed URL is required to initiate a site crawl")]
    EmptySeed,

    #[error("Invalid seed URL {url}: {source}")]
    InvalidSeed {
        url: String,
        source: ::url::ParseError,
    },

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
}

/// Result type alias for Rockpool operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::crawler::{scan, scan_with_config, CrawlResult, Crawler, FetchAgent};
pub use crate::metrics::{CrawlMetrics, CrawlSummary, PageMeta, PageRecord};
pub use crate::scraper::{BasicScraper, DomainScraper, PageScraper, ScrapeResult};
pub use crate::url::DomainMatch;
