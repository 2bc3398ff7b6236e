//! Page scraping for Rockpool
//!
//! A scraper turns raw page markup into structured data and decides which
//! of the extracted links the crawl may continue on to. Two variants
//! exist: [`BasicScraper`] extracts without judgment, and [`DomainScraper`]
//! additionally partitions links by whether they stay inside the crawl's
//! anchor domain.

mod basic;
mod domain;

pub use basic::BasicScraper;
pub use domain::DomainScraper;

/// Extracted links partitioned against the crawl's anchor domain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPartition {
    /// Links whose host matches the anchor domain, plus relative links
    pub internal: Vec<String>,
    /// Everything else
    pub external: Vec<String>,
}

/// Structured result of scraping one page.
///
/// This is the shared contract between scrapers and the metrics store;
/// both sides speak this type rather than a loosely-typed bag of fields.
#[derive(Debug, Clone, Default)]
pub struct ScrapeResult {
    /// Raw `href` values of anchor elements, non-empty only
    pub links: Vec<String>,
    /// Raw `src` values of image elements, non-empty only
    pub images: Vec<String>,
    /// First document title, trimmed; `None` when absent or blank
    pub title: Option<String>,
    /// Visible body text, script/style content excluded
    pub text: String,
    /// Present only when produced by a domain-aware scraper
    pub partition: Option<LinkPartition>,
}

/// A page scraper used by crawlers.
///
/// Implementations must tolerate malformed markup: extraction degrades to
/// empty or partial results, never an error.
pub trait PageScraper {
    /// Scrapes a page's markup for links, images, title, and visible text.
    fn scrape(&self, html: &str) -> ScrapeResult;

    /// From a scrape result, the list of URLs the crawl may continue on to
    /// process.
    fn follow_on(&self, result: &ScrapeResult) -> Vec<String>;
}
