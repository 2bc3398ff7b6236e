//! Crawl metrics storage
//!
//! The metrics store accumulates per-page scrape results keyed by URL,
//! owns the single domain-bound scraper used for the whole crawl, and
//! computes the final aggregate summary on demand.
//!
//! Scrapers and metrics are coupled: the store must understand the data
//! the scraper returns, so the store is also responsible for constructing
//! the scraper whose output it consumes.

mod summary;

pub use summary::CrawlSummary;

use crate::scraper::{DomainScraper, ScrapeResult};
use crate::url::{registrable_domain, DomainMatch};
use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

/// Fetch metadata merged into a page record alongside the scrape data
#[derive(Debug, Clone, Copy)]
pub struct PageMeta {
    /// HTTP status code of the response
    pub status_code: u16,
    /// Time the network call took
    pub elapsed: Duration,
}

/// One record per fetched URL: merged scrape data and fetch metadata.
///
/// The raw HTML body is transient; it is used to produce the record and
/// never retained in it.
#[derive(Debug, Clone)]
pub struct PageRecord {
    pub url: String,
    pub status_code: u16,
    pub elapsed: Duration,
    pub title: Option<String>,
    pub text: String,
    pub links: Vec<String>,
    pub images: Vec<String>,
    /// Present only when produced by a domain-aware scraper
    pub internal_links: Option<Vec<String>>,
    pub external_links: Option<Vec<String>>,
}

/// Storage backend for one crawl's results.
///
/// Owns the one scraper for the crawl, bound to the seed's domain at
/// construction time; every page of the crawl is scraped and partitioned
/// against that anchor, regardless of the page's own host.
#[derive(Debug)]
pub struct CrawlMetrics {
    scraper: DomainScraper,
    pages: BTreeMap<String, PageRecord>,
}

impl CrawlMetrics {
    /// Creates a metrics store anchored to the seed URL's domain.
    ///
    /// The anchor is the registrable form of the seed's host
    /// (`a.b.host.tld` -> `host.tld`).
    pub fn for_seed(seed: &Url, policy: DomainMatch) -> Self {
        let domain = registrable_domain(seed).unwrap_or_default();
        tracing::debug!("Metrics store anchored to domain {:?}", domain);

        Self {
            scraper: DomainScraper::new(domain, policy),
            pages: BTreeMap::new(),
        }
    }

    /// The scraper bound to this crawl's anchor domain.
    pub fn scraper(&self) -> &DomainScraper {
        &self.scraper
    }

    /// Adds a page to the results set. Re-adding the same URL overwrites
    /// the prior record.
    pub fn add_page(&mut self, url: &str, data: ScrapeResult, meta: PageMeta) {
        let (internal_links, external_links) = match data.partition {
            Some(partition) => (Some(partition.internal), Some(partition.external)),
            None => (None, None),
        };

        let record = PageRecord {
            url: url.to_string(),
            status_code: meta.status_code,
            elapsed: meta.elapsed,
            title: data.title,
            text: data.text,
            links: data.links,
            images: data.images,
            internal_links,
            external_links,
        };

        self.pages.insert(url.to_string(), record);
    }

    /// The pages recorded so far, keyed by URL.
    pub fn pages(&self) -> &BTreeMap<String, PageRecord> {
        &self.pages
    }

    /// Consumes the store, returning the recorded pages.
    pub fn into_pages(self) -> BTreeMap<String, PageRecord> {
        self.pages
    }

    /// Computes the aggregate summary over all recorded pages.
    pub fn build_summary(&self) -> CrawlSummary {
        CrawlSummary::from_pages(&self.pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scraper::LinkPartition;

    fn seed() -> Url {
        Url::parse("http://www.site.tld/start").unwrap()
    }

    fn sample_result() -> ScrapeResult {
        ScrapeResult {
            links: vec!["http://site.tld/a".to_string()],
            images: vec!["/img.png".to_string()],
            title: Some("Home".to_string()),
            text: "hello world".to_string(),
            partition: Some(LinkPartition {
                internal: vec!["http://site.tld/a".to_string()],
                external: vec![],
            }),
        }
    }

    fn meta(status_code: u16) -> PageMeta {
        PageMeta {
            status_code,
            elapsed: Duration::from_millis(120),
        }
    }

    #[test]
    fn test_anchored_to_registrable_domain() {
        let metrics = CrawlMetrics::for_seed(&seed(), DomainMatch::Contains);
        assert_eq!(metrics.scraper().domain(), "site.tld");
    }

    #[test]
    fn test_add_page_stores_record() {
        let mut metrics = CrawlMetrics::for_seed(&seed(), DomainMatch::Contains);
        metrics.add_page("http://site.tld/", sample_result(), meta(200));

        let record = &metrics.pages()["http://site.tld/"];
        assert_eq!(record.status_code, 200);
        assert_eq!(record.title.as_deref(), Some("Home"));
        assert_eq!(
            record.internal_links.as_deref(),
            Some(&["http://site.tld/a".to_string()][..])
        );
    }

    #[test]
    fn test_readd_overwrites_record() {
        let mut metrics = CrawlMetrics::for_seed(&seed(), DomainMatch::Contains);
        metrics.add_page("http://site.tld/", sample_result(), meta(200));

        let mut refetched = sample_result();
        refetched.title = Some("Home v2".to_string());
        metrics.add_page("http://site.tld/", refetched, meta(200));

        assert_eq!(metrics.pages().len(), 1);
        assert_eq!(
            metrics.pages()["http://site.tld/"].title.as_deref(),
            Some("Home v2")
        );
    }

    #[test]
    fn test_basic_result_has_no_partition_fields() {
        let mut metrics = CrawlMetrics::for_seed(&seed(), DomainMatch::Contains);
        let mut result = sample_result();
        result.partition = None;
        metrics.add_page("http://site.tld/", result, meta(200));

        let record = &metrics.pages()["http://site.tld/"];
        assert!(record.internal_links.is_none());
        assert!(record.external_links.is_none());
    }
}
