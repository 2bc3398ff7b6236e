//! Crawl orchestration
//!
//! The crawler runs a bounded loop over the frontier: claim one random
//! unvisited URL, fetch it, scrape the body, resolve the scraped links
//! against the page, record the page, and merge the follow-on links back
//! into the frontier. The scan ends when the iteration limit is reached or
//! the frontier runs dry, whichever comes first.

use crate::config::CrawlerConfig;
use crate::crawler::agent::FetchAgent;
use crate::crawler::frontier::Frontier;
use crate::metrics::{CrawlMetrics, CrawlSummary, PageMeta, PageRecord};
use crate::scraper::{LinkPartition, PageScraper, ScrapeResult};
use crate::url::resolve_all;
use crate::CrawlError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;
use url::Url;

/// Result of a completed crawl: the per-page records and their aggregate
/// summary.
#[derive(Debug)]
pub struct CrawlResult {
    pub pages: BTreeMap<String, PageRecord>,
    pub summary: CrawlSummary,
}

/// The page crawler. Fetches at most `crawl_limit` pages per scan, chosen
/// uniformly at random from the frontier, one at a time.
pub struct Crawler {
    agent: FetchAgent,
    crawl_limit: usize,
    random_seed: Option<u64>,
}

impl Crawler {
    pub fn new(agent: FetchAgent, config: &CrawlerConfig) -> Self {
        Self {
            agent,
            crawl_limit: config.crawl_limit,
            random_seed: config.random_seed,
        }
    }

    /// Crawls the site starting at the seed URL, storing results in the
    /// given metrics store and returning it once the scan terminates.
    ///
    /// Each fetch is awaited to completion before any scraping or frontier
    /// update happens; no two fetches are ever in flight at once. A
    /// transport failure aborts the whole scan and discards the partial
    /// results with it.
    pub async fn scan(&self, seed: &str, mut metrics: CrawlMetrics) -> Result<CrawlMetrics, CrawlError> {
        let seed = seed.trim();
        if seed.is_empty() {
            return Err(CrawlError::EmptySeed);
        }
        let seed_url = Url::parse(seed).map_err(|source| CrawlError::InvalidSeed {
            url: seed.to_string(),
            source,
        })?;

        let rng = match self.random_seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::from_os_rng(),
        };
        let mut frontier = Frontier::new(seed_url.to_string(), rng);

        tracing::info!("Starting scan of {} with limit {}", seed_url, self.crawl_limit);

        let mut iterations = 0;
        while iterations < self.crawl_limit {
            let url = match frontier.claim() {
                Some(url) => url,
                None => {
                    tracing::info!("Frontier exhausted after {} page(s)", iterations);
                    break;
                }
            };

            let follow_on = self.crawl_page(&url, &mut metrics).await?;
            frontier.extend(follow_on);

            iterations += 1;
            tracing::debug!(
                "Iteration {}/{}: {} visited, {} in frontier",
                iterations,
                self.crawl_limit,
                frontier.visited_len(),
                frontier.unvisited_len()
            );
        }

        tracing::info!("Scan finished: {} page(s) fetched", iterations);
        Ok(metrics)
    }

    /// Fetches, scrapes, and records one URL, returning the resolved
    /// follow-on links.
    async fn crawl_page(
        &self,
        url: &str,
        metrics: &mut CrawlMetrics,
    ) -> Result<Vec<String>, CrawlError> {
        let fetched = self.agent.fetch(url).await?;

        let base = match Url::parse(url) {
            Ok(base) => base,
            Err(err) => {
                // Frontier URLs come out of the resolver, so this does not
                // happen in practice
                tracing::warn!("Skipping unparseable frontier URL {}: {}", url, err);
                return Ok(Vec::new());
            }
        };

        let scraper = metrics.scraper();
        let raw = scraper.scrape(&fetched.body);
        let resolved = resolve_result(&base, raw);
        let follow_on = scraper.follow_on(&resolved);

        let meta = PageMeta {
            status_code: fetched.status_code,
            elapsed: fetched.elapsed,
        };
        metrics.add_page(url, resolved, meta);

        Ok(follow_on)
    }
}

/// Resolves every link list of a scrape result against the page URL so the
/// record holds absolute, comparable URLs. Unresolvable candidates are
/// dropped. Image sources stay as extracted.
fn resolve_result(base: &Url, result: ScrapeResult) -> ScrapeResult {
    let ScrapeResult {
        links,
        images,
        title,
        text,
        partition,
    } = result;

    ScrapeResult {
        links: resolve_all(base, &links),
        images,
        title,
        text,
        partition: partition.map(|partition| LinkPartition {
            internal: resolve_all(base, &partition.internal),
            external: resolve_all(base, &partition.external),
        }),
    }
}
