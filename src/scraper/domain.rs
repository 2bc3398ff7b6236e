use super::{BasicScraper, LinkPartition, PageScraper, ScrapeResult};
use crate::url::DomainMatch;
use url::Url;

/// Domain-restricted page scraper.
///
/// Wraps [`BasicScraper`]'s extraction and additionally partitions the
/// extracted links into internal and external with respect to a configured
/// anchor domain. Follow-on links are the internal ones only, which keeps
/// the frontier from wandering off the target site.
#[derive(Debug, Clone)]
pub struct DomainScraper {
    inner: BasicScraper,
    domain: String,
    policy: DomainMatch,
}

impl DomainScraper {
    /// Creates a scraper anchored to `domain`; links to this domain are
    /// considered internal under the given matching policy.
    pub fn new(domain: impl Into<String>, policy: DomainMatch) -> Self {
        Self {
            inner: BasicScraper::new(),
            domain: domain.into().to_lowercase(),
            policy,
        }
    }

    /// The anchor domain this scraper classifies against.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Classifies one link candidate.
    ///
    /// A candidate with a host is internal when the host matches the
    /// anchor domain under the configured policy. A candidate with no host
    /// at all is a relative reference and stays inside the page's own
    /// site, so it is internal too.
    fn is_internal(&self, candidate: &str) -> bool {
        match Url::parse(candidate) {
            Ok(parsed) => match parsed.host_str() {
                Some(host) => self
                    .policy
                    .is_internal_host(&host.to_lowercase(), &self.domain),
                None => true,
            },
            // Relative references cannot be parsed without a base
            Err(_) => true,
        }
    }
}

impl PageScraper for DomainScraper {
    fn scrape(&self, html: &str) -> ScrapeResult {
        let mut result = self.inner.scrape(html);

        let mut partition = LinkPartition::default();
        for link in &result.links {
            if self.is_internal(link) {
                partition.internal.push(link.clone());
            } else {
                partition.external.push(link.clone());
            }
        }
        result.partition = Some(partition);

        result
    }

    fn follow_on(&self, result: &ScrapeResult) -> Vec<String> {
        result
            .partition
            .as_ref()
            .map(|partition| partition.internal.clone())
            .unwrap_or_default()
    }
}
