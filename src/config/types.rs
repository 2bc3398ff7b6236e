use crate::url::DomainMatch;
use serde::Deserialize;

/// Main configuration structure for Rockpool
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Total number of pages a scan may request before terminating
    #[serde(rename = "crawl-limit")]
    pub crawl_limit: usize,

    /// Policy for classifying a link's host as internal to the crawl's
    /// anchor domain
    #[serde(rename = "domain-match")]
    pub domain_match: DomainMatch,

    /// Fixed seed for frontier selection; omit for a different traversal
    /// order on every run
    #[serde(rename = "random-seed")]
    pub random_seed: Option<u64>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            crawl_limit: 5,
            domain_match: DomainMatch::default(),
            random_seed: None,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "Rockpool".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://github.com/rockpool/rockpool".to_string(),
            contact_email: "crawler@rockpool.invalid".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path for the markdown summary export; no file is written when unset
    #[serde(rename = "summary-path")]
    pub summary_path: Option<String>,
}
