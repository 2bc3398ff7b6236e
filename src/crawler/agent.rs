//! Fetch agent: the boundary to the HTTP transport
//!
//! The agent executes one HTTP GET at a time and reports status code, body,
//! and how long the network call took. It does not retry, does not inspect
//! Content-Type, and treats non-2xx statuses as ordinary responses; only a
//! transport failure is an error.

use crate::config::UserAgentConfig;
use crate::CrawlError;
use reqwest::Client;
use std::time::{Duration, Instant};

/// Metadata and contents fetched from one URL
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// The URL that was requested
    pub url: String,
    /// HTTP status code of the response
    pub status_code: u16,
    /// Raw response body; scraped and then discarded
    pub body: String,
    /// Time the network call took
    pub elapsed: Duration,
}

/// Wrapper around the HTTP client. Fetches resources on the crawler's
/// behalf and provides timing metadata about the query.
#[derive(Debug, Clone)]
pub struct FetchAgent {
    client: Client,
}

impl FetchAgent {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds an agent with a client configured from the user-agent
    /// settings.
    pub fn from_config(config: &UserAgentConfig) -> Result<Self, CrawlError> {
        Ok(Self::new(build_http_client(config)?))
    }

    /// Fetches a given web address using the HTTP GET method.
    ///
    /// Elapsed time brackets the network call only: the clock starts
    /// immediately before the request is sent and stops immediately after
    /// the body has been read.
    pub async fn fetch(&self, url: &str) -> Result<FetchResult, CrawlError> {
        let request = self.client.get(url);

        let started = Instant::now(); // keep immediately preceding send()
        let response = request.send().await.map_err(|source| CrawlError::Network {
            url: url.to_string(),
            source,
        })?;
        let status_code = response.status().as_u16();
        let body = response.text().await.map_err(|source| CrawlError::Network {
            url: url.to_string(),
            source,
        })?;
        let elapsed = started.elapsed(); // keep immediately following text()

        tracing::debug!("GET {} -> {} in {:?}", url, status_code, elapsed);

        Ok(FetchResult {
            url: url.to_string(),
            status_code,
            body,
            elapsed,
        })
    }
}

/// Builds an HTTP client with the crawler's user agent string.
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version (+ContactURL; ContactEmail)
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}
