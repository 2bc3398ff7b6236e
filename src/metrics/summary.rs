use super::PageRecord;
use std::collections::{BTreeMap, HashSet};

/// Read-only aggregate over all recorded pages, computed on demand.
///
/// Uniqueness of images and links is value-equality on the stored strings;
/// no normalization happens at aggregation time, so `.../img.png` and
/// `.../img.png?` count as distinct entries.
#[derive(Debug, Clone, Default)]
pub struct CrawlSummary {
    /// URLs of pages that answered with HTTP 200
    pub pages_crawled: Vec<String>,
    /// Unique image sources across all pages, first-seen order
    pub unique_images: Vec<String>,
    /// Unique in-domain links across all pages, first-seen order
    pub unique_internal_links: Vec<String>,
    /// Unique off-domain links across all pages, first-seen order
    pub unique_external_links: Vec<String>,
    /// Per-page load time in seconds
    pub pages_load_time: BTreeMap<String, f64>,
    /// Per-page count of whitespace-separated words
    pub word_count: BTreeMap<String, usize>,
    /// Per-page title length in characters; 0 when the page has no title
    pub title_length: BTreeMap<String, usize>,
}

impl CrawlSummary {
    /// Builds the summary from the recorded pages.
    pub(crate) fn from_pages(pages: &BTreeMap<String, PageRecord>) -> Self {
        let mut summary = CrawlSummary::default();
        let mut seen_images = HashSet::new();
        let mut seen_internal = HashSet::new();
        let mut seen_external = HashSet::new();

        for (url, record) in pages {
            if record.status_code == 200 {
                summary.pages_crawled.push(url.clone());
            }

            for image in &record.images {
                if seen_images.insert(image.clone()) {
                    summary.unique_images.push(image.clone());
                }
            }

            if let Some(internal) = &record.internal_links {
                for link in internal {
                    if seen_internal.insert(link.clone()) {
                        summary.unique_internal_links.push(link.clone());
                    }
                }
            }

            if let Some(external) = &record.external_links {
                for link in external {
                    if seen_external.insert(link.clone()) {
                        summary.unique_external_links.push(link.clone());
                    }
                }
            }

            summary
                .pages_load_time
                .insert(url.clone(), record.elapsed.as_secs_f64());
            summary
                .word_count
                .insert(url.clone(), record.text.split_whitespace().count());
            summary.title_length.insert(
                url.clone(),
                record
                    .title
                    .as_deref()
                    .map(|title| title.chars().count())
                    .unwrap_or(0),
            );
        }

        summary
    }
}
