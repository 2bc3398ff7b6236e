//! Markdown summary generation
//!
//! Generates a human-readable markdown rendition of a crawl summary:
//! pages crawled, unique images and links, and the per-page metric tables.

use crate::metrics::CrawlSummary;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a markdown summary file for the given crawl summary.
pub fn write_markdown_summary(summary: &CrawlSummary, output_path: &Path) -> std::io::Result<()> {
    let markdown = format_markdown_summary(summary);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a crawl summary as markdown.
pub fn format_markdown_summary(summary: &CrawlSummary) -> String {
    let mut md = String::new();

    md.push_str("# Rockpool Crawl Summary\n\n");

    md.push_str("## Pages Crawled\n\n");
    md.push_str(&format!(
        "Successfully crawled (HTTP 200): {}\n\n",
        summary.pages_crawled.len()
    ));
    for url in &summary.pages_crawled {
        md.push_str(&format!("- {}\n", url));
    }
    md.push('\n');

    md.push_str("## Unique Resources\n\n");
    md.push_str("| Kind | Count |\n");
    md.push_str("|------|-------|\n");
    md.push_str(&format!("| Images | {} |\n", summary.unique_images.len()));
    md.push_str(&format!(
        "| Internal links | {} |\n",
        summary.unique_internal_links.len()
    ));
    md.push_str(&format!(
        "| External links | {} |\n\n",
        summary.unique_external_links.len()
    ));

    if !summary.unique_internal_links.is_empty() {
        md.push_str("### Internal Links\n\n");
        for link in &summary.unique_internal_links {
            md.push_str(&format!("- {}\n", link));
        }
        md.push('\n');
    }

    if !summary.unique_external_links.is_empty() {
        md.push_str("### External Links\n\n");
        for link in &summary.unique_external_links {
            md.push_str(&format!("- {}\n", link));
        }
        md.push('\n');
    }

    if !summary.unique_images.is_empty() {
        md.push_str("### Images\n\n");
        for image in &summary.unique_images {
            md.push_str(&format!("- {}\n", image));
        }
        md.push('\n');
    }

    if !summary.pages_load_time.is_empty() {
        md.push_str("## Per-Page Metrics\n\n");
        md.push_str("| Page | Load Time (s) | Words | Title Length |\n");
        md.push_str("|------|---------------|-------|--------------|\n");
        for (url, load_time) in &summary.pages_load_time {
            let words = summary.word_count.get(url).copied().unwrap_or(0);
            let title_length = summary.title_length.get(url).copied().unwrap_or(0);
            md.push_str(&format!(
                "| {} | {:.3} | {} | {} |\n",
                url, load_time, words, title_length
            ));
        }
        md.push('\n');
    }

    md
}
