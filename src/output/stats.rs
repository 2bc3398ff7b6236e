//! Stdout report of a crawl summary

use crate::metrics::CrawlSummary;

/// Prints a crawl summary to stdout in a formatted manner.
pub fn print_summary(summary: &CrawlSummary) {
    println!("=== Crawl Summary ===\n");

    println!(
        "Pages crawled successfully: {}",
        summary.pages_crawled.len()
    );
    for url in &summary.pages_crawled {
        println!("  - {}", url);
    }
    println!();

    println!("Unique images: {}", summary.unique_images.len());
    println!(
        "Unique internal links: {}",
        summary.unique_internal_links.len()
    );
    println!(
        "Unique external links: {}",
        summary.unique_external_links.len()
    );
    println!();

    if !summary.pages_load_time.is_empty() {
        println!("Per-page metrics:");
        for (url, load_time) in &summary.pages_load_time {
            let words = summary.word_count.get(url).copied().unwrap_or(0);
            let title_length = summary.title_length.get(url).copied().unwrap_or(0);
            println!(
                "  {}: {:.3}s load, {} words, title length {}",
                url, load_time, words, title_length
            );
        }
        println!();
    }

    let total_load_time: f64 = summary.pages_load_time.values().sum();
    println!("Total load time: {:.3}s", total_load_time);
}
