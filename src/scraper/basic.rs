use super::{PageScraper, ScrapeResult};
use scraper::{Html, Selector};

/// Basic page scraper: extracts links, images, the document title, and
/// visible body text from raw markup. Follow-on links are the full link
/// list, unfiltered.
#[derive(Debug, Clone, Default)]
pub struct BasicScraper;

impl BasicScraper {
    pub fn new() -> Self {
        Self
    }
}

impl PageScraper for BasicScraper {
    fn scrape(&self, html: &str) -> ScrapeResult {
        let document = Html::parse_document(html);

        ScrapeResult {
            links: extract_attribute(&document, "a", "href"),
            images: extract_attribute(&document, "img", "src"),
            title: extract_title(&document),
            text: extract_text(&document),
            partition: None,
        }
    }

    fn follow_on(&self, result: &ScrapeResult) -> Vec<String> {
        result.links.clone()
    }
}

/// Extracts a named attribute from every element with the given tag,
/// keeping non-empty values only.
fn extract_attribute(document: &Html, tag: &str, attribute: &str) -> Vec<String> {
    let mut values = Vec::new();

    if let Ok(selector) = Selector::parse(tag) {
        for element in document.select(&selector) {
            if let Some(value) = element.value().attr(attribute) {
                if !value.is_empty() {
                    values.push(value.to_string());
                }
            }
        }
    }

    values
}

/// Extracts the document title: the first `<title>` element, trimmed.
fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Extracts visible body text: every text node under `<body>` whose parent
/// is not a script or style element, trimmed, empties dropped, joined with
/// single spaces.
fn extract_text(document: &Html) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if let Ok(selector) = Selector::parse("body") {
        if let Some(body) = document.select(&selector).next() {
            for node in body.descendants() {
                if let Some(text) = node.value().as_text() {
                    let excluded = node
                        .parent()
                        .and_then(|parent| parent.value().as_element().map(|el| el.name()))
                        .map(|name| name == "script" || name == "style")
                        .unwrap_or(false);
                    if excluded {
                        continue;
                    }
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        parts.push(trimmed);
                    }
                }
            }
        }
    }

    parts.join(" ")
}
