//! Full-text extractor
//!
//! Fallback strategy: re-downloads the raw page and collects block-level
//! text from the most likely content container. Only the body is produced.

use super::Extractor;
use crate::client::Downloader;
use crate::error::ReadError;
use crate::text::{collapse_spaces, non_empty};
use crate::types::Extraction;
use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;
use url::Url;

/// Content containers, most specific first
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role='main']",
    ".post-content",
    ".article-content",
    ".article-body",
    ".entry-content",
    ".story-body",
    "#article-body",
    "#content",
    ".content",
];

/// Elements whose text forms paragraphs
const BLOCK_TAGS: &[&str] = &[
    "p",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "li",
    "pre",
    "blockquote",
    "td",
];

/// Elements never part of the body
const SKIP_TAGS: &[&str] = &[
    "nav", "header", "footer", "aside", "script", "style", "noscript", "form", "template",
    "svg", "iframe",
];

/// A container needs this much text to be taken over `<body>`
const MIN_CONTENT_CHARS: usize = 200;

/// Full-text extractor
pub struct FullTextExtractor;

impl FullTextExtractor {
    /// Create a new full-text extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract the body text of an already downloaded page
    pub fn extract_text(html: &str) -> Option<String> {
        let document = Html::parse_document(html);

        for selector in CONTENT_SELECTORS {
            let Ok(selector) = Selector::parse(selector) else {
                continue;
            };
            if let Some(container) = document.select(&selector).next() {
                let text = container_text(container);
                if text.chars().count() >= MIN_CONTENT_CHARS {
                    return Some(text);
                }
            }
        }

        let body = Selector::parse("body").ok()?;
        document
            .select(&body)
            .next()
            .map(container_text)
            .and_then(|text| non_empty(&text).map(|_| text))
    }
}

impl Default for FullTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for FullTextExtractor {
    fn name(&self) -> &'static str {
        "fulltext"
    }

    fn try_extract(&self, url: &Url, downloader: &Downloader) -> Result<Extraction, ReadError> {
        let page = downloader.get(url).map_err(|e| {
            debug!(url = %url, error = %e, "Full-text download failed");
            ReadError::DownloadFailed
        })?;

        if page.html.trim().is_empty() {
            return Err(ReadError::DownloadFailed);
        }

        Ok(Extraction {
            body_text: Self::extract_text(&page.html),
            ..Default::default()
        })
    }
}

/// Paragraph text of a container, blocks separated by blank lines
///
/// Falls back to all visible text when the container has no block elements.
fn container_text(container: ElementRef) -> String {
    let blocks: Vec<String> = container
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| BLOCK_TAGS.contains(&element.value().name()))
        .filter(|element| !inside(element, container, BLOCK_TAGS))
        .filter(|element| !inside(element, container, SKIP_TAGS))
        .filter_map(|element| non_empty(&visible_text(element)))
        .collect();

    if blocks.is_empty() {
        collapse_spaces(&visible_text(container))
    } else {
        blocks.join("\n\n")
    }
}

/// True if an ancestor of `element` below `container` has one of `tags`
fn inside(element: &ElementRef, container: ElementRef, tags: &[&str]) -> bool {
    element
        .ancestors()
        .take_while(|node| node.id() != container.id())
        .filter_map(ElementRef::wrap)
        .any(|ancestor| tags.contains(&ancestor.value().name()))
}

/// Text of an element, skipping text under [`SKIP_TAGS`]
fn visible_text(element: ElementRef) -> String {
    let mut text = String::new();
    for node in element.descendants() {
        if let Node::Text(chunk) = node.value() {
            let hidden = node
                .ancestors()
                .take_while(|ancestor| ancestor.id() != element.id())
                .filter_map(ElementRef::wrap)
                .any(|ancestor| SKIP_TAGS.contains(&ancestor.value().name()));
            if !hidden {
                text.push_str(chunk);
                text.push(' ');
            }
        }
    }
    text
}
