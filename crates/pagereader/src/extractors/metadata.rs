//! Page metadata extraction
//!
//! Reads title, authors, publication date and lead image from the parsed
//! DOM. Sources are tried in priority order and the first usable value wins.

use crate::text::{collapse_spaces, non_empty};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use scraper::{ElementRef, Html, Selector};
use url::Url;

const TITLE_META: &[&str] = &[
    "meta[property='og:title']",
    "meta[name='og:title']",
    "meta[name='twitter:title']",
];

const AUTHOR_META: &[&str] = &[
    "meta[name='author']",
    "meta[property='article:author']",
    "meta[name='article:author']",
    "meta[name='parsely-author']",
    "meta[name='sailthru.author']",
    "meta[name='dc.creator']",
];

const AUTHOR_ELEMENTS: &[&str] = &[
    "[itemprop='author'] [itemprop='name']",
    "[rel='author']",
    "[itemprop='author']",
    ".author-name",
    ".byline-name",
    ".byline .author",
];

const DATE_META: &[&str] = &[
    "meta[property='article:published_time']",
    "meta[name='article:published_time']",
    "meta[property='og:published_time']",
    "meta[name='pubdate']",
    "meta[name='publishdate']",
    "meta[name='publish-date']",
    "meta[name='date']",
    "meta[name='dc.date']",
    "meta[name='dc.date.issued']",
    "meta[itemprop='datePublished']",
];

const IMAGE_META: &[&str] = &[
    "meta[property='og:image']",
    "meta[property='og:image:url']",
    "meta[name='og:image']",
    "meta[name='twitter:image']",
    "meta[name='twitter:image:src']",
    "meta[property='twitter:image']",
];

/// Longest string still taken for an author name
const MAX_AUTHOR_CHARS: usize = 60;

/// Metadata read from a page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMetadata {
    /// Page title
    pub title: Option<String>,
    /// Authors in document order, deduplicated
    pub authors: Vec<String>,
    /// Publication timestamp
    pub publish_date: Option<DateTime<FixedOffset>>,
    /// Absolute lead image URL
    pub top_image: Option<String>,
}

impl PageMetadata {
    /// Extract metadata from a parsed document
    ///
    /// `base` resolves relative image URLs.
    pub fn extract(document: &Html, base: &Url) -> Self {
        Self {
            title: extract_title(document),
            authors: extract_authors(document),
            publish_date: extract_publish_date(document),
            top_image: extract_top_image(document, base),
        }
    }
}

fn extract_title(document: &Html) -> Option<String> {
    first_meta_content(document, TITLE_META)
        .or_else(|| first_element_text(document, "title"))
        .or_else(|| first_element_text(document, "h1"))
}

fn extract_authors(document: &Html) -> Vec<String> {
    let mut authors = Vec::new();

    for selector in AUTHOR_META {
        for content in attr_values(document, selector, "content") {
            push_authors(&mut authors, &content);
        }
    }

    if authors.is_empty() {
        for selector in AUTHOR_ELEMENTS {
            let Ok(selector) = Selector::parse(selector) else {
                continue;
            };
            for element in document.select(&selector) {
                push_authors(&mut authors, &element_text(&element));
            }
            if !authors.is_empty() {
                break;
            }
        }
    }

    authors
}

/// Split a byline into names and append the new ones
fn push_authors(authors: &mut Vec<String>, raw: &str) {
    let raw = collapse_spaces(raw);
    let raw = raw
        .strip_prefix("By ")
        .or_else(|| raw.strip_prefix("by "))
        .unwrap_or(&raw);

    for name in raw.split([',', '|', ';']).flat_map(|part| part.split(" and ")) {
        let name = name.trim();
        if name.is_empty()
            || name.chars().count() > MAX_AUTHOR_CHARS
            || name.starts_with("http://")
            || name.starts_with("https://")
        {
            continue;
        }
        if !authors.iter().any(|existing| existing == name) {
            authors.push(name.to_string());
        }
    }
}

fn extract_publish_date(document: &Html) -> Option<DateTime<FixedOffset>> {
    DATE_META
        .iter()
        .flat_map(|selector| attr_values(document, selector, "content"))
        .chain(attr_values(document, "[itemprop='datePublished']", "datetime"))
        .chain(attr_values(document, "time[datetime]", "datetime"))
        .find_map(|value| parse_date(&value))
}

/// Parse the date formats pages commonly publish
///
/// Values without an offset are taken as UTC.
pub fn parse_date(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date);
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(value) {
        return Some(date);
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    let day = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

fn extract_top_image(document: &Html, base: &Url) -> Option<String> {
    first_meta_content(document, IMAGE_META)
        .or_else(|| attr_values(document, "link[rel='image_src']", "href").into_iter().next())
        .and_then(|src| base.join(&src).ok())
        .map(|url| url.to_string())
}

fn first_meta_content(document: &Html, selectors: &[&str]) -> Option<String> {
    selectors
        .iter()
        .flat_map(|selector| attr_values(document, selector, "content"))
        .next()
}

fn first_element_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .find_map(|element| non_empty(&element_text(&element)))
}

/// Non-empty values of `attr` on every element matching `selector`
fn attr_values(document: &Html, selector: &str, attr: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };
    document
        .select(&selector)
        .filter_map(|element| element.value().attr(attr))
        .filter_map(non_empty)
        .collect()
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ")
}
