//! Core types for PageReader

use chrono::{DateTime, FixedOffset};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fields extracted from a page by an extraction strategy
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Page title
    pub title: Option<String>,
    /// Authors in document order
    pub authors: Vec<String>,
    /// Publication timestamp
    pub publish_date: Option<DateTime<FixedOffset>>,
    /// Absolute URL of the lead image
    pub top_image: Option<String>,
    /// Readable body text
    pub body_text: Option<String>,
}

impl Extraction {
    /// True when the body holds non-whitespace text
    pub fn has_body(&self) -> bool {
        self.body_text
            .as_deref()
            .is_some_and(|text| !text.trim().is_empty())
    }
}

/// Input for [`ReaderTool`](crate::ReaderTool)
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ReaderInput {
    /// URL of the website to read
    pub url: String,

    /// If false, only the title, authors, publish date and top image will be
    /// returned. If true, the response also contains the full body of the article.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_body: Option<bool>,

    /// Start reading from this character. Use when the first response was
    /// truncated and you want to continue reading the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<usize>,
}

impl ReaderInput {
    /// Create a new input with the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set whether the body is included
    pub fn include_body(mut self, include: bool) -> Self {
        self.include_body = Some(include);
        self
    }

    /// Set the cursor
    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Effective include_body flag (default true)
    pub fn wants_body(&self) -> bool {
        self.include_body.unwrap_or(true)
    }

    /// Effective cursor (default 0)
    pub fn effective_cursor(&self) -> usize {
        self.cursor.unwrap_or(0)
    }
}

/// Input for [`SimpleReaderTool`](crate::SimpleReaderTool)
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SimpleReaderInput {
    /// URL of the website to read
    pub url: String,
}

impl SimpleReaderInput {
    /// Create a new input with the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
