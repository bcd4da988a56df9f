//! Extraction strategies for reading pages
//!
//! Design: strategies are ranked. The first one produces the full
//! [`Extraction`]; later ones are only consulted while the body is still
//! empty, and only their body text is kept.

mod article;
mod fulltext;
mod metadata;

pub use article::ArticleExtractor;
pub use fulltext::FullTextExtractor;
pub use metadata::{parse_date, PageMetadata};

use crate::client::Downloader;
use crate::error::ReadError;
use crate::types::Extraction;
use std::fmt;
use tracing::debug;
use url::Url;

/// Trait for page extraction strategies
///
/// Each strategy downloads the page through the shared [`Downloader`] and
/// turns it into an [`Extraction`]. An empty body is not an error; it tells
/// the chain to try the next strategy.
pub trait Extractor: Send + Sync {
    /// Unique identifier for this extractor (for logging/debugging)
    fn name(&self) -> &'static str;

    /// Download and extract the page
    fn try_extract(&self, url: &Url, downloader: &Downloader) -> Result<Extraction, ReadError>;
}

/// Ranked list of extraction strategies
pub struct ExtractorChain {
    extractors: Vec<Box<dyn Extractor>>,
}

impl Default for ExtractorChain {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ExtractorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl ExtractorChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Create a chain with the default strategies
    ///
    /// Includes (in order of priority):
    /// 1. ArticleExtractor - metadata plus Readability body
    /// 2. FullTextExtractor - body-only recovery from the raw page
    pub fn with_defaults() -> Self {
        let mut chain = Self::new();
        chain.register(Box::new(ArticleExtractor::new()));
        chain.register(Box::new(FullTextExtractor::new()));
        chain
    }

    /// Append a strategy at the lowest priority
    pub fn register(&mut self, extractor: Box<dyn Extractor>) {
        self.extractors.push(extractor);
    }

    /// Names of the registered strategies, highest priority first
    pub fn names(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    /// Extract a page
    ///
    /// Errors from the primary strategy propagate unmodified. When
    /// `include_body` is false the fallbacks are never consulted.
    pub fn extract(
        &self,
        url: &Url,
        include_body: bool,
        downloader: &Downloader,
    ) -> Result<Extraction, ReadError> {
        let mut extractors = self.extractors.iter();
        let primary = extractors.next().ok_or(ReadError::NoExtractor)?;

        debug!(extractor = primary.name(), url = %url, "Using extractor");
        let mut extraction = primary.try_extract(url, downloader)?;

        if !include_body {
            return Ok(extraction);
        }

        for fallback in extractors {
            if extraction.has_body() {
                break;
            }
            debug!(extractor = fallback.name(), url = %url, "Body empty, falling back");
            extraction.body_text = fallback.try_extract(url, downloader)?.body_text;
        }

        Ok(extraction)
    }
}
