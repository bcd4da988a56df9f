//! Page reader: download, extract and render a URL

use crate::client::{DownloadOptions, Downloader};
use crate::error::ReadError;
use crate::extractors::ExtractorChain;
use crate::render::{render, Templates};
use crate::types::Extraction;
use std::sync::Arc;

/// Reads pages through a ranked [`ExtractorChain`]
///
/// Every call downloads afresh; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct PageReader {
    downloader: Downloader,
    chain: Arc<ExtractorChain>,
    templates: Templates,
}

impl Default for PageReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PageReader {
    /// Create a reader with the default strategies and templates
    pub fn new() -> Self {
        Self {
            downloader: Downloader::default(),
            chain: Arc::new(ExtractorChain::with_defaults()),
            templates: Templates::default(),
        }
    }

    /// Replace the download options
    pub fn with_download_options(mut self, options: DownloadOptions) -> Self {
        self.downloader = Downloader::new(options);
        self
    }

    /// Replace the extraction strategies
    pub fn with_chain(mut self, chain: ExtractorChain) -> Self {
        self.chain = Arc::new(chain);
        self
    }

    /// Replace the templates
    pub fn with_templates(mut self, templates: Templates) -> Self {
        self.templates = templates;
        self
    }

    /// Download and extract a page
    ///
    /// Fallback strategies only run when `include_body` is true and the
    /// primary strategy found no body.
    pub fn fetch(&self, url: &str, include_body: bool) -> Result<Extraction, ReadError> {
        let url = self.downloader.validate(url)?;
        self.chain.extract(&url, include_body, &self.downloader)
    }

    /// Download, extract and render a page
    pub fn read(&self, url: &str, include_body: bool) -> Result<String, ReadError> {
        let extraction = self.fetch(url, include_body)?;
        Ok(render(&extraction, include_body, &self.templates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_invalid_urls() {
        let reader = PageReader::new();
        assert!(matches!(reader.read("", true), Err(ReadError::MissingUrl)));
        assert!(matches!(
            reader.read("file:///etc/passwd", true),
            Err(ReadError::InvalidUrlScheme)
        ));
    }

    #[test]
    fn test_read_blocked_url() {
        let reader = PageReader::new().with_download_options(DownloadOptions {
            block_prefixes: vec!["https://blocked.example".to_string()],
            ..Default::default()
        });
        assert!(matches!(
            reader.fetch("https://blocked.example/page", false),
            Err(ReadError::BlockedUrl)
        ));
    }

    #[test]
    fn test_empty_chain() {
        let reader = PageReader::new().with_chain(ExtractorChain::new());
        assert!(matches!(
            reader.fetch("https://example.com", true),
            Err(ReadError::NoExtractor)
        ));
    }
}
