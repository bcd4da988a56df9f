//! Article extractor
//!
//! Primary strategy: page metadata from the DOM plus the Readability
//! article body.

use super::metadata::PageMetadata;
use super::Extractor;
use crate::client::Downloader;
use crate::error::ReadError;
use crate::text::clean_whitespace;
use crate::types::Extraction;
use dom_smoothie::{Config, Readability};
use scraper::Html;
use tracing::warn;
use url::Url;

/// Upper bound on elements Readability scores
const MAX_ELEMENTS_TO_PARSE: usize = 9000;

/// Article extractor
///
/// Produces every [`Extraction`] field. A page Readability cannot make
/// sense of yields an empty body rather than an error, so the chain can
/// fall back.
pub struct ArticleExtractor;

impl ArticleExtractor {
    /// Create a new article extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract from an already downloaded page
    pub fn extract_html(html: &str, url: &Url) -> Extraction {
        let document = Html::parse_document(html);
        let metadata = PageMetadata::extract(&document, url);

        Extraction {
            title: metadata.title,
            authors: metadata.authors,
            publish_date: metadata.publish_date,
            top_image: metadata.top_image,
            body_text: readable_text(html, url),
        }
    }
}

impl Default for ArticleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for ArticleExtractor {
    fn name(&self) -> &'static str {
        "article"
    }

    fn try_extract(&self, url: &Url, downloader: &Downloader) -> Result<Extraction, ReadError> {
        let page = downloader.get(url)?;
        Ok(Self::extract_html(&page.html, &page.url))
    }
}

/// Run Readability and return the cleaned article text
fn readable_text(html: &str, url: &Url) -> Option<String> {
    let cfg = Config {
        max_elements_to_parse: MAX_ELEMENTS_TO_PARSE,
        ..Default::default()
    };

    let mut readability = match Readability::new(html, Some(url.as_str()), Some(cfg)) {
        Ok(readability) => readability,
        Err(e) => {
            warn!(url = %url, error = %e, "Readability could not load page");
            return None;
        }
    };

    match readability.parse() {
        Ok(article) => {
            let text = clean_whitespace(&article.text_content);
            if text.is_empty() {
                None
            } else {
                Some(text)
            }
        }
        Err(e) => {
            warn!(url = %url, error = %e, "Readability found no article");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Startup stock options</title>
  <meta name="author" content="Taivo Pungas">
  <meta property="og:image" content="/content/images/stonks.jpg">
</head>
<body>
  <nav><a href="/">Home</a> <a href="/about">About</a></nav>
  <article>
    <h1>Startup stock options</h1>
    <p>When you join a startup you are often offered stock options as part of the
    compensation package. This guide explains what they are and how they work, so
    you can make an informed decision before signing anything at all.</p>
    <p>The safest approach is to assume the option package is worth nothing and
    negotiate your salary accordingly. Anything that the options eventually turn
    into is then a pleasant surprise rather than a painful disappointment.</p>
    <p>Options give you the right to buy shares at a fixed strike price. If the
    company grows, the difference between the strike price and the share value is
    your gain, minus the taxes you owe when you exercise and later sell.</p>
  </article>
  <footer>Copyright notice</footer>
</body>
</html>"#;

    fn url() -> Url {
        Url::parse("https://www.example.com/startup-stock-options/").unwrap()
    }

    #[test]
    fn test_extract_article() {
        let extraction = ArticleExtractor::extract_html(ARTICLE_HTML, &url());

        assert_eq!(extraction.title.as_deref(), Some("Startup stock options"));
        assert_eq!(extraction.authors, vec!["Taivo Pungas"]);
        assert_eq!(
            extraction.top_image.as_deref(),
            Some("https://www.example.com/content/images/stonks.jpg")
        );
        assert!(extraction.has_body());
        let body = extraction.body_text.unwrap();
        assert!(body.contains("assume the option package is worth nothing"));
        assert!(!body.contains("Copyright notice"));
    }

    #[test]
    fn test_page_without_article() {
        let html = "<html><head><title>Empty</title></head><body></body></html>";
        let extraction = ArticleExtractor::extract_html(html, &url());

        assert_eq!(extraction.title.as_deref(), Some("Empty"));
        assert!(!extraction.has_body());
    }
}
