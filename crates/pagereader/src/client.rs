//! HTTP download for PageReader
//!
//! Every extraction strategy goes through [`Downloader::get`], so URL
//! validation, allow/block lists and header handling live in one place.

use crate::error::ReadError;
use crate::DEFAULT_USER_AGENT;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use std::io::Read;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Binary content type prefixes
const BINARY_PREFIXES: &[&str] = &[
    "image/",
    "audio/",
    "video/",
    "application/octet-stream",
    "application/pdf",
    "application/zip",
    "application/gzip",
    "application/x-tar",
    "application/x-rar",
    "application/x-7z",
    "application/vnd.ms-",
    "application/vnd.openxmlformats",
    "font/",
];

/// Connect timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Total request timeout, body included
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Largest body we read before cutting off
const MAX_BODY_BYTES: u64 = 10 * 1024 * 1024;

const ACCEPT_HTML: &str = "text/html, application/xhtml+xml, text/plain;q=0.9, */*;q=0.8";

/// Download options that can be configured via tool builder
#[derive(Debug, Clone, Default)]
pub struct DownloadOptions {
    /// Custom User-Agent
    pub user_agent: Option<String>,
    /// Allow list of URL prefixes
    pub allow_prefixes: Vec<String>,
    /// Block list of URL prefixes
    pub block_prefixes: Vec<String>,
}

/// A downloaded page
#[derive(Debug, Clone)]
pub struct Page {
    /// Final URL after redirects
    pub url: Url,
    /// Decoded body
    pub html: String,
}

/// Blocking page downloader shared by the extraction strategies
#[derive(Debug, Clone, Default)]
pub struct Downloader {
    options: DownloadOptions,
}

impl Downloader {
    /// Create a downloader with the given options
    pub fn new(options: DownloadOptions) -> Self {
        Self { options }
    }

    /// Validate a URL against scheme rules and the allow/block lists
    pub fn validate(&self, url: &str) -> Result<Url, ReadError> {
        if url.is_empty() {
            return Err(ReadError::MissingUrl);
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ReadError::InvalidUrlScheme);
        }

        let parsed = Url::parse(url).map_err(|e| ReadError::InvalidUrl(e.to_string()))?;

        if !self.options.allow_prefixes.is_empty() {
            let allowed = self
                .options
                .allow_prefixes
                .iter()
                .any(|prefix| url.starts_with(prefix));
            if !allowed {
                return Err(ReadError::BlockedUrl);
            }
        }

        if self
            .options
            .block_prefixes
            .iter()
            .any(|prefix| url.starts_with(prefix))
        {
            return Err(ReadError::BlockedUrl);
        }

        Ok(parsed)
    }

    /// Download a page with a single blocking GET
    pub fn get(&self, url: &Url) -> Result<Page, ReadError> {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .options
            .user_agent
            .as_deref()
            .unwrap_or(DEFAULT_USER_AGENT);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT)),
        );
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ReadError::ClientBuildError)?;

        debug!(url = %url, "Downloading page");
        let response = client
            .get(url.as_str())
            .send()
            .map_err(ReadError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReadError::HttpStatus(status.as_u16()));
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        if let Some(ref ct) = content_type {
            if is_binary_content_type(ct) {
                return Err(ReadError::UnsupportedContent(ct.clone()));
            }
        }

        let (body, cut_off) = read_capped(response, MAX_BODY_BYTES)
            .map_err(|e| ReadError::RequestError(e.to_string()))?;

        if cut_off {
            warn!(url = %url, limit = MAX_BODY_BYTES, "Body size limit reached, page cut off");
        }

        debug!(
            url = %final_url,
            status = status.as_u16(),
            content_type = ?content_type,
            bytes = body.len(),
            "Downloaded page"
        );

        Ok(Page {
            url: final_url,
            html: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}

/// Read at most `limit` bytes, reporting whether more were available
fn read_capped<R: Read>(reader: R, limit: u64) -> std::io::Result<(Vec<u8>, bool)> {
    let mut body = Vec::new();
    reader.take(limit + 1).read_to_end(&mut body)?;

    let cut_off = body.len() as u64 > limit;
    if cut_off {
        body.truncate(limit as usize);
    }
    Ok((body, cut_off))
}

/// Check if content type indicates binary content
fn is_binary_content_type(content_type: &str) -> bool {
    let ct_lower = content_type.to_lowercase();
    BINARY_PREFIXES
        .iter()
        .any(|prefix| ct_lower.starts_with(prefix))
}
