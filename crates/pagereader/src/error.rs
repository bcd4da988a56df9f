//! Error types for PageReader

use thiserror::Error;

/// Errors that can occur while reading a page
#[derive(Debug, Error)]
pub enum ReadError {
    /// URL is missing
    #[error("Missing required parameter: url")]
    MissingUrl,

    /// URL has invalid scheme
    #[error("Invalid URL: must start with http:// or https://")]
    InvalidUrlScheme,

    /// URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// URL is blocked by prefix list
    #[error("Blocked URL: prefix not allowed")]
    BlockedUrl,

    /// Failed to build HTTP client
    #[error("Failed to create HTTP client")]
    ClientBuildError(#[source] reqwest::Error),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Failed to connect to server
    #[error("Failed to connect to server")]
    ConnectError(#[source] reqwest::Error),

    /// Other request error
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Server answered with a non-success status
    #[error("Download failed with HTTP status {0}")]
    HttpStatus(u16),

    /// Content type cannot be read as a page
    #[error("Unsupported content type: {0}")]
    UnsupportedContent(String),

    /// Extractor chain has no strategies
    #[error("No extraction strategy registered")]
    NoExtractor,

    /// Fallback extraction could not download the page
    #[error("Could not download article.")]
    DownloadFailed,

    /// Asynchronous invocation is not offered
    #[error("Asynchronous reading is not supported")]
    AsyncUnsupported,
}

impl ReadError {
    /// Create an error from a reqwest error
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ReadError::Timeout
        } else if err.is_connect() {
            ReadError::ConnectError(err)
        } else {
            ReadError::RequestError(err.to_string())
        }
    }
}
