//! PageReader - AI-friendly web page reading library
//!
//! Downloads a page, extracts its title, authors, publication date, lead
//! image and readable body, and renders them into a bounded text blob an
//! agent can page through with a cursor.
//!
//! ## Extraction strategies
//!
//! Extraction runs through a ranked [`ExtractorChain`]. The first strategy
//! yields metadata and body; later strategies only replace an empty body.
//!
//! Built-in strategies:
//! - [`ArticleExtractor`] - DOM metadata plus Readability body
//! - [`FullTextExtractor`] - body recovery from the raw page
//!
//! Reading is synchronous. The `run_async` entry points exist only to fail
//! with [`ReadError::AsyncUnsupported`].

mod client;
mod error;
pub mod extractors;
mod paging;
mod reader;
mod render;
mod text;
mod tool;
mod types;

pub use client::{DownloadOptions, Downloader, Page};
pub use error::ReadError;
pub use extractors::{ArticleExtractor, Extractor, ExtractorChain, FullTextExtractor};
pub use paging::{
    continuation_hint, page, HintPolicy, Truncation, DEFAULT_MAX_CHARS, EXTENDED_MAX_CHARS,
};
pub use reader::PageReader;
pub use render::{render, Templates, FULL_TEMPLATE, METADATA_TEMPLATE};
pub use tool::{ReaderTool, SimpleReaderTool, ToolBuilder};
pub use types::{Extraction, ReaderInput, SimpleReaderInput};

/// Default User-Agent string
pub const DEFAULT_USER_AGENT: &str = "Everruns PageReader/1.0";

/// Tool name as registered with agents
pub const TOOL_NAME: &str = "read_page";

/// Tool description for LLM consumption
pub const TOOL_DESCRIPTION: &str = r#"Use this to read a website. Returns the title, authors, publish date, top image and body text of the page.

- Set include_body to false to get only the metadata
- Long pages are truncated; continue with the cursor named in the response"#;

/// Extended documentation for LLM consumption (llmtxt)
pub const TOOL_LLMTXT: &str = r#"# PageReader Tool

Reads a web page and returns its metadata and readable text.

## Capabilities
- Article extraction (title, authors, publish date, top image, body)
- Full-text fallback when no article body is found
- Cursor pagination of long pages

## Input Parameters
- `url` (required): The URL to read (must be http:// or https://)
- `include_body` (optional): If false, only the title, authors, publish date and top image are returned (default: true)
- `cursor` (optional): Start reading from this character (default: 0)

## Output
Plain text:

```
TITLE: <title>
AUTHORS: [<authors>]
PUBLISH DATE: <date>
TOP_IMAGE_URL: <url>
TEXT:

<body>
```

Missing values read `None`.

## Truncation
Pages over the character budget are cut at the cursor and end with:

```
RESULT TOO LONG, TRUNCATED. USE CURSOR=<n> TO CONTINUE.
```

Call again with `cursor` set to `<n>` to continue reading.

## Examples

### Read an article
```json
{"url": "https://example.com/post"}
```

### Metadata only
```json
{"url": "https://example.com/post", "include_body": false}
```

### Continue a truncated page
```json
{"url": "https://example.com/post", "cursor": 4000}
```

## Error Handling
- Invalid URLs return an error
- HTTP errors and binary content return an error
- "Could not download article." when the fallback download fails
"#;
