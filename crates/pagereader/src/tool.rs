//! Tool builder and contract for PageReader

use crate::client::DownloadOptions;
use crate::error::ReadError;
use crate::extractors::ExtractorChain;
use crate::paging::{HintPolicy, Truncation, DEFAULT_MAX_CHARS};
use crate::reader::PageReader;
use crate::render::Templates;
use crate::types::{ReaderInput, SimpleReaderInput};
use crate::{TOOL_DESCRIPTION, TOOL_LLMTXT, TOOL_NAME};
use schemars::schema_for;

/// Builder for configuring the reader tools
#[derive(Debug, Default)]
pub struct ToolBuilder {
    /// Custom User-Agent
    user_agent: Option<String>,
    /// Allow list of URL prefixes
    allow_prefixes: Vec<String>,
    /// Block list of URL prefixes
    block_prefixes: Vec<String>,
    /// Character budget
    max_chars: Option<usize>,
    /// Continuation hint policy
    hint_policy: HintPolicy,
    /// Render templates
    templates: Templates,
    /// Custom extraction strategies
    chain: Option<ExtractorChain>,
}

impl ToolBuilder {
    /// Create a new tool builder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom User-Agent
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Add URL prefix to allow list
    pub fn allow_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.allow_prefixes.push(prefix.into());
        self
    }

    /// Add URL prefix to block list
    pub fn block_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.block_prefixes.push(prefix.into());
        self
    }

    /// Set the character budget of a single response
    pub fn max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = Some(max_chars);
        self
    }

    /// Set when the continuation hint is appended
    pub fn hint_policy(mut self, policy: HintPolicy) -> Self {
        self.hint_policy = policy;
        self
    }

    /// Set render templates
    pub fn templates(mut self, templates: Templates) -> Self {
        self.templates = templates;
        self
    }

    /// Use custom extraction strategies instead of the defaults
    pub fn extractors(mut self, chain: ExtractorChain) -> Self {
        self.chain = Some(chain);
        self
    }

    fn into_parts(self) -> (PageReader, usize, HintPolicy) {
        let options = DownloadOptions {
            user_agent: self.user_agent,
            allow_prefixes: self.allow_prefixes,
            block_prefixes: self.block_prefixes,
        };

        let mut reader = PageReader::new()
            .with_download_options(options)
            .with_templates(self.templates);
        if let Some(chain) = self.chain {
            reader = reader.with_chain(chain);
        }

        (
            reader,
            self.max_chars.unwrap_or(DEFAULT_MAX_CHARS),
            self.hint_policy,
        )
    }

    /// Build the reader tool
    pub fn build(self) -> ReaderTool {
        let (reader, max_chars, hint) = self.into_parts();
        ReaderTool {
            reader,
            truncation: Truncation::new(max_chars, hint),
        }
    }

    /// Build the simple reader tool; the hint policy is ignored
    pub fn build_simple(self) -> SimpleReaderTool {
        let (reader, max_chars, _) = self.into_parts();
        SimpleReaderTool {
            reader,
            truncation: Truncation::new(max_chars, HintPolicy::Never),
        }
    }
}

/// Reader tool with body toggle and cursor pagination
#[derive(Debug, Clone)]
pub struct ReaderTool {
    reader: PageReader,
    truncation: Truncation,
}

impl Default for ReaderTool {
    fn default() -> Self {
        ToolBuilder::new().build()
    }
}

impl ReaderTool {
    /// Create a new tool builder
    pub fn builder() -> ToolBuilder {
        ToolBuilder::new()
    }

    /// Tool name
    pub fn name(&self) -> &'static str {
        TOOL_NAME
    }

    /// Get tool description
    pub fn description(&self) -> &'static str {
        TOOL_DESCRIPTION
    }

    /// Get full documentation (llmtxt)
    pub fn llmtxt(&self) -> &'static str {
        TOOL_LLMTXT
    }

    /// Character budget of a single response
    pub fn max_chars(&self) -> usize {
        self.truncation.max_chars
    }

    /// Get input schema as JSON
    pub fn input_schema(&self) -> serde_json::Value {
        let schema = schema_for!(ReaderInput);
        serde_json::to_value(schema).unwrap_or_default()
    }

    /// Read a page, blocking until done
    ///
    /// Pages over the budget are windowed at the input cursor and end with a
    /// continuation hint.
    pub fn run(&self, input: ReaderInput) -> Result<String, ReadError> {
        let page = self.reader.read(&input.url, input.wants_body())?;
        Ok(self.truncation.apply(&page, input.effective_cursor()))
    }

    /// Asynchronous reading is not offered; always fails
    pub async fn run_async(&self, _input: ReaderInput) -> Result<String, ReadError> {
        Err(ReadError::AsyncUnsupported)
    }
}

/// Reader tool taking only a URL
///
/// Always includes the body and returns the first window without a hint.
#[derive(Debug, Clone)]
pub struct SimpleReaderTool {
    reader: PageReader,
    truncation: Truncation,
}

impl Default for SimpleReaderTool {
    fn default() -> Self {
        ToolBuilder::new().build_simple()
    }
}

impl SimpleReaderTool {
    /// Create a new tool builder
    pub fn builder() -> ToolBuilder {
        ToolBuilder::new()
    }

    /// Tool name
    pub fn name(&self) -> &'static str {
        TOOL_NAME
    }

    /// Get tool description
    pub fn description(&self) -> &'static str {
        TOOL_DESCRIPTION
    }

    /// Character budget of a single response
    pub fn max_chars(&self) -> usize {
        self.truncation.max_chars
    }

    /// Get input schema as JSON
    pub fn input_schema(&self) -> serde_json::Value {
        let schema = schema_for!(SimpleReaderInput);
        serde_json::to_value(schema).unwrap_or_default()
    }

    /// Read a page, blocking until done
    pub fn run(&self, input: SimpleReaderInput) -> Result<String, ReadError> {
        let page = self.reader.read(&input.url, true)?;
        Ok(self.truncation.apply(&page, 0))
    }

    /// Asynchronous reading is not offered; always fails
    pub async fn run_async(&self, _input: SimpleReaderInput) -> Result<String, ReadError> {
        Err(ReadError::AsyncUnsupported)
    }
}
