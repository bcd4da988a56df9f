//! Python bindings for PageReader
//!
//! This module exposes the reader tool contract to Python agent frameworks.

// Allow false positive clippy warning from pyo3 macro expansion
#![allow(clippy::useless_conversion)]

use pagereader::{
    page, HintPolicy, ReadError, ReaderInput, ReaderTool, SimpleReaderInput, SimpleReaderTool,
    ToolBuilder, DEFAULT_MAX_CHARS,
};
use pyo3::exceptions::{PyNotImplementedError, PyValueError};
use pyo3::prelude::*;

/// Convert ReadError to PyErr
fn to_py_err(e: ReadError) -> PyErr {
    match e {
        ReadError::AsyncUnsupported => PyNotImplementedError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

fn configure(
    user_agent: Option<String>,
    allow_prefixes: Option<Vec<String>>,
    block_prefixes: Option<Vec<String>>,
    max_chars: usize,
) -> ToolBuilder {
    let mut builder = ToolBuilder::new().max_chars(max_chars);

    if let Some(ua) = user_agent {
        builder = builder.user_agent(ua);
    }

    for prefix in allow_prefixes.unwrap_or_default() {
        builder = builder.allow_prefix(prefix);
    }

    for prefix in block_prefixes.unwrap_or_default() {
        builder = builder.block_prefix(prefix);
    }

    builder
}

/// Python wrapper for ReaderTool
#[pyclass(name = "ReaderTool")]
pub struct PyReaderTool {
    inner: ReaderTool,
}

#[pymethods]
impl PyReaderTool {
    /// Create a new tool
    #[new]
    #[pyo3(signature = (user_agent=None, allow_prefixes=None, block_prefixes=None, max_chars=DEFAULT_MAX_CHARS, hint_only_when_remaining=false))]
    fn new(
        user_agent: Option<String>,
        allow_prefixes: Option<Vec<String>>,
        block_prefixes: Option<Vec<String>>,
        max_chars: usize,
        hint_only_when_remaining: bool,
    ) -> Self {
        let policy = if hint_only_when_remaining {
            HintPolicy::WhenRemaining
        } else {
            HintPolicy::Always
        };
        let inner = configure(user_agent, allow_prefixes, block_prefixes, max_chars)
            .hint_policy(policy)
            .build();
        Self { inner }
    }

    /// Tool name
    #[getter]
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    /// Get tool description
    fn description(&self) -> &'static str {
        self.inner.description()
    }

    /// Get full documentation (llmtxt)
    fn llmtxt(&self) -> &'static str {
        self.inner.llmtxt()
    }

    /// Get input schema as JSON string
    fn input_schema(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner.input_schema())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Read a page
    #[pyo3(signature = (url, include_body=true, cursor=0))]
    fn run(&self, url: String, include_body: bool, cursor: usize) -> PyResult<String> {
        let input = ReaderInput::new(url)
            .include_body(include_body)
            .cursor(cursor);
        self.inner.run(input).map_err(to_py_err)
    }

    /// Asynchronous reading is not supported
    #[pyo3(signature = (url, include_body=true, cursor=0))]
    fn arun(&self, url: String, include_body: bool, cursor: usize) -> PyResult<String> {
        let _ = (url, include_body, cursor);
        Err(to_py_err(ReadError::AsyncUnsupported))
    }

    fn __repr__(&self) -> String {
        format!(
            "ReaderTool(name={:?}, max_chars={})",
            self.inner.name(),
            self.inner.max_chars()
        )
    }
}

/// Python wrapper for SimpleReaderTool
#[pyclass(name = "SimpleReaderTool")]
pub struct PySimpleReaderTool {
    inner: SimpleReaderTool,
}

#[pymethods]
impl PySimpleReaderTool {
    /// Create a new tool
    #[new]
    #[pyo3(signature = (user_agent=None, allow_prefixes=None, block_prefixes=None, max_chars=DEFAULT_MAX_CHARS))]
    fn new(
        user_agent: Option<String>,
        allow_prefixes: Option<Vec<String>>,
        block_prefixes: Option<Vec<String>>,
        max_chars: usize,
    ) -> Self {
        let inner = configure(user_agent, allow_prefixes, block_prefixes, max_chars).build_simple();
        Self { inner }
    }

    /// Tool name
    #[getter]
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    /// Get tool description
    fn description(&self) -> &'static str {
        self.inner.description()
    }

    /// Get input schema as JSON string
    fn input_schema(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner.input_schema())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Read a page
    fn run(&self, url: String) -> PyResult<String> {
        self.inner
            .run(SimpleReaderInput::new(url))
            .map_err(to_py_err)
    }

    /// Asynchronous reading is not supported
    fn arun(&self, url: String) -> PyResult<String> {
        let _ = url;
        Err(to_py_err(ReadError::AsyncUnsupported))
    }
}

/// Read a page using default options (convenience function)
#[pyfunction]
#[pyo3(signature = (url, include_body=true, cursor=0))]
fn read_page(url: String, include_body: bool, cursor: usize) -> PyResult<String> {
    let input = ReaderInput::new(url)
        .include_body(include_body)
        .cursor(cursor);
    ReaderTool::default().run(input).map_err(to_py_err)
}

/// Return `max_length` characters of `text` starting from `cursor`
#[pyfunction]
fn page_result(text: &str, cursor: usize, max_length: usize) -> String {
    page(text, cursor, max_length)
}

/// Python module definition
#[pymodule]
fn pagereader_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyReaderTool>()?;
    m.add_class::<PySimpleReaderTool>()?;
    m.add_function(wrap_pyfunction!(read_page, m)?)?;
    m.add_function(wrap_pyfunction!(page_result, m)?)?;
    Ok(())
}
