//! Rendering extractions into the text handed to the agent

use crate::types::Extraction;

/// Default template for metadata plus body
pub const FULL_TEMPLATE: &str = "TITLE: {title}
AUTHORS: {authors}
PUBLISH DATE: {publish_date}
TOP_IMAGE_URL: {top_image}
TEXT:

{text}
";

/// Default template for metadata only
pub const METADATA_TEMPLATE: &str = "TITLE: {title}
AUTHORS: {authors}
PUBLISH DATE: {publish_date}
TOP_IMAGE_URL: {top_image}
";

/// Rendering of a missing value
const MISSING: &str = "None";

/// Templates used by [`render`]
///
/// Placeholders: `{title}`, `{authors}`, `{publish_date}`, `{top_image}`
/// and `{text}`. Unknown placeholders are left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    /// Used when the body is included
    pub full: String,
    /// Used when only metadata is requested
    pub metadata_only: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            full: FULL_TEMPLATE.to_string(),
            metadata_only: METADATA_TEMPLATE.to_string(),
        }
    }
}

/// Render an extraction
///
/// With `include_body` false the metadata template is used and the body is
/// never part of the output. Values are interpolated as-is.
pub fn render(extraction: &Extraction, include_body: bool, templates: &Templates) -> String {
    let template = if include_body {
        &templates.full
    } else {
        &templates.metadata_only
    };

    fill(template, |name| match name {
        "title" => Some(or_missing(extraction.title.as_deref())),
        "authors" => Some(format!("{:?}", extraction.authors)),
        "publish_date" => Some(
            extraction
                .publish_date
                .map(|date| date.to_string())
                .unwrap_or_else(|| MISSING.to_string()),
        ),
        "top_image" => Some(or_missing(extraction.top_image.as_deref())),
        "text" if include_body => Some(or_missing(extraction.body_text.as_deref())),
        _ => None,
    })
}

fn or_missing(value: Option<&str>) -> String {
    value.unwrap_or(MISSING).to_string()
}

/// Substitute `{name}` placeholders in a single pass
///
/// Substituted values are never rescanned.
fn fill(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        output.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => match lookup(&after[..end]) {
                Some(value) => {
                    output.push_str(&value);
                    rest = &after[end + 1..];
                }
                None => {
                    output.push('{');
                    rest = after;
                }
            },
            None => {
                output.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    output.push_str(rest);
    output
}
