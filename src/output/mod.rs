//! Output formatting

pub mod human;
pub mod json;

use serde::Serialize;

use crate::extract::ExtractResult;
use crate::slice::SliceResult;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// A result tagged with the location it was requested for
#[derive(Debug, Clone, Serialize)]
pub struct Located<T> {
    pub location: String,
    #[serde(flatten)]
    pub result: T,
}

/// Format slice results for stdout
pub fn format_slices(items: &[Located<SliceResult>], format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => human::format_slices(items),
        OutputFormat::Json => json::format_many(items),
    }
}

/// Format an extraction result for stdout
pub fn format_extract(item: &Located<ExtractResult>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => human::format_extract(item),
        OutputFormat::Json => json::format_one(item),
    }
}
