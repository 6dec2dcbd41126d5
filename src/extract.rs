//! Full Function Extraction
//!
//! Non-compressing counterpart of `slice_function`: returns the enclosing
//! function verbatim together with the smallest multi-line construct
//! around the target line.
//!
//! @module extract

use serde::{Deserialize, Serialize};

use crate::lang::LanguageId;
use crate::parse::{self, line_span};
use crate::slice::engine::{prepare, Prepared};
use crate::slice::locate::{climb_to_multiline, find_enclosing_function, find_target_node};
use crate::slice::{LineRange, SliceOutcome};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_lines: Option<LineRange>,
    pub target_line: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_line: Option<usize>,
    /// Text of the smallest multi-line construct covering the target line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_on_line: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResult {
    pub text: String,
    pub meta: ExtractMeta,
    pub outcome: SliceOutcome,
}

/// Extract the whole function enclosing `target_line` (1-based)
pub fn extract_function(source: &str, filename_hint: &str, target_line: i64) -> ExtractResult {
    let Prepared {
        lines,
        line,
        profile,
        prefix,
    } = match prepare(source, filename_hint, target_line, None) {
        Ok(prepared) => prepared,
        Err((outcome, text, meta)) => {
            return ExtractResult {
                text,
                meta: ExtractMeta {
                    language: meta.language,
                    target_line,
                    ..Default::default()
                },
                outcome,
            };
        }
    };

    let mut meta = ExtractMeta {
        language: Some(profile.id()),
        target_line,
        ..Default::default()
    };

    let tree = match parse::parse(source, profile) {
        Ok(tree) => tree,
        Err(e) => {
            return ExtractResult {
                text: format!("{} {}", prefix, e),
                meta,
                outcome: SliceOutcome::ParseFailed,
            };
        }
    };

    let function = find_enclosing_function(tree.root(), line, profile);
    let search_root = function.unwrap_or_else(|| tree.root());
    let covering = find_target_node(search_root, line);

    meta.code_on_line = match covering.and_then(climb_to_multiline) {
        Some(node) => Some(tree.text(node).to_string()),
        None => lines.get(line).map(|l| l.to_string()),
    };

    let Some(function) = function else {
        return ExtractResult {
            text: format!("{} Function not found.", prefix),
            meta,
            outcome: SliceOutcome::FunctionNotFound,
        };
    };

    let (f_start, f_end) = line_span(function);
    meta.function_lines = Some((f_start + 1, f_end + 1));
    meta.relative_line = Some(line - f_start + 1);

    ExtractResult {
        text: tree.text(function).to_string(),
        meta,
        outcome: SliceOutcome::Sliced,
    }
}
