//! Slice Data Types
//!
//! Options, results and metadata produced by the slicing engine.
//!
//! @module slice/types

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::lang::LanguageId;

/// 0-based line indices judged relevant, grows monotonically during slicing
pub type RelevantLines = BTreeSet<usize>;

/// Inclusive line range
pub type LineRange = (usize, usize);

/// Maximal run of consecutive relevant lines, inclusive
pub type Block = LineRange;

// =============================================================================
// OPTIONS
// =============================================================================

/// Tunables for one slice invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceOptions {
    /// Number of backward identifier-propagation passes
    pub max_backward_depth: usize,
    /// Keep trailing comments of omitted lines, with the code masked
    pub preserve_inline_comments: bool,
    /// Keep if/for/while headers whose bodies are relevant
    pub include_control_headers: bool,
    /// Replace the language's line-comment token in markers and diagnostics
    pub line_comment_override: Option<String>,
}

impl Default for SliceOptions {
    fn default() -> Self {
        Self {
            max_backward_depth: 2,
            preserve_inline_comments: true,
            include_control_headers: true,
            line_comment_override: None,
        }
    }
}

impl SliceOptions {
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.max_backward_depth = depth;
        self
    }
}

// =============================================================================
// RESULT
// =============================================================================

/// How a slice request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliceOutcome {
    /// A slice was produced
    Sliced,
    InvalidLine,
    EmptySource,
    LineBeyondEof,
    UnsupportedLanguage,
    ParseFailed,
    /// No function covers the target line
    FunctionNotFound,
    /// A function was found but no node inside it covers the line
    TargetNotFound,
}

impl SliceOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SliceOutcome::Sliced => "sliced",
            SliceOutcome::InvalidLine => "invalid_line",
            SliceOutcome::EmptySource => "empty_source",
            SliceOutcome::LineBeyondEof => "line_beyond_eof",
            SliceOutcome::UnsupportedLanguage => "unsupported_language",
            SliceOutcome::ParseFailed => "parse_failed",
            SliceOutcome::FunctionNotFound => "function_not_found",
            SliceOutcome::TargetNotFound => "target_not_found",
        }
    }
}

impl std::fmt::Display for SliceOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifier sets, sorted for deterministic output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierSets {
    pub seed: Vec<String>,
    pub reads: Vec<String>,
    pub writes: Vec<String>,
}

/// Structured description of a slice; line numbers are 1-based
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_lines: Option<LineRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_lines: Option<LineRange>,
    pub target_line: i64,
    /// Target line counted from the function's first line (1-based)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifiers: Option<IdentifierSets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<Block>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_inline_comments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_parse_errors: Option<bool>,
}

impl SliceMeta {
    pub fn for_target(target_line: i64) -> Self {
        Self {
            target_line,
            ..Default::default()
        }
    }
}

/// Output of `slice_function`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceResult {
    pub text: String,
    pub meta: SliceMeta,
    pub outcome: SliceOutcome,
}

impl SliceResult {
    /// A diagnostic result carrying only a comment-style message
    pub fn diagnostic(outcome: SliceOutcome, text: String, meta: SliceMeta) -> Self {
        Self {
            text,
            meta,
            outcome,
        }
    }

    pub fn is_sliced(&self) -> bool {
        self.outcome == SliceOutcome::Sliced
    }
}
