//! Slice Entry Point
//!
//! `slice_function` never fails: bad input, unknown languages and structural
//! misses come back as diagnostic results whose text is a single comment line.
//!
//! @module slice/engine

use tracing::{debug, warn};

use super::assemble::{assemble, AssembleInput};
use super::backward::{backward_slice, ensure_control_headers};
use super::comments::comment_only_lines;
use super::locate::{find_enclosing_function, find_target_node, find_target_statement};
use super::types::{IdentifierSets, SliceMeta, SliceOptions, SliceOutcome, SliceResult};
use crate::lang::{self, LanguageProfile};
use crate::parse::{self, line_span};

/// Validated request: 0-based target line plus the resolved profile
pub(crate) struct Prepared<'a> {
    pub lines: Vec<&'a str>,
    pub line: usize,
    pub profile: &'static LanguageProfile,
    pub prefix: String,
}

/// Shared guard sequence for slicing and extraction
///
/// Returns the diagnostic (outcome, text, meta) when the request cannot proceed.
pub(crate) fn prepare<'a>(
    source: &'a str,
    filename_hint: &str,
    target_line: i64,
    comment_override: Option<&str>,
) -> std::result::Result<Prepared<'a>, (SliceOutcome, String, SliceMeta)> {
    let resolved = lang::resolve(filename_hint);
    let mut meta = SliceMeta::for_target(target_line);
    meta.language = resolved.as_ref().ok().map(|p| p.id());

    let prefix = comment_override
        .map(str::to_string)
        .or_else(|| resolved.as_ref().ok().map(|p| p.line_comment().to_string()))
        .unwrap_or_else(|| "//".to_string());

    if target_line <= 0 {
        let text = format!("{} Invalid line number (must be 1-based and > 0).", prefix);
        return Err((SliceOutcome::InvalidLine, text, meta));
    }

    let lines: Vec<&str> = source.lines().collect();
    if lines.is_empty() {
        return Err((SliceOutcome::EmptySource, format!("{} Empty source.", prefix), meta));
    }

    let line = (target_line - 1) as usize;
    if line >= lines.len() {
        let text = format!("{} Target line beyond end of file.", prefix);
        return Err((SliceOutcome::LineBeyondEof, text, meta));
    }

    let profile = match resolved {
        Ok(profile) => profile,
        Err(e) => {
            return Err((SliceOutcome::UnsupportedLanguage, format!("{} {}", prefix, e), meta));
        }
    };

    Ok(Prepared {
        lines,
        line,
        profile,
        prefix,
    })
}

/// Slice the function enclosing `target_line` (1-based) down to its relevant lines
pub fn slice_function(
    source: &str,
    filename_hint: &str,
    target_line: i64,
    options: &SliceOptions,
) -> SliceResult {
    let prepared = match prepare(
        source,
        filename_hint,
        target_line,
        options.line_comment_override.as_deref(),
    ) {
        Ok(prepared) => prepared,
        Err((outcome, text, meta)) => {
            debug!(%outcome, filename = filename_hint, target_line, "slice not possible");
            return SliceResult::diagnostic(outcome, text, meta);
        }
    };
    let Prepared {
        lines,
        line,
        profile,
        prefix,
    } = prepared;

    let mut meta = SliceMeta::for_target(target_line);
    meta.language = Some(profile.id());

    let tree = match parse::parse(source, profile) {
        Ok(tree) => tree,
        Err(e) => {
            warn!(error = %e, filename = filename_hint, "parse failed");
            return SliceResult::diagnostic(
                SliceOutcome::ParseFailed,
                format!("{} {}", prefix, e),
                meta,
            );
        }
    };
    let has_errors = tree.has_errors();
    if has_errors {
        warn!(
            filename = filename_hint,
            language = %profile.id(),
            "source contains parse errors, slicing best-effort"
        );
    }

    let Some(function) = find_enclosing_function(tree.root(), line, profile) else {
        return SliceResult::diagnostic(
            SliceOutcome::FunctionNotFound,
            format!("{} Function not found.", prefix),
            meta,
        );
    };
    let (f_start, f_end) = line_span(function);
    meta.function_lines = Some((f_start + 1, f_end + 1));

    let Some(deepest) = find_target_node(function, line) else {
        return SliceResult::diagnostic(
            SliceOutcome::TargetNotFound,
            format!("{} Target line not found in function.", prefix),
            meta,
        );
    };
    let target = find_target_statement(deepest, function, profile);

    let slice = backward_slice(target, function, source, profile, options);
    let mut relevant = slice.relevant;

    let comment_lines = comment_only_lines(&lines, profile.comments());
    relevant.extend(comment_lines.range(f_start..=f_end).copied());

    if options.include_control_headers {
        ensure_control_headers(function, profile, &mut relevant);
    }
    relevant.retain(|&i| i >= f_start && i <= f_end);

    let assembly = assemble(
        &lines,
        profile,
        &AssembleInput {
            function: (f_start, f_end),
            relevant: &relevant,
            comment_lines: &comment_lines,
            line_comment: &prefix,
            preserve_inline_comments: options.preserve_inline_comments,
        },
    );

    debug!(
        language = %profile.id(),
        function = ?(f_start + 1, f_end + 1),
        passes = slice.passes,
        blocks = assembly.blocks.len(),
        "sliced function"
    );

    meta.header_lines = Some((assembly.header.0 + 1, assembly.header.1 + 1));
    meta.relative_line = Some(line - f_start + 1);
    meta.identifiers = Some(IdentifierSets {
        seed: slice.seed.all().into_iter().collect(),
        reads: slice.reads.into_iter().collect(),
        writes: slice.writes.into_iter().collect(),
    });
    meta.blocks = Some(
        assembly
            .blocks
            .iter()
            .map(|&(start, end)| (start + 1, end + 1))
            .collect(),
    );
    meta.preserve_inline_comments = Some(options.preserve_inline_comments);
    meta.has_parse_errors = Some(has_errors);

    SliceResult {
        text: assembly.text(),
        meta,
        outcome: SliceOutcome::Sliced,
    }
}
