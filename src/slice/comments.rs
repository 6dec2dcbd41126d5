//! Comment Preserver
//!
//! Line-level comment detection driven by a profile's comment syntax.
//! String literals are not recognised, so a comment token inside a string
//! counts as a comment.
//!
//! @module slice/comments

use std::collections::BTreeSet;

use crate::lang::CommentStyle;

/// Ellipsis standing in for omitted code in front of a kept comment
pub const MASK: char = '…';

enum Opener {
    Line,
    Block(&'static str, &'static str),
}

/// Earliest comment opener in `text`
fn earliest_opener(text: &str, style: &CommentStyle) -> Option<(usize, Opener)> {
    let mut best: Option<(usize, Opener)> = None;
    for &prefix in style.line {
        if let Some(pos) = text.find(prefix) {
            if best.as_ref().map_or(true, |(b, _)| pos < *b) {
                best = Some((pos, Opener::Line));
            }
        }
    }
    for &(open, close) in style.block {
        if let Some(pos) = text.find(open) {
            if best.as_ref().map_or(true, |(b, _)| pos < *b) {
                best = Some((pos, Opener::Block(open, close)));
            }
        }
    }
    best
}

/// Indices of lines made only of comments (line comments or block-comment spans)
///
/// Block-comment state carries across lines until the closer is seen.
pub fn comment_only_lines(lines: &[&str], style: &CommentStyle) -> BTreeSet<usize> {
    let mut result = BTreeSet::new();
    let mut open_block: Option<&'static str> = None;

    for (i, line) in lines.iter().enumerate() {
        let mut rest: &str = line;
        let mut has_comment = false;
        let mut has_code = false;

        loop {
            if let Some(close) = open_block {
                has_comment = true;
                match rest.find(close) {
                    Some(k) => {
                        rest = &rest[k + close.len()..];
                        open_block = None;
                    }
                    None => break,
                }
                continue;
            }

            match earliest_opener(rest, style) {
                None => {
                    has_code |= !rest.trim().is_empty();
                    break;
                }
                Some((pos, Opener::Line)) => {
                    has_code |= !rest[..pos].trim().is_empty();
                    has_comment = true;
                    break;
                }
                Some((pos, Opener::Block(open, close))) => {
                    has_code |= !rest[..pos].trim().is_empty();
                    has_comment = true;
                    rest = &rest[pos + open.len()..];
                    open_block = Some(close);
                }
            }
        }

        if has_comment && !has_code {
            result.insert(i);
        }
    }

    result
}

/// Byte index of the first comment that follows code on the line
pub fn first_inline_comment_index(line: &str, style: &CommentStyle) -> Option<usize> {
    style
        .openers()
        .filter_map(|token| {
            let k = line.find(token)?;
            line[..k].chars().any(|c| c != ' ' && c != '\t').then_some(k)
        })
        .min()
}

/// Replace the code part of a line with `…`, keeping indentation and the trailing comment
pub fn mask_code_keep_comment(line: &str, style: &CommentStyle) -> Option<String> {
    let idx = first_inline_comment_index(line, style)?;
    let indent_len = line.len() - line.trim_start_matches([' ', '\t']).len();
    Some(format!(
        "{}{} {}",
        &line[..indent_len],
        MASK,
        line[idx..].trim_end()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const C_STYLE: CommentStyle = CommentStyle {
        line: &["//"],
        block: &[("/*", "*/")],
    };

    const HASH_STYLE: CommentStyle = CommentStyle {
        line: &["#"],
        block: &[],
    };

    #[test]
    fn test_line_comments() {
        let lines = vec!["int a = 1;", "    // note", "int b = 2; // trailing", ""];
        let found = comment_only_lines(&lines, &C_STYLE);
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let lines = vec![
            "x = 1;",
            "  /* start",
            "     middle",
            "  end */",
            "y = 2; /* inline */",
            "/* a */ /* b */",
            "/* c */ z = 3;",
        ];
        let found: Vec<_> = comment_only_lines(&lines, &C_STYLE).into_iter().collect();
        assert_eq!(found, vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_block_closer_followed_by_code() {
        let lines = vec!["/* open", "close */ int k = 0;", "// after"];
        let found: Vec<_> = comment_only_lines(&lines, &C_STYLE).into_iter().collect();
        assert_eq!(found, vec![0, 2]);
    }

    #[test]
    fn test_hash_comments() {
        let lines = vec!["# header", "x = 1  # why", "    #indented"];
        let found: Vec<_> = comment_only_lines(&lines, &HASH_STYLE).into_iter().collect();
        assert_eq!(found, vec![0, 2]);
    }

    #[test]
    fn test_inline_index_requires_code_before() {
        assert_eq!(first_inline_comment_index("    // only", &C_STYLE), None);
        assert_eq!(first_inline_comment_index("a = 1; // c", &C_STYLE), Some(7));
        assert_eq!(first_inline_comment_index("a /* x */ b // y", &C_STYLE), Some(2));
        assert_eq!(first_inline_comment_index("a = 1;", &C_STYLE), None);
    }

    #[test]
    fn test_mask_keeps_indent_and_comment() {
        let masked = mask_code_keep_comment("    int dummy = 0; // inline-omit-me  ", &C_STYLE);
        assert_eq!(masked.as_deref(), Some("    … // inline-omit-me"));
        assert_eq!(mask_code_keep_comment("    int dummy = 0;", &C_STYLE), None);
        assert_eq!(
            mask_code_keep_comment("\tx = 1  # reason", &HASH_STYLE).as_deref(),
            Some("\t… # reason")
        );
    }
}
