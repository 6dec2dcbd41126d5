//! Output Assembler
//!
//! Turns the relevant-line set into the final text: header, kept blocks,
//! omission markers with masked inline comments, closing line, dedent.
//!
//! @module slice/assemble

use std::collections::BTreeSet;

use super::comments::mask_code_keep_comment;
use super::types::{LineRange, RelevantLines};
use crate::lang::LanguageProfile;

/// Rendered slice plus the line bookkeeping needed for metadata (0-based)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub lines: Vec<String>,
    pub header: LineRange,
    pub blocks: Vec<LineRange>,
}

impl Assembly {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// What the assembler needs besides the lines themselves
pub struct AssembleInput<'a> {
    pub function: LineRange,
    pub relevant: &'a RelevantLines,
    pub comment_lines: &'a BTreeSet<usize>,
    pub line_comment: &'a str,
    pub preserve_inline_comments: bool,
}

/// Merge sorted line indices into maximal contiguous inclusive ranges
pub fn merge_blocks(relevant: &RelevantLines) -> Vec<LineRange> {
    let mut blocks: Vec<LineRange> = Vec::new();
    for &line in relevant {
        match blocks.last_mut() {
            Some((_, end)) if *end + 1 == line => *end = line,
            _ => blocks.push((line, line)),
        }
    }
    blocks
}

/// Header range of a function and the first line after it
///
/// Brace languages take every line up to and including the first one
/// holding `{`; the whole function when there is none. Other languages
/// take the declaration line only.
pub fn collect_header(
    lines: &[&str],
    function: LineRange,
    profile: &LanguageProfile,
) -> (LineRange, usize) {
    let (f_start, f_end) = function;
    if !profile.closing_is_brace() {
        return ((f_start, f_start), f_start + 1);
    }
    let end = (f_start..=f_end)
        .find(|&i| lines.get(i).is_some_and(|l| l.contains('{')))
        .unwrap_or(f_end);
    ((f_start, end), end + 1)
}

/// Strip the smallest run of leading spaces shared by all non-blank lines
pub fn dedent_minimum(lines: Vec<String>) -> Vec<String> {
    let min_lead = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start_matches(' ').len())
        .min()
        .unwrap_or(0);
    if min_lead == 0 {
        return lines;
    }
    let prefix = " ".repeat(min_lead);
    lines
        .into_iter()
        .map(|l| match l.strip_prefix(prefix.as_str()) {
            Some(rest) => rest.to_string(),
            None => l,
        })
        .collect()
}

struct Emitter<'a> {
    lines: &'a [&'a str],
    profile: &'a LanguageProfile,
    input: &'a AssembleInput<'a>,
    out: Vec<String>,
}

impl Emitter<'_> {
    /// Marker plus masked inline comments for the omitted range `[lo, hi)`
    fn gap(&mut self, lo: usize, hi: usize) {
        if lo >= hi {
            return;
        }
        let skipped = &self.lines[lo..hi];
        if skipped.iter().all(|l| l.trim().is_empty()) {
            return;
        }
        self.out
            .push(format!("{} ... omitted ...", self.input.line_comment));
        if self.input.preserve_inline_comments {
            for line in skipped {
                if let Some(masked) = mask_code_keep_comment(line, self.profile.comments()) {
                    self.out.push(masked);
                }
            }
        }
    }

    fn keep(&mut self, start: usize, end: usize) {
        for i in start..=end {
            let line = self.lines[i];
            if !line.trim().is_empty() || self.input.comment_lines.contains(&i) {
                self.out.push(line.to_string());
            }
        }
    }
}

/// Render the slice of one function
pub fn assemble(lines: &[&str], profile: &LanguageProfile, input: &AssembleInput<'_>) -> Assembly {
    let (f_start, f_end) = input.function;
    let (header, mut cursor) = collect_header(lines, input.function, profile);

    // The closing line is appended separately and never re-emitted by a block
    let closing = profile.closing().appends_closing_line() && f_end >= cursor;
    let body_end = if closing { f_end } else { f_end + 1 };

    let mut emitter = Emitter {
        lines,
        profile,
        input,
        out: lines[header.0..=header.1]
            .iter()
            .map(|l| l.to_string())
            .collect(),
    };

    let blocks = merge_blocks(input.relevant);
    for &(start, end) in &blocks {
        let start = start.max(cursor);
        let end = end.min(body_end.saturating_sub(1));
        if start > end || start >= body_end {
            continue;
        }
        emitter.gap(cursor, start);
        emitter.keep(start, end);
        cursor = end + 1;
    }
    emitter.gap(cursor, body_end);

    if closing {
        emitter.out.push(lines[f_end].to_string());
    }

    Assembly {
        lines: dedent_minimum(emitter.out),
        header,
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::resolve;

    #[test]
    fn test_merge_blocks() {
        let relevant: RelevantLines = [1, 2, 3, 5, 8, 9].into_iter().collect();
        assert_eq!(merge_blocks(&relevant), vec![(1, 3), (5, 5), (8, 9)]);
        assert!(merge_blocks(&RelevantLines::new()).is_empty());
    }

    #[test]
    fn test_brace_header_spans_until_open_brace() {
        let profile = resolve("a.cpp").unwrap();
        let lines = vec!["int add(int a,", "        int b)", "{", "  return a + b;", "}"];
        assert_eq!(collect_header(&lines, (0, 4), profile), ((0, 2), 3));
    }

    #[test]
    fn test_header_without_brace_is_whole_function() {
        let profile = resolve("a.js").unwrap();
        let lines = vec!["const f = (x) =>", "  x + 1;"];
        assert_eq!(collect_header(&lines, (0, 1), profile), ((0, 1), 2));
    }

    #[test]
    fn test_indent_header_is_declaration_line() {
        let profile = resolve("a.py").unwrap();
        let lines = vec!["def f(a):", "    return a"];
        assert_eq!(collect_header(&lines, (0, 1), profile), ((0, 0), 1));
    }

    #[test]
    fn test_dedent_minimum() {
        let lines = vec![
            "    a".to_string(),
            "".to_string(),
            "      b".to_string(),
            "\tc".to_string(),
        ];
        assert_eq!(dedent_minimum(lines.clone()), lines);

        let lines = vec!["    a".to_string(), "      b".to_string(), "  ".to_string()];
        assert_eq!(dedent_minimum(lines), vec!["a", "  b", "  "]);
    }

    #[test]
    fn test_assemble_inserts_marker_and_masks() {
        let profile = resolve("a.cpp").unwrap();
        let lines = vec![
            "int f() {",
            "    int a = 1;",
            "    int b = 2; // why b",
            "",
            "    return a;",
            "}",
        ];
        let relevant: RelevantLines = [1, 4].into_iter().collect();
        let comments = BTreeSet::new();
        let input = AssembleInput {
            function: (0, 5),
            relevant: &relevant,
            comment_lines: &comments,
            line_comment: "//",
            preserve_inline_comments: true,
        };
        let assembly = assemble(&lines, profile, &input);
        assert_eq!(
            assembly.lines,
            vec![
                "int f() {",
                "    int a = 1;",
                "// ... omitted ...",
                "    … // why b",
                "    return a;",
                "}",
            ]
        );
        assert_eq!(assembly.header, (0, 0));
        assert_eq!(assembly.blocks, vec![(1, 1), (4, 4)]);
    }

    #[test]
    fn test_blank_gap_has_no_marker() {
        let profile = resolve("a.py").unwrap();
        let lines = vec!["def f():", "    x = 1", "", "    return x"];
        let relevant: RelevantLines = [1, 3].into_iter().collect();
        let comments = BTreeSet::new();
        let input = AssembleInput {
            function: (0, 3),
            relevant: &relevant,
            comment_lines: &comments,
            line_comment: "#",
            preserve_inline_comments: true,
        };
        let assembly = assemble(&lines, profile, &input);
        assert_eq!(assembly.text(), "def f():\n    x = 1\n    return x");
    }

    #[test]
    fn test_indent_trailing_gap_reaches_last_line() {
        let profile = resolve("a.py").unwrap();
        let lines = vec!["def f():", "    x = 1", "    y = 2"];
        let relevant: RelevantLines = [1].into_iter().collect();
        let comments = BTreeSet::new();
        let input = AssembleInput {
            function: (0, 2),
            relevant: &relevant,
            comment_lines: &comments,
            line_comment: "#",
            preserve_inline_comments: false,
        };
        let assembly = assemble(&lines, profile, &input);
        assert_eq!(assembly.lines.last().map(String::as_str), Some("# ... omitted ..."));
    }

    #[test]
    fn test_single_line_function_not_closed_twice() {
        let profile = resolve("a.cpp").unwrap();
        let lines = vec!["int one() { return 1; }"];
        let relevant: RelevantLines = [0].into_iter().collect();
        let comments = BTreeSet::new();
        let input = AssembleInput {
            function: (0, 0),
            relevant: &relevant,
            comment_lines: &comments,
            line_comment: "//",
            preserve_inline_comments: true,
        };
        let assembly = assemble(&lines, profile, &input);
        assert_eq!(assembly.lines, vec!["int one() { return 1; }"]);
    }
}
