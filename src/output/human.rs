//! Human-readable output formatting

use super::Located;
use crate::extract::ExtractResult;
use crate::slice::{LineRange, SliceResult};

fn range(r: Option<LineRange>) -> String {
    match r {
        Some((start, end)) => format!("{}-{}", start, end),
        None => "-".to_string(),
    }
}

/// Slice text; several results are separated by `==> location <==` banners
pub fn format_slices(items: &[Located<SliceResult>]) -> String {
    if let [single] = items {
        return format!("{}\n", single.result.text);
    }

    let mut output = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("==> {} <==\n", item.location));
        output.push_str(&item.result.text);
        output.push('\n');
    }
    output
}

/// One-line summary of a slice, printed to stderr
pub fn slice_meta_line(item: &Located<SliceResult>) -> String {
    let meta = &item.result.meta;
    let blocks = meta
        .blocks
        .as_ref()
        .map(|b| {
            b.iter()
                .map(|&r| range(Some(r)))
                .collect::<Vec<_>>()
                .join(",")
        })
        .unwrap_or_default();

    format!(
        "META: {} language={} function={} header={} target={} blocks=[{}] outcome={}",
        item.location,
        meta.language.map(|l| l.as_str()).unwrap_or("-"),
        range(meta.function_lines),
        range(meta.header_lines),
        meta.target_line,
        blocks,
        item.result.outcome
    )
}

pub fn format_extract(item: &Located<ExtractResult>) -> String {
    format!("{}\n", item.result.text)
}

/// One-line summary of an extraction, printed to stderr
pub fn extract_meta_line(item: &Located<ExtractResult>) -> String {
    let meta = &item.result.meta;
    format!(
        "META: {} language={} function={} target={} relative={} outcome={}",
        item.location,
        meta.language.map(|l| l.as_str()).unwrap_or("-"),
        range(meta.function_lines),
        meta.target_line,
        meta.relative_line
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string()),
        item.result.outcome
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::{slice_function, SliceOptions};

    fn located(location: &str, source: &str, line: i64) -> Located<SliceResult> {
        Located {
            location: location.to_string(),
            result: slice_function(source, location, line, &SliceOptions::default()),
        }
    }

    #[test]
    fn test_single_slice_is_bare_text() {
        let item = located("f.py", "def f(a):\n    return a\n", 2);
        assert_eq!(format_slices(&[item]), "def f(a):\n    return a\n");
    }

    #[test]
    fn test_multiple_slices_get_banners() {
        let items = vec![
            located("a.py", "def f(a):\n    return a\n", 2),
            located("b.py", "", 1),
        ];
        let output = format_slices(&items);
        assert!(output.starts_with("==> a.py <==\n"));
        assert!(output.contains("\n\n==> b.py <==\n# Empty source.\n"));
    }

    #[test]
    fn test_meta_line() {
        let item = located("f.py", "def f(a):\n    return a\n", 2);
        assert_eq!(
            slice_meta_line(&item),
            "META: f.py language=python function=1-2 header=1-1 target=2 blocks=[2-2] outcome=sliced"
        );
    }
}
