//! Syntax Tree Adapter
//!
//! Thin layer over tree-sitter: parses source with a profile's grammar and
//! exposes the node queries the slicer needs (line spans, text, children
//! with field names, ancestors).
//!
//! @module parse

use tree_sitter::{Node, Parser, Tree};

use crate::core::error::{Error, Result};
use crate::lang::LanguageProfile;

// =============================================================================
// PARSED SOURCE
// =============================================================================

/// A parsed source file, borrowing its text
pub struct SyntaxTree<'src> {
    tree: Tree,
    source: &'src str,
}

impl<'src> SyntaxTree<'src> {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Whether the parser produced ERROR or MISSING nodes
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Source text covered by a node
    pub fn text(&self, node: Node<'_>) -> &'src str {
        node_text(node, self.source)
    }
}

/// Parse source text with the profile's grammar
pub fn parse<'src>(source: &'src str, profile: &LanguageProfile) -> Result<SyntaxTree<'src>> {
    let mut parser = Parser::new();
    parser
        .set_language(&profile.grammar())
        .map_err(|e| Error::Parse {
            language: profile.id().to_string(),
            message: e.to_string(),
        })?;

    let tree = parser.parse(source, None).ok_or_else(|| Error::Parse {
        language: profile.id().to_string(),
        message: "parser returned no tree".to_string(),
    })?;

    Ok(SyntaxTree { tree, source })
}

// =============================================================================
// NODE HELPERS
// =============================================================================

/// 0-based inclusive line span
#[inline]
pub fn line_span(node: Node<'_>) -> (usize, usize) {
    (node.start_position().row, node.end_position().row)
}

#[inline]
pub fn covers_line(node: Node<'_>, line: usize) -> bool {
    let (start, end) = line_span(node);
    start <= line && line <= end
}

/// Source text covered by a node (empty if the span is not valid UTF-8)
pub fn node_text<'a>(node: Node<'_>, source: &'a str) -> &'a str {
    source.get(node.start_byte()..node.end_byte()).unwrap_or("")
}

/// Ordered children of a node
pub fn children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

/// Ordered children paired with the grammar field they occupy
pub fn children_with_fields<'t>(node: Node<'t>) -> Vec<(Option<&'static str>, Node<'t>)> {
    let mut out = Vec::with_capacity(node.child_count());
    let mut cursor = node.walk();
    if cursor.goto_first_child() {
        loop {
            out.push((cursor.field_name(), cursor.node()));
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }
    out
}

/// Parent chain, nearest first, excluding the node itself
pub fn ancestors<'t>(node: Node<'t>) -> impl Iterator<Item = Node<'t>> {
    std::iter::successors(node.parent(), |n| n.parent())
}

/// Pre-order traversal with an explicit stack
pub fn preorder<'t>(root: Node<'t>) -> impl Iterator<Item = Node<'t>> {
    let mut stack = vec![root];
    std::iter::from_fn(move || {
        let node = stack.pop()?;
        let mut kids = children(node);
        kids.reverse();
        stack.extend(kids);
        Some(node)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::resolve;

    #[test]
    fn test_parse_python() {
        let source = "def add(a, b):\n    return a + b\n";
        let profile = resolve("x.py").unwrap();
        let tree = parse(source, profile).unwrap();
        let root = tree.root();
        assert_eq!(root.kind(), "module");
        assert!(!tree.has_errors());

        let func = children(root)[0];
        assert_eq!(func.kind(), "function_definition");
        assert_eq!(line_span(func), (0, 1));
        assert!(covers_line(func, 1));
        assert!(!covers_line(func, 2));
        assert!(tree.text(func).starts_with("def add"));
    }

    #[test]
    fn test_fields_and_ancestors() {
        let source = "int main() {\n    int x = 1;\n    return x;\n}\n";
        let profile = resolve("main.cpp").unwrap();
        let tree = parse(source, profile).unwrap();

        let decl = preorder(tree.root())
            .find(|n| n.kind() == "init_declarator")
            .unwrap();
        let fields: Vec<_> = children_with_fields(decl)
            .into_iter()
            .filter_map(|(field, _)| field)
            .collect();
        assert!(fields.contains(&"declarator"));
        assert!(fields.contains(&"value"));

        let kinds: Vec<_> = ancestors(decl).map(|n| n.kind()).collect();
        assert_eq!(kinds.first(), Some(&"declaration"));
        assert!(kinds.contains(&"function_definition"));
        assert_eq!(kinds.last(), Some(&"translation_unit"));
    }

    #[test]
    fn test_preorder_visits_parents_first() {
        let source = "x = 1\ny = 2\n";
        let profile = resolve("a.py").unwrap();
        let tree = parse(source, profile).unwrap();
        let kinds: Vec<_> = preorder(tree.root()).map(|n| n.kind()).collect();
        assert_eq!(kinds[0], "module");
        assert_eq!(kinds[1], "expression_statement");
        assert_eq!(kinds[2], "assignment");
        assert_eq!(kinds.iter().filter(|k| **k == "assignment").count(), 2);
    }

    #[test]
    fn test_parse_errors_reported() {
        let source = "def broken(:\n    return\n";
        let profile = resolve("a.py").unwrap();
        let tree = parse(source, profile).unwrap();
        assert!(tree.has_errors());
    }
}
