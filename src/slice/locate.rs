//! Function & Target Locator
//!
//! @module slice/locate

use tree_sitter::Node;

use crate::lang::{LanguageProfile, NodeRoles};
use crate::parse::{children, covers_line, line_span};

/// Outermost function-like node whose span contains `line` (0-based)
///
/// Pre-order: a matching node is returned without looking inside it, so a
/// function nested in another function resolves to the outer one.
pub fn find_enclosing_function<'t>(
    root: Node<'t>,
    line: usize,
    profile: &LanguageProfile,
) -> Option<Node<'t>> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if !covers_line(node, line) {
            continue;
        }
        if profile.is(node.kind(), NodeRoles::FUNCTION) {
            return Some(node);
        }
        let mut kids = children(node);
        kids.reverse();
        stack.extend(kids);
    }
    None
}

/// Deepest node covering `line`, descending through the first covering child
pub fn find_target_node(node: Node<'_>, line: usize) -> Option<Node<'_>> {
    if !covers_line(node, line) {
        return None;
    }
    let mut current = node;
    'descend: loop {
        for child in children(current) {
            if covers_line(child, line) {
                current = child;
                continue 'descend;
            }
        }
        return Some(current);
    }
}

/// Nearest key statement at or above `target`, bounded by `function`
///
/// Falls back to `target` itself when no key statement encloses it.
pub fn find_target_statement<'t>(
    target: Node<'t>,
    function: Node<'t>,
    profile: &LanguageProfile,
) -> Node<'t> {
    let mut node = target;
    loop {
        if profile.is(node.kind(), NodeRoles::KEY) {
            return node;
        }
        if node.id() == function.id() {
            return target;
        }
        match node.parent() {
            Some(parent) => node = parent,
            None => return target,
        }
    }
}

/// Climb from a single-line node to the nearest ancestor spanning several lines
pub fn climb_to_multiline(node: Node<'_>) -> Option<Node<'_>> {
    let mut current = Some(node);
    while let Some(n) = current {
        let (start, end) = line_span(n);
        if end > start {
            return Some(n);
        }
        current = n.parent();
    }
    None
}
