//! Identifier Classifier
//!
//! Splits the identifiers referenced by a subtree into reads and writes.
//! This is a textual heuristic: names are compared by exact text with no
//! scope resolution, and anything not recognised as a write counts as a read.
//!
//! @module slice/identifiers

use std::collections::BTreeSet;
use std::ops::ControlFlow;
use tree_sitter::Node;

use crate::lang::{LanguageProfile, NodeRoles};
use crate::parse::{children, children_with_fields, node_text};

/// Identifiers of a subtree split by role
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadWrite {
    pub reads: BTreeSet<String>,
    pub writes: BTreeSet<String>,
}

impl ReadWrite {
    /// reads ∪ writes
    pub fn all(&self) -> BTreeSet<String> {
        self.reads.union(&self.writes).cloned().collect()
    }

    pub fn merge(&mut self, other: ReadWrite) {
        self.reads.extend(other.reads);
        self.writes.extend(other.writes);
    }
}

// =============================================================================
// COLLECTION
// =============================================================================

/// Visit every identifier name in a subtree until `visit` breaks
///
/// Member expressions also yield their direct name-like leaves, so `a.b`
/// contributes `a` and `b` individually.
fn walk_identifiers<'s>(
    root: Node<'_>,
    source: &'s str,
    profile: &LanguageProfile,
    mut visit: impl FnMut(&'s str) -> ControlFlow<()>,
) -> ControlFlow<()> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        let roles = profile.roles(node.kind());
        if roles.contains(NodeRoles::IDENT) {
            visit(node_text(node, source))?;
        } else if roles.contains(NodeRoles::MEMBER) {
            for child in children(node) {
                if is_name_leaf(child, profile) {
                    visit(node_text(child, source))?;
                }
            }
        }
        stack.extend(children(node));
    }
    ControlFlow::Continue(())
}

fn is_name_leaf(node: Node<'_>, profile: &LanguageProfile) -> bool {
    if profile.is(node.kind(), NodeRoles::IDENT) {
        return false; // visited on its own
    }
    node.is_named()
        && node.child_count() == 0
        && (node.kind().ends_with("identifier") || node.kind() == "name")
}

/// All identifier names in a subtree
pub fn collect_identifiers(
    root: Node<'_>,
    source: &str,
    profile: &LanguageProfile,
) -> BTreeSet<String> {
    let mut ids = BTreeSet::new();
    let _ = walk_identifiers(root, source, profile, |name| {
        if !name.is_empty() {
            ids.insert(name.to_string());
        }
        ControlFlow::Continue(())
    });
    ids
}

/// Whether a subtree references any identifier in `ids`
pub fn references_any(
    root: Node<'_>,
    source: &str,
    profile: &LanguageProfile,
    ids: &BTreeSet<String>,
) -> bool {
    if ids.is_empty() {
        return false;
    }
    walk_identifiers(root, source, profile, |name| {
        if ids.contains(name) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
    .is_break()
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Split the identifiers of a subtree into reads and writes
///
/// - assignment with at least three children: first child writes, last child reads
/// - declaration: bound names write, initializer reads
/// - call: everything reads
/// - loop: iteration variables write, the rest of the loop reads
/// - anything left unclassified reads
pub fn classify(root: Node<'_>, source: &str, profile: &LanguageProfile) -> ReadWrite {
    let mut rw = ReadWrite::default();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        let roles = profile.roles(node.kind());

        if roles.contains(NodeRoles::ASSIGN) {
            let kids = children(node);
            match (kids.first(), kids.last()) {
                (Some(lhs), Some(rhs)) if kids.len() >= 3 => {
                    rw.writes.extend(collect_identifiers(*lhs, source, profile));
                    rw.reads.extend(collect_identifiers(*rhs, source, profile));
                }
                _ => rw.reads.extend(collect_identifiers(node, source, profile)),
            }
        } else if roles.contains(NodeRoles::DECL) {
            classify_declaration(node, source, profile, &mut rw);
        } else if roles.contains(NodeRoles::CALL) {
            rw.reads.extend(collect_identifiers(node, source, profile));
        } else if roles.contains(NodeRoles::LOOP) {
            rw.writes.extend(loop_bindings(node, source, profile));
            let all = collect_identifiers(node, source, profile);
            rw.reads.extend(all.difference(&rw.writes).cloned().collect::<Vec<_>>());
        }

        stack.extend(children(node));
    }

    let raw = collect_identifiers(root, source, profile);
    let unclassified: Vec<String> = raw.difference(&rw.writes).cloned().collect();
    rw.reads.extend(unclassified);
    rw
}

fn classify_declaration(
    node: Node<'_>,
    source: &str,
    profile: &LanguageProfile,
    rw: &mut ReadWrite,
) {
    let mut after_assign = false;
    for (field, child) in children_with_fields(node) {
        if !child.is_named() {
            if matches!(child.kind(), "=" | ":=") {
                after_assign = true;
            }
            continue;
        }

        let is_initializer = after_assign
            || matches!(field, Some("value" | "right" | "default_value"))
            || child.kind() == "equals_value_clause";

        if is_initializer {
            rw.reads.extend(collect_identifiers(child, source, profile));
        } else if profile.is(child.kind(), NodeRoles::DECL) || field == Some("type") {
            // nested declarators are classified on their own visit
            continue;
        } else {
            rw.writes.extend(collect_identifiers(child, source, profile));
        }
    }
}

/// Names bound by a loop header, located through the profile's binding description
fn loop_bindings(node: Node<'_>, source: &str, profile: &LanguageProfile) -> BTreeSet<String> {
    let binding = profile.loop_binding();
    let mut bound = BTreeSet::new();

    for field in binding.fields {
        let mut cursor = node.walk();
        for child in node.children_by_field_name(field, &mut cursor) {
            bound.extend(bound_names(child, source, profile));
        }
    }

    for (clause_kind, field) in binding.clauses {
        for clause in children(node).into_iter().filter(|c| c.kind() == *clause_kind) {
            let mut cursor = clause.walk();
            for child in clause.children_by_field_name(field, &mut cursor) {
                bound.extend(bound_names(child, source, profile));
            }
        }
    }

    if let Some((token, stop)) = binding.after_token {
        let mut active = false;
        for child in children(node) {
            if !child.is_named() && child.kind() == token {
                active = true;
                continue;
            }
            if !active {
                continue;
            }
            if stop.is_some_and(|s| child.kind() == s) {
                break;
            }
            bound.extend(collect_identifiers(child, source, profile));
        }
    }

    bound
}

/// Writes of a binding subtree, or every name in it when it has no explicit write
fn bound_names(node: Node<'_>, source: &str, profile: &LanguageProfile) -> BTreeSet<String> {
    let inner = classify(node, source, profile);
    if inner.writes.is_empty() {
        collect_identifiers(node, source, profile)
    } else {
        inner.writes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::resolve;
    use crate::parse::{parse, preorder};

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn classify_first(source: &str, filename: &str, kind: &str) -> ReadWrite {
        let profile = resolve(filename).unwrap();
        let tree = parse(source, profile).unwrap();
        let node = preorder(tree.root())
            .find(|n| n.kind() == kind)
            .unwrap_or_else(|| panic!("no {} node", kind));
        classify(node, source, profile)
    }

    #[test]
    fn test_assignment_splits_sides() {
        let rw = classify_first("x = y + z\n", "a.py", "assignment");
        assert_eq!(rw.writes, set(&["x"]));
        assert_eq!(rw.reads, set(&["y", "z"]));
    }

    #[test]
    fn test_augmented_assignment_writes_target() {
        let rw = classify_first("total += v\n", "a.py", "augmented_assignment");
        assert_eq!(rw.writes, set(&["total"]));
        assert!(rw.reads.contains("v"));
    }

    #[test]
    fn test_cpp_declaration_initializer_reads() {
        let source = "void f() { int s = a + b; }\n";
        let rw = classify_first(source, "f.cpp", "declaration");
        assert_eq!(rw.writes, set(&["s"]));
        assert_eq!(rw.reads, set(&["a", "b"]));
    }

    #[test]
    fn test_js_member_expression_splits_names() {
        let source = "function f() { let x = b.c; }\n";
        let rw = classify_first(source, "f.js", "lexical_declaration");
        assert_eq!(rw.writes, set(&["x"]));
        assert_eq!(rw.reads, set(&["b", "c"]));
    }

    #[test]
    fn test_call_reads_callee_and_arguments() {
        let rw = classify_first("log_line(msg, level)\n", "a.py", "call");
        assert!(rw.writes.is_empty());
        assert_eq!(rw.reads, set(&["level", "log_line", "msg"]));
    }

    #[test]
    fn test_python_loop_variable_is_write() {
        let source = "for v in values:\n    total += v\n";
        let rw = classify_first(source, "a.py", "for_statement");
        assert!(rw.writes.contains("v"));
        assert!(rw.writes.contains("total"));
        assert!(rw.reads.contains("values"));
    }

    #[test]
    fn test_java_enhanced_for_binding() {
        let source = "class A { int f(int[] xs) { int s = 0; for (int x : xs) { s += x; } return s; } }\n";
        let rw = classify_first(source, "A.java", "enhanced_for_statement");
        assert!(rw.writes.contains("x"));
        assert!(rw.reads.contains("xs"));
        assert!(!rw.writes.contains("xs"));
    }

    #[test]
    fn test_cpp_range_for_binding() {
        let source = "int f(const V& v) { int s = 0; for (auto& x : v) { s += x; } return s; }\n";
        let rw = classify_first(source, "f.cpp", "for_range_loop");
        assert!(rw.writes.contains("x"));
        assert!(rw.reads.contains("v"));
    }

    #[test]
    fn test_go_range_clause_binding() {
        let source = "package m\nfunc f(xs []int) int {\n\ts := 0\n\tfor _, x := range xs {\n\t\ts += x\n\t}\n\treturn s\n}\n";
        let rw = classify_first(source, "m.go", "for_statement");
        assert!(rw.writes.contains("x"));
        assert!(rw.reads.contains("xs"));
    }

    #[test]
    fn test_php_foreach_binding_after_as() {
        let source = "<?php\nfunction f($items) {\n    foreach ($items as $item) {\n        echo $item;\n    }\n}\n";
        let rw = classify_first(source, "f.php", "foreach_statement");
        assert!(rw.writes.contains("$item"));
        assert!(rw.reads.contains("$items"));
    }

    #[test]
    fn test_references_any() {
        let source = "x = y + z\n";
        let profile = resolve("a.py").unwrap();
        let tree = parse(source, profile).unwrap();
        assert!(references_any(tree.root(), source, profile, &set(&["z"])));
        assert!(!references_any(tree.root(), source, profile, &set(&["w"])));
        assert!(!references_any(tree.root(), source, profile, &BTreeSet::new()));
    }
}
