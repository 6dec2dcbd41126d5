//! Backward Slicer
//!
//! Bounded fixed-point expansion: starting from the identifiers of the
//! target statement, repeatedly marks key statements in the enclosing
//! blocks that mention not-yet-expanded identifiers, and feeds their own
//! reads and writes back into the frontier.
//!
//! Termination comes from `max_backward_depth`; a true fixed point is not
//! guaranteed within that bound.
//!
//! @module slice/backward

use std::collections::{BTreeSet, HashSet};
use tracing::debug;
use tree_sitter::Node;

use super::identifiers::{classify, references_any, ReadWrite};
use super::types::{RelevantLines, SliceOptions};
use crate::lang::{LanguageProfile, NodeRoles};
use crate::parse::{ancestors, children, line_span, preorder};

/// Outcome of the identifier-driven phase
#[derive(Debug, Clone, Default)]
pub struct BackwardSlice {
    /// Identifiers of the target statement itself
    pub seed: ReadWrite,
    /// Frontier after the last pass (seed included)
    pub reads: BTreeSet<String>,
    pub writes: BTreeSet<String>,
    pub relevant: RelevantLines,
    /// Passes actually run
    pub passes: usize,
}

fn mark_span(relevant: &mut RelevantLines, node: Node<'_>) {
    let (start, end) = line_span(node);
    relevant.extend(start..=end);
}

/// Run the backward slice from `target` inside `function`
pub fn backward_slice(
    target: Node<'_>,
    function: Node<'_>,
    source: &str,
    profile: &LanguageProfile,
    options: &SliceOptions,
) -> BackwardSlice {
    let seed = classify(target, source, profile);

    let mut relevant = RelevantLines::new();
    mark_span(&mut relevant, target);

    // Candidate scan regions, innermost first, bounded by the function
    let scope = NodeRoles::BLOCK | NodeRoles::FUNCTION;
    let mut regions = Vec::new();
    for node in std::iter::once(target).chain(ancestors(target)) {
        if profile.is(node.kind(), scope) {
            regions.push(node);
        }
        if node.id() == function.id() {
            break;
        }
    }

    let mut frontier_reads = seed.reads.clone();
    let mut frontier_writes = seed.writes.clone();
    let mut seen_reads: BTreeSet<String> = BTreeSet::new();
    let mut seen_writes: BTreeSet<String> = BTreeSet::new();

    let mut passes = 0;
    while passes < options.max_backward_depth {
        let current: BTreeSet<String> = frontier_reads
            .difference(&seen_reads)
            .chain(frontier_writes.difference(&seen_writes))
            .cloned()
            .collect();
        if current.is_empty() {
            break;
        }

        let mut discovered = ReadWrite::default();
        let mut matched: HashSet<usize> = HashSet::new();

        for region in &regions {
            for node in preorder(*region) {
                if !profile.is(node.kind(), NodeRoles::KEY) || matched.contains(&node.id()) {
                    continue;
                }
                if !references_any(node, source, profile, &current) {
                    continue;
                }
                matched.insert(node.id());
                mark_span(&mut relevant, node);
                discovered.merge(classify(node, source, profile));
                if options.include_control_headers {
                    promote_control_ancestors(node, profile, &mut relevant);
                }
            }
        }

        seen_reads.extend(frontier_reads.iter().cloned());
        seen_writes.extend(frontier_writes.iter().cloned());
        frontier_reads.extend(discovered.reads);
        frontier_writes.extend(discovered.writes);
        passes += 1;

        debug!(
            pass = passes,
            current = current.len(),
            matched = matched.len(),
            relevant = relevant.len(),
            "backward slice pass"
        );

        if matched.is_empty() {
            break;
        }
    }

    BackwardSlice {
        seed,
        reads: frontier_reads,
        writes: frontier_writes,
        relevant,
        passes,
    }
}

/// Mark the control constructs wrapping a matched statement
///
/// Walks up to the first function-like ancestor. Every control ancestor
/// has its whole span marked; the parent of the first block ancestor is
/// marked too when it is a control construct.
pub fn promote_control_ancestors(
    node: Node<'_>,
    profile: &LanguageProfile,
    relevant: &mut RelevantLines,
) {
    let mut seen_first_block = false;
    for ancestor in ancestors(node) {
        let roles = profile.roles(ancestor.kind());
        if roles.contains(NodeRoles::FUNCTION) {
            break;
        }
        if roles.contains(NodeRoles::CONTROL) {
            mark_span(relevant, ancestor);
        }
        if roles.contains(NodeRoles::BLOCK) && !seen_first_block {
            seen_first_block = true;
            if let Some(parent) = ancestor.parent() {
                if profile.is(parent.kind(), NodeRoles::CONTROL) {
                    mark_span(relevant, parent);
                }
            }
        }
    }
}

/// Add the header line of every control construct whose body holds a relevant line
///
/// The body is the first block-like child, else the earliest child that
/// ends below the construct's first line.
pub fn ensure_control_headers(
    function: Node<'_>,
    profile: &LanguageProfile,
    relevant: &mut RelevantLines,
) {
    for node in preorder(function) {
        if !profile.is(node.kind(), NodeRoles::CONTROL) {
            continue;
        }
        let (header, _) = line_span(node);
        let kids = children(node);
        let body = kids
            .iter()
            .find(|c| profile.is(c.kind(), NodeRoles::BLOCK))
            .or_else(|| {
                kids.iter()
                    .filter(|c| line_span(**c).1 > header)
                    .min_by_key(|c| line_span(**c).0)
            });

        if let Some(body) = body {
            let (start, end) = line_span(*body);
            if relevant.range(start..=end).next().is_some() {
                relevant.insert(header);
            }
        }
    }
}
