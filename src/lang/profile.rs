//! Language Profiles
//!
//! Per-language tables that classify syntax-tree node kinds into the
//! semantic roles the slicer works with.
//!
//! @module lang/profile

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::LanguageId;

// =============================================================================
// NODE ROLES
// =============================================================================

bitflags! {
    /// Semantic roles a node kind can hold (several at once)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[repr(transparent)]
    pub struct NodeRoles: u16 {
        /// Function, method, lambda
        const FUNCTION = 0b0000_0000_0001;
        /// Nested scope or body
        const BLOCK = 0b0000_0000_0010;
        /// Statement eligible to trigger backward expansion
        const KEY = 0b0000_0000_0100;
        /// Identifier token
        const IDENT = 0b0000_0000_1000;
        /// Member access (`a.b`, `a::b`, `a->b`)
        const MEMBER = 0b0000_0001_0000;
        /// Assignment (plain or compound)
        const ASSIGN = 0b0000_0010_0000;
        /// Variable declaration
        const DECL = 0b0000_0100_0000;
        /// Call expression
        const CALL = 0b0000_1000_0000;
        /// Loop with an iteration variable
        const LOOP = 0b0001_0000_0000;
        /// Control construct whose header is kept with its body
        const CONTROL = 0b0010_0000_0000;
    }
}

impl Default for NodeRoles {
    fn default() -> Self {
        Self::empty()
    }
}

// =============================================================================
// COMMENTS, LOOPS, CLOSING
// =============================================================================

/// Comment syntax of a language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentStyle {
    /// Line comment prefixes, the first one is used for generated markers
    pub line: &'static [&'static str],
    /// Block comment (open, close) pairs
    pub block: &'static [(&'static str, &'static str)],
}

impl CommentStyle {
    /// Tokens that can open a comment anywhere on a line
    pub fn openers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.line
            .iter()
            .copied()
            .chain(self.block.iter().map(|(open, _)| *open))
    }
}

/// Where a loop's iteration variables live in the syntax tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopBinding {
    /// Fields on the loop node holding bound names
    pub fields: &'static [&'static str],
    /// Nested clause kinds and the field inside them holding bound names
    pub clauses: &'static [(&'static str, &'static str)],
    /// Bound names follow this anonymous token, up to the optional stop token
    pub after_token: Option<(&'static str, Option<&'static str>)>,
}

/// How a function body ends in source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosingStyle {
    /// Closing `}` on the final line
    Brace,
    /// Closing keyword on the final line (`end`)
    Keyword(&'static str),
    /// Indentation only, no closing line
    Indent,
}

impl ClosingStyle {
    /// Whether the final function line is appended after the slice
    pub fn appends_closing_line(&self) -> bool {
        !matches!(self, ClosingStyle::Indent)
    }
}

// =============================================================================
// PROFILE DEFINITION
// =============================================================================

/// Static description of a language, turned into a `LanguageProfile` once
pub struct ProfileSpec {
    pub id: LanguageId,
    pub extensions: &'static [&'static str],
    pub grammar: fn() -> tree_sitter::Language,
    pub function: &'static [&'static str],
    pub block: &'static [&'static str],
    pub key: &'static [&'static str],
    pub ident: &'static [&'static str],
    pub member: &'static [&'static str],
    pub assign: &'static [&'static str],
    pub declaration: &'static [&'static str],
    pub call: &'static [&'static str],
    pub looping: &'static [&'static str],
    pub control: &'static [&'static str],
    pub loop_binding: LoopBinding,
    pub comments: CommentStyle,
    pub closing: ClosingStyle,
}

/// Resolved, read-only classification table for one language
pub struct LanguageProfile {
    id: LanguageId,
    extensions: &'static [&'static str],
    grammar: fn() -> tree_sitter::Language,
    roles: HashMap<&'static str, NodeRoles>,
    loop_binding: LoopBinding,
    comments: CommentStyle,
    closing: ClosingStyle,
}

impl LanguageProfile {
    /// Build the kind -> roles map from a static spec
    pub fn from_spec(spec: &ProfileSpec) -> Self {
        let mut roles: HashMap<&'static str, NodeRoles> = HashMap::new();
        let groups: [(&[&'static str], NodeRoles); 10] = [
            (spec.function, NodeRoles::FUNCTION),
            (spec.block, NodeRoles::BLOCK),
            (spec.key, NodeRoles::KEY),
            (spec.ident, NodeRoles::IDENT),
            (spec.member, NodeRoles::MEMBER),
            (spec.assign, NodeRoles::ASSIGN),
            (spec.declaration, NodeRoles::DECL),
            (spec.call, NodeRoles::CALL),
            (spec.looping, NodeRoles::LOOP),
            (spec.control, NodeRoles::CONTROL),
        ];
        for (kinds, role) in groups {
            for kind in kinds.iter().copied() {
                *roles.entry(kind).or_default() |= role;
            }
        }

        Self {
            id: spec.id,
            extensions: spec.extensions,
            grammar: spec.grammar,
            roles,
            loop_binding: spec.loop_binding,
            comments: spec.comments,
            closing: spec.closing,
        }
    }

    pub fn id(&self) -> LanguageId {
        self.id
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        self.extensions
    }

    /// Tree-sitter grammar for this language
    pub fn grammar(&self) -> tree_sitter::Language {
        (self.grammar)()
    }

    /// All roles held by a node kind (empty for unknown kinds, ERROR and MISSING)
    #[inline]
    pub fn roles(&self, kind: &str) -> NodeRoles {
        self.roles.get(kind).copied().unwrap_or_default()
    }

    #[inline]
    pub fn is(&self, kind: &str, role: NodeRoles) -> bool {
        self.roles(kind).intersects(role)
    }

    pub fn loop_binding(&self) -> &LoopBinding {
        &self.loop_binding
    }

    pub fn comments(&self) -> &CommentStyle {
        &self.comments
    }

    pub fn closing(&self) -> ClosingStyle {
        self.closing
    }

    /// True when the function ends with a closing `}` line
    pub fn closing_is_brace(&self) -> bool {
        self.closing == ClosingStyle::Brace
    }

    /// Token used for generated markers and diagnostics
    pub fn line_comment(&self) -> &'static str {
        self.comments.line.first().copied().unwrap_or("//")
    }
}

impl std::fmt::Debug for LanguageProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageProfile")
            .field("id", &self.id)
            .field("extensions", &self.extensions)
            .field("kinds", &self.roles.len())
            .field("closing", &self.closing)
            .finish()
    }
}
