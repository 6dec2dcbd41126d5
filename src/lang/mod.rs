//! Language support
//!
//! Language identifiers, per-language node classification profiles and the
//! extension registry used to pick a profile for an input file.
//!
//! @module lang

pub mod profile;
mod profiles;
pub mod registry;

use serde::{Deserialize, Serialize};

pub use profile::{ClosingStyle, CommentStyle, LanguageProfile, LoopBinding, NodeRoles};
pub use registry::{profile_for, resolve, resolve_extension, supported};

/// Languages with a slicing profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    Cpp,
    Java,
    JavaScript,
    TypeScript,
    Python,
    CSharp,
    Go,
    Ruby,
    Php,
    Rust,
}

impl LanguageId {
    /// Every supported language, in registry order
    pub const ALL: [LanguageId; 10] = [
        LanguageId::Cpp,
        LanguageId::Java,
        LanguageId::JavaScript,
        LanguageId::TypeScript,
        LanguageId::Python,
        LanguageId::CSharp,
        LanguageId::Go,
        LanguageId::Ruby,
        LanguageId::Php,
        LanguageId::Rust,
    ];

    /// Get the language name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageId::Cpp => "cpp",
            LanguageId::Java => "java",
            LanguageId::JavaScript => "javascript",
            LanguageId::TypeScript => "typescript",
            LanguageId::Python => "python",
            LanguageId::CSharp => "csharp",
            LanguageId::Go => "go",
            LanguageId::Ruby => "ruby",
            LanguageId::Php => "php",
            LanguageId::Rust => "rust",
        }
    }
}

impl std::fmt::Display for LanguageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
