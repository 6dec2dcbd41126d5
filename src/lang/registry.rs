//! Language Registry
//!
//! Extension -> profile lookup, built once and read-only afterwards.
//!
//! @module lang/registry

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

use super::profile::LanguageProfile;
use super::{profiles, LanguageId};
use crate::core::error::{Error, Result};

struct Registry {
    profiles: HashMap<LanguageId, LanguageProfile>,
    by_extension: HashMap<&'static str, LanguageId>,
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let mut table = HashMap::new();
    let mut by_extension = HashMap::new();
    for spec in profiles::builtin() {
        for ext in spec.extensions.iter().copied() {
            by_extension.insert(ext, spec.id);
        }
        table.insert(spec.id, LanguageProfile::from_spec(spec));
    }
    Registry {
        profiles: table,
        by_extension,
    }
});

/// Resolve the profile for a filename hint (path, bare name or URL path)
pub fn resolve(filename: &str) -> Result<&'static LanguageProfile> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    resolve_extension(ext)
}

/// Resolve the profile for an extension, with or without a leading dot
pub fn resolve_extension(extension: &str) -> Result<&'static LanguageProfile> {
    let ext = extension.trim_start_matches('.').to_lowercase();
    REGISTRY
        .by_extension
        .get(ext.as_str())
        .and_then(|id| REGISTRY.profiles.get(id))
        .ok_or_else(|| Error::UnsupportedLanguage {
            extension: if ext.is_empty() {
                "(none)".to_string()
            } else {
                format!(".{}", ext)
            },
        })
}

/// Profile for a known language
pub fn profile_for(id: LanguageId) -> Option<&'static LanguageProfile> {
    REGISTRY.profiles.get(&id)
}

/// All profiles, in `LanguageId::ALL` order
pub fn supported() -> impl Iterator<Item = &'static LanguageProfile> {
    LanguageId::ALL
        .into_iter()
        .filter_map(|id| REGISTRY.profiles.get(&id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_detection() {
        assert_eq!(resolve("foo.cpp").unwrap().id(), LanguageId::Cpp);
        assert_eq!(resolve("foo.h").unwrap().id(), LanguageId::Cpp);
        assert_eq!(resolve("src/Main.java").unwrap().id(), LanguageId::Java);
        assert_eq!(resolve("app.mjs").unwrap().id(), LanguageId::JavaScript);
        assert_eq!(resolve("app.ts").unwrap().id(), LanguageId::TypeScript);
        assert_eq!(resolve("tool.py").unwrap().id(), LanguageId::Python);
        assert_eq!(resolve("Program.cs").unwrap().id(), LanguageId::CSharp);
        assert_eq!(resolve("main.go").unwrap().id(), LanguageId::Go);
        assert_eq!(resolve("task.rb").unwrap().id(), LanguageId::Ruby);
        assert_eq!(resolve("index.php").unwrap().id(), LanguageId::Php);
        assert_eq!(resolve("lib.rs").unwrap().id(), LanguageId::Rust);
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(resolve("MAIN.CPP").unwrap().id(), LanguageId::Cpp);
        assert_eq!(resolve_extension(".Py").unwrap().id(), LanguageId::Python);
    }

    #[test]
    fn test_unknown_extension_is_an_error() {
        match resolve("notes.xyz") {
            Err(Error::UnsupportedLanguage { extension }) => assert_eq!(extension, ".xyz"),
            other => panic!("unexpected: {:?}", other.map(|p| p.id())),
        }
        assert!(matches!(
            resolve("Makefile"),
            Err(Error::UnsupportedLanguage { .. })
        ));
    }

    #[test]
    fn test_every_language_registered() {
        let ids: Vec<_> = supported().map(|p| p.id()).collect();
        assert_eq!(ids, LanguageId::ALL.to_vec());
        for profile in supported() {
            assert!(!profile.extensions().is_empty());
        }
    }

    #[test]
    fn test_grammars_load() {
        for profile in supported() {
            let mut parser = tree_sitter::Parser::new();
            assert!(
                parser.set_language(&profile.grammar()).is_ok(),
                "grammar for {} failed to load",
                profile.id()
            );
        }
    }
}
