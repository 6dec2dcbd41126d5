//! Languages command implementation
//!
//! @module cli/languages

use clap::Args;
use serde::Serialize;

use crate::core::error::Result;
use crate::lang::{self, LanguageId};
use crate::output::{json, OutputFormat};

/// Arguments for the languages command
#[derive(Args, Debug)]
pub struct LanguagesArgs {
    /// JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct LanguageEntry {
    pub language: LanguageId,
    pub extensions: Vec<&'static str>,
    pub line_comment: &'static str,
}

/// Supported languages in registry order
pub fn entries() -> Vec<LanguageEntry> {
    lang::supported()
        .map(|profile| LanguageEntry {
            language: profile.id(),
            extensions: profile.extensions().to_vec(),
            line_comment: profile.line_comment(),
        })
        .collect()
}

/// Run the languages command
pub fn run(args: LanguagesArgs) -> Result<()> {
    let entries = entries();
    match OutputFormat::from_json_flag(args.json) {
        OutputFormat::Json => println!("{}", json::format_many(&entries)),
        OutputFormat::Human => {
            for entry in &entries {
                println!(
                    "{:<12} {:<4} {}",
                    entry.language.as_str(),
                    entry.line_comment,
                    entry.extensions.join(", ")
                );
            }
        }
    }
    Ok(())
}
