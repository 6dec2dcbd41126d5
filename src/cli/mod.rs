//! CLI command definitions and handlers

pub mod extract;
pub mod languages;
pub mod serve;
pub mod slice;

use clap::{Parser, Subcommand};
use regex::Regex;

use crate::core::error::{Error, Result};

const LONG_ABOUT: &str = r#"
Compress the function around a source line down to the statements that
line depends on, or extract the whole function verbatim.

QUICK START:
    funcslice slice src/app.py:42       Slice the function around line 42
    funcslice extract src/app.py:42     Print the whole enclosing function
    funcslice serve                     Expose both over HTTP

LOCATIONS:
    A location is <path-or-url>:<line>. URLs may be file://, http:// or
    https://; GitHub blob URLs are rewritten to their raw content URL.

CONFIGURATION:
    Defaults are read from $FUNCSLICE_HOME/config.toml (or the platform
    data directory). Command-line flags override the file.

LOGGING:
    FUNCSLICE_LOG=debug funcslice slice src/app.py:42
"#;

/// Function slicing for compact code context
#[derive(Parser, Debug)]
#[command(name = "funcslice")]
#[command(author, version)]
#[command(about = "Function slicing for compact code context")]
#[command(long_about = LONG_ABOUT)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Slice the enclosing function down to the lines a target line depends on
    #[command(visible_alias = "s")]
    Slice(slice::SliceArgs),

    /// Print the whole function enclosing a line
    #[command(visible_alias = "x")]
    Extract(extract::ExtractArgs),

    /// Serve extraction and slicing over HTTP
    Serve(serve::ServeArgs),

    /// List supported languages and file extensions
    Languages(languages::LanguagesArgs),
}

/// Split `<path-or-url>:<line>` into its parts
pub fn parse_location(location: &str) -> Result<(String, i64)> {
    let invalid = || Error::InvalidLocation {
        location: location.to_string(),
    };
    let line_re = Regex::new(r"^(.+):(\d+)$").map_err(|_| invalid())?;
    let caps = line_re.captures(location).ok_or_else(invalid)?;
    let line: i64 = caps[2].parse().map_err(|_| invalid())?;
    Ok((caps[1].to_string(), line))
}
