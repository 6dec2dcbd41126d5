//! Extract command implementation
//!
//! @module cli/extract

use clap::Args;

use crate::cli::parse_location;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::extract::extract_function;
use crate::output::{format_extract, human, Located, OutputFormat};
use crate::source::{filename_from_location, github_blob_to_raw, load_source, FetchOptions};

/// Arguments for the extract command
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:
    funcslice extract src/app.py:42       Print the function around line 42
    funcslice extract src/app.py:42 --json")]
pub struct ExtractArgs {
    /// Location as <path-or-url>:<line>
    #[arg(value_name = "LOCATION")]
    pub location: String,

    /// JSON output
    #[arg(long)]
    pub json: bool,
}

/// Run the extract command
pub async fn run(args: ExtractArgs) -> Result<()> {
    let config = Config::load()?;
    let (location, line) = parse_location(&args.location)?;
    let resolved = github_blob_to_raw(&location)?;
    let source = load_source(&resolved, &FetchOptions::from_config(&config.server)).await?;

    let item = Located {
        location: args.location.clone(),
        result: extract_function(&source, &filename_from_location(&resolved), line),
    };

    let format = OutputFormat::from_json_flag(args.json);
    if format == OutputFormat::Human {
        eprintln!("{}", human::extract_meta_line(&item));
    }
    print!("{}", format_extract(&item, format));

    Ok(())
}
