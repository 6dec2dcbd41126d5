//! Slice command implementation
//!
//! Loads each location, slices the enclosing function and prints the result.
//!
//! @module cli/slice

use clap::Args;
use rayon::prelude::*;
use tracing::info;

use crate::cli::parse_location;
use crate::core::config::Config;
use crate::core::error::{Error, Result};
use crate::output::{format_slices, human, Located, OutputFormat};
use crate::slice::{slice_function, SliceOptions, SliceResult};
use crate::source::{filename_from_location, github_blob_to_raw, load_source, FetchOptions};

/// Arguments for the slice command
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:
    funcslice slice src/app.py:42                 Slice around line 42
    funcslice slice a.cpp:10 b.cpp:88             Slice several locations
    funcslice slice src/app.py:42 --depth 4       Follow more dependency hops
    funcslice slice src/app.py:42 --json          JSON output with metadata")]
pub struct SliceArgs {
    /// Locations as <path-or-url>:<line>
    #[arg(required = true, value_name = "LOCATION")]
    pub locations: Vec<String>,

    /// Backward propagation passes (default from config: 2)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub depth: Option<u64>,

    /// Drop the trailing comments of omitted lines
    #[arg(long)]
    pub no_inline_comments: bool,

    /// Do not promote if/for/while headers around relevant lines
    #[arg(long)]
    pub no_control_headers: bool,

    /// Comment token used for markers and diagnostics
    #[arg(long, value_name = "TOKEN", allow_hyphen_values = true)]
    pub comment_prefix: Option<String>,

    /// JSON output
    #[arg(long)]
    pub json: bool,
}

impl SliceArgs {
    /// Config defaults overridden by command-line flags
    pub fn options(&self, config: &Config) -> SliceOptions {
        let mut options = config.slice.to_options();
        if let Some(depth) = self.depth {
            options.max_backward_depth = depth as usize;
        }
        if self.no_inline_comments {
            options.preserve_inline_comments = false;
        }
        if self.no_control_headers {
            options.include_control_headers = false;
        }
        if let Some(prefix) = &self.comment_prefix {
            options.line_comment_override = Some(prefix.clone());
        }
        options
    }
}

/// A loaded source waiting to be sliced
struct Pending {
    location: String,
    filename: String,
    line: i64,
    source: String,
}

/// Run the slice command
pub async fn run(args: SliceArgs) -> Result<()> {
    let config = Config::load()?;
    let options = args.options(&config);
    let fetch = FetchOptions::from_config(&config.server);

    let mut pending = Vec::with_capacity(args.locations.len());
    for raw in &args.locations {
        let (location, line) = parse_location(raw)?;
        let resolved = github_blob_to_raw(&location)?;
        let source = load_source(&resolved, &fetch).await?;
        pending.push(Pending {
            location: raw.clone(),
            filename: filename_from_location(&resolved),
            line,
            source,
        });
    }

    info!(count = pending.len(), "slicing locations");

    let results: Vec<Located<SliceResult>> = tokio::task::spawn_blocking(move || {
        pending
            .par_iter()
            .map(|p| Located {
                location: p.location.clone(),
                result: slice_function(&p.source, &p.filename, p.line, &options),
            })
            .collect()
    })
    .await
    .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;

    let format = OutputFormat::from_json_flag(args.json);
    if format == OutputFormat::Human {
        for item in &results {
            eprintln!("{}", human::slice_meta_line(item));
        }
    }
    print!("{}", format_slices(&results, format));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        args: SliceArgs,
    }

    #[test]
    fn test_flags_override_config() {
        let wrapper = Wrapper::try_parse_from([
            "slice",
            "a.py:1",
            "--depth",
            "5",
            "--no-control-headers",
            "--comment-prefix",
            ";;",
        ])
        .unwrap();
        let options = wrapper.args.options(&Config::default());
        assert_eq!(options.max_backward_depth, 5);
        assert!(!options.include_control_headers);
        assert!(options.preserve_inline_comments);
        assert_eq!(options.line_comment_override.as_deref(), Some(";;"));
    }

    #[test]
    fn test_config_used_without_flags() {
        let wrapper = Wrapper::try_parse_from(["slice", "a.py:1"]).unwrap();
        let mut config = Config::default();
        config.slice.max_backward_depth = 7;
        assert_eq!(wrapper.args.options(&config).max_backward_depth, 7);
    }
}
