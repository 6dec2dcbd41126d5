//! Error types for funcslice

use thiserror::Error;

/// Result type alias using funcslice's Error
pub type Result<T> = std::result::Result<T, Error>;

/// funcslice error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported file extension: {extension}")]
    UnsupportedLanguage { extension: String },

    #[error("Parse error ({language}): {message}")]
    Parse { language: String, message: String },

    #[error("Invalid location (expected <path-or-url>:<line>): {location}")]
    InvalidLocation { location: String },

    #[error("Unsupported URL scheme: {scheme}")]
    UnsupportedScheme { scheme: String },

    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Source exceeds the maximum size of {limit} bytes")]
    SourceTooLarge { limit: u64 },

    #[error("Invalid GitHub URL: {url}")]
    InvalidGithubUrl { url: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// True for failures caused by a remote source rather than the request itself
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Error::Fetch { .. } | Error::Http(_) | Error::SourceTooLarge { .. }
        )
    }
}
