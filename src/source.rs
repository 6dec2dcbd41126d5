//! Source Loading
//!
//! Resolves a location (local path, `file://` URL or `http(s)://` URL) into
//! source text plus the filename hint used for language resolution.
//!
//! @module source

use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::core::config::ServerConfig;
use crate::core::error::{Error, Result};

/// Limits applied to remote downloads
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub max_bytes: u64,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from_config(&ServerConfig::default())
    }
}

impl FetchOptions {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            max_bytes: config.max_source_bytes,
            timeout: Duration::from_secs(config.fetch_timeout_secs),
        }
    }
}

// =============================================================================
// LOCATIONS
// =============================================================================

fn looks_like_url(location: &str) -> bool {
    location.contains("://")
}

/// Rewrite a GitHub `blob` page URL to its raw content URL
///
/// Anything that is not a `github.com/.../blob/...` URL is returned unchanged.
pub fn github_blob_to_raw(location: &str) -> Result<String> {
    if !location.contains("github.com") {
        return Ok(location.to_string());
    }
    let Ok(url) = Url::parse(location) else {
        return Ok(location.to_string());
    };
    if url.host_str() != Some("github.com") || !url.path().contains("/blob/") {
        return Ok(location.to_string());
    }

    let parts: Vec<&str> = url
        .path()
        .trim_matches('/')
        .split('/')
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() < 5 {
        return Err(Error::InvalidGithubUrl {
            url: location.to_string(),
        });
    }

    let (user, repo, branch) = (parts[0], parts[1], parts[3]);
    let file_path = parts[4..].join("/");
    Ok(format!(
        "https://raw.githubusercontent.com/{}/{}/{}/{}",
        user, repo, branch, file_path
    ))
}

/// Filename hint for a location: last path segment of a URL or local path
pub fn filename_from_location(location: &str) -> String {
    if looks_like_url(location) {
        if let Ok(url) = Url::parse(location) {
            if let Some(last) = url.path_segments().and_then(|mut s| s.next_back()) {
                return last.to_string();
            }
        }
    }
    Path::new(location)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| location.to_string())
}

// =============================================================================
// LOADING
// =============================================================================

/// Load the source text behind `location`
pub async fn load_source(location: &str, options: &FetchOptions) -> Result<String> {
    if !looks_like_url(location) {
        return read_local(Path::new(location)).await;
    }

    let url = Url::parse(location)?;
    match url.scheme() {
        "file" => {
            let path = url.to_file_path().map_err(|_| Error::Fetch {
                url: location.to_string(),
                message: "not a local file path".to_string(),
            })?;
            read_local(&path).await
        }
        "http" | "https" => fetch_remote(&url, options).await,
        other => Err(Error::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

async fn read_local(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

async fn fetch_remote(url: &Url, options: &FetchOptions) -> Result<String> {
    let fetch_error = |message: String| Error::Fetch {
        url: url.to_string(),
        message,
    };

    let client = reqwest::Client::builder()
        .timeout(options.timeout)
        .build()?;

    let mut response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| fetch_error(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        warn!(url = %url, %status, "remote source request failed");
        return Err(fetch_error(format!("HTTP {}", status)));
    }

    if response
        .content_length()
        .is_some_and(|len| len > options.max_bytes)
    {
        return Err(Error::SourceTooLarge {
            limit: options.max_bytes,
        });
    }

    let mut body: Vec<u8> = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| fetch_error(e.to_string()))?
    {
        if (body.len() + chunk.len()) as u64 > options.max_bytes {
            warn!(url = %url, limit = options.max_bytes, "remote source too large");
            return Err(Error::SourceTooLarge {
                limit: options.max_bytes,
            });
        }
        body.extend_from_slice(&chunk);
    }

    debug!(url = %url, bytes = body.len(), "fetched remote source");
    Ok(String::from_utf8_lossy(&body).into_owned())
}
