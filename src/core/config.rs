//! Configuration management

use crate::core::error::{Error, Result};
use crate::slice::SliceOptions;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the funcslice home directory
pub const HOME_ENV: &str = "FUNCSLICE_HOME";

/// Environment variable overriding the server API token
pub const API_TOKEN_ENV: &str = "FUNCSLICE_API_TOKEN";

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub slice: SliceConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceConfig {
    /// Number of backward identifier-propagation passes
    pub max_backward_depth: usize,
    /// Keep trailing comments of omitted lines
    pub preserve_inline_comments: bool,
    /// Promote if/for/while headers around relevant lines
    pub include_control_headers: bool,
    /// Replace the language's line-comment token in generated markers
    pub line_comment_override: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Bearer token required on /function/* routes
    pub api_token: Option<String>,
    /// Maximum size of a fetched source (bytes)
    pub max_source_bytes: u64,
    /// Remote fetch timeout (seconds)
    pub fetch_timeout_secs: u64,
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            max_backward_depth: 2,
            preserve_inline_comments: true,
            include_control_headers: true,
            line_comment_override: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            api_token: None,
            max_source_bytes: 50 * 1024 * 1024, // 50MB
            fetch_timeout_secs: 15,
        }
    }
}

impl SliceConfig {
    /// Slice options seeded from this section
    pub fn to_options(&self) -> SliceOptions {
        SliceOptions {
            max_backward_depth: self.max_backward_depth,
            preserve_inline_comments: self.preserve_inline_comments,
            include_control_headers: self.include_control_headers,
            line_comment_override: self.line_comment_override.clone(),
        }
    }
}

impl Config {
    /// Load configuration from default location
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)?
        } else {
            Config::default()
        };

        if let Ok(token) = std::env::var(API_TOKEN_ENV) {
            if !token.is_empty() {
                config.server.api_token = Some(token);
            }
        }

        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.slice.max_backward_depth == 0 {
            return Err(Error::ConfigError {
                message: "slice.max_backward_depth must be at least 1".to_string(),
            });
        }
        Ok(config)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = Self::funcslice_home()?;
        Ok(home.join("config.toml"))
    }

    /// Get the funcslice home directory
    pub fn funcslice_home() -> Result<PathBuf> {
        // Check FUNCSLICE_HOME env var first
        if let Ok(home) = std::env::var(HOME_ENV) {
            return Ok(PathBuf::from(home));
        }

        // Use XDG directories
        ProjectDirs::from("dev", "funcslice", "funcslice")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| Error::ConfigError {
                message: "Could not determine funcslice home directory".to_string(),
            })
    }
}
