//! Route handlers
//!
//! @module server/routes

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};
use url::Url;

use super::AppState;
use crate::core::error::Error;
use crate::extract::extract_function;
use crate::slice::{slice_function, SliceOptions};
use crate::source::{filename_from_location, github_blob_to_raw, load_source, FetchOptions};

// =============================================================================
// API TYPES
// =============================================================================

/// Body of `/function/extract` and `/function/compress`
#[derive(Debug, Default, Deserialize)]
pub struct FunctionRequest {
    pub line_number: Option<i64>,
    pub file_url: Option<String>,
    pub source: Option<String>,
    pub filename: Option<String>,
    #[serde(default)]
    pub options: OptionsPatch,
}

/// Partial slice options layered over the configured defaults
#[derive(Debug, Default, Deserialize)]
pub struct OptionsPatch {
    pub max_backward_depth: Option<usize>,
    pub preserve_inline_comments: Option<bool>,
    pub include_control_headers: Option<bool>,
    pub line_comment_override: Option<String>,
}

impl OptionsPatch {
    pub fn apply(self, mut options: SliceOptions) -> SliceOptions {
        if let Some(depth) = self.max_backward_depth {
            options.max_backward_depth = depth.max(1);
        }
        if let Some(preserve) = self.preserve_inline_comments {
            options.preserve_inline_comments = preserve;
        }
        if let Some(headers) = self.include_control_headers {
            options.include_control_headers = headers;
        }
        if self.line_comment_override.is_some() {
            options.line_comment_override = self.line_comment_override;
        }
        options
    }
}

#[derive(Debug, Serialize)]
pub struct FunctionResponse<T> {
    pub function: T,
}

/// JSON error body with its status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn internal(message: impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Internal error: {}", message),
        }
    }
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        let status = if e.is_fetch_failure() {
            StatusCode::BAD_GATEWAY
        } else {
            match e {
                Error::InvalidGithubUrl { .. }
                | Error::UnsupportedScheme { .. }
                | Error::Url(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            }
        };
        Self {
            status,
            message: e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

// =============================================================================
// REQUEST RESOLUTION
// =============================================================================

/// Source text, filename hint and target line of a request
struct Resolved {
    source: String,
    filename: String,
    line: i64,
}

async fn resolve(state: &AppState, request: &FunctionRequest) -> Result<Resolved, ApiError> {
    let line = match request.line_number {
        Some(line) if line != 0 => line,
        _ => return Err(ApiError::bad_request("Missing line_number")),
    };

    if let Some(source) = &request.source {
        let filename = request
            .filename
            .clone()
            .ok_or_else(|| ApiError::bad_request("Missing filename"))?;
        return Ok(Resolved {
            source: source.clone(),
            filename,
            line,
        });
    }

    let Some(file_url) = request.file_url.as_deref().filter(|u| !u.is_empty()) else {
        return Err(ApiError::bad_request("No valid input file or URL provided"));
    };

    let raw = github_blob_to_raw(file_url)?;
    let url = Url::parse(&raw).map_err(Error::from)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::UnsupportedScheme {
            scheme: url.scheme().to_string(),
        }
        .into());
    }

    let fetch = FetchOptions::from_config(&state.config.server);
    let source = load_source(&raw, &fetch).await.map_err(|e| {
        warn!(url = %raw, error = %e, "failed to load remote source");
        ApiError::from(e)
    })?;

    Ok(Resolved {
        source,
        filename: request
            .filename
            .clone()
            .unwrap_or_else(|| filename_from_location(&raw)),
        line,
    })
}

fn parse_body(payload: Result<Json<FunctionRequest>, JsonRejection>) -> Result<FunctionRequest, ApiError> {
    payload
        .map(|Json(request)| request)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

// =============================================================================
// HANDLERS
// =============================================================================

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn extract(
    State(state): State<AppState>,
    payload: Result<Json<FunctionRequest>, JsonRejection>,
) -> Result<Json<FunctionResponse<crate::extract::ExtractResult>>, ApiError> {
    let request = parse_body(payload)?;
    let Resolved {
        source,
        filename,
        line,
    } = resolve(&state, &request).await?;

    let result = tokio::task::spawn_blocking(move || extract_function(&source, &filename, line))
        .await
        .map_err(ApiError::internal)?;

    debug!(outcome = %result.outcome, "extract request served");
    Ok(Json(FunctionResponse { function: result }))
}

pub async fn compress(
    State(state): State<AppState>,
    payload: Result<Json<FunctionRequest>, JsonRejection>,
) -> Result<Json<FunctionResponse<crate::slice::SliceResult>>, ApiError> {
    let mut request = parse_body(payload)?;
    let Resolved {
        source,
        filename,
        line,
    } = resolve(&state, &request).await?;
    let options = std::mem::take(&mut request.options).apply(state.config.slice.to_options());

    let result =
        tokio::task::spawn_blocking(move || slice_function(&source, &filename, line, &options))
            .await
            .map_err(ApiError::internal)?;

    debug!(outcome = %result.outcome, "compress request served");
    Ok(Json(FunctionResponse { function: result }))
}
