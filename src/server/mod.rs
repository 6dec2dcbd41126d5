//! HTTP Service
//!
//! Axum server exposing extraction and slicing to remote callers.
//!
//! Routes:
//! - `GET /health`
//! - `POST /function/extract` - whole enclosing function
//! - `POST /function/compress` - sliced enclosing function
//!
//! The `/function/*` routes require `Authorization: Bearer <token>` when a
//! token is configured.
//!
//! @module server

pub mod routes;

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::info;

use crate::core::config::Config;
use crate::core::error::Result;

// =============================================================================
// STATE
// =============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

// =============================================================================
// AUTH
// =============================================================================

fn bearer_matches(request: &Request, token: &str) -> bool {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .is_some_and(|given| given == token)
}

async fn require_token(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if let Some(token) = state.config.server.api_token.as_deref() {
        if !bearer_matches(&request, token) {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Unauthorized" })),
            )
                .into_response();
        }
    }
    next.run(request).await
}

// =============================================================================
// SERVER
// =============================================================================

/// Build the application router
pub fn router(state: AppState) -> Router {
    let function_routes = Router::new()
        .route("/extract", post(routes::extract))
        .route("/compress", post(routes::compress))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token))
        .with_state(state);

    Router::new()
        .route("/health", get(routes::health))
        .nest("/function", function_routes)
}

/// Serve until the process is stopped
pub async fn run(config: Config) -> Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let auth = config.server.api_token.is_some();
    let app = router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, auth, "funcslice server listening");
    eprintln!("\x1b[36m>\x1b[0m funcslice serving at \x1b[36mhttp://{}\x1b[0m", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
