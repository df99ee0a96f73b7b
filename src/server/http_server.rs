//! Dashboard state HTTP server
//!
//! Exposes a single state route (default `/api/dashboard-state`):
//! - `OPTIONS` - CORS preflight, 204
//! - `GET` - canonical document, never cached
//! - `POST` - replace the document, echo `{ "success": true, "data": ... }`
//! - anything else - 405
//!
//! Every response carries permissive CORS headers.

use super::error::EndpointError;
use crate::config::ServerConfig;
use crate::models::{Document, STORE_NAMESPACE};
use crate::services::{fetch_canonical, replace_canonical};
use crate::store::{BlobStore, FileStore, MemoryStore};
use crate::{Context, Result};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

// =============================================================================
// Application State
// =============================================================================

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Injected document storage
    pub store: Arc<dyn BlobStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }
}

/// Body of a successful replace
#[derive(Debug, Serialize)]
pub struct ReplaceResponse<'a> {
    pub success: bool,
    pub data: &'a Document,
}

// =============================================================================
// Router
// =============================================================================

/// Build the router serving the state endpoint at `route`
pub fn router(store: Arc<dyn BlobStore>, route: &str) -> Router {
    Router::new()
        .route(route, any(handle_state))
        .route("/health", get(health_check))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET,POST,OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(store))
}

/// Open the configured store
pub fn open_store(config: &ServerConfig) -> Result<Arc<dyn BlobStore>> {
    if config.memory {
        tracing::warn!("using in-memory store, document is lost on shutdown");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let root = config.resolved_data_dir()?;
    let store = FileStore::new(&root, STORE_NAMESPACE)
        .with_context(|| format!("Failed to open store at {}", root.display()))?;
    tracing::info!(dir = %store.dir().display(), "using file store");
    Ok(Arc::new(store))
}

// =============================================================================
// Server Startup
// =============================================================================

/// Start the HTTP server and run until Ctrl-C
pub async fn start_server(config: ServerConfig) -> Result<()> {
    config.validate()?;
    let store = open_store(&config)?;
    let app = router(store, &config.route);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, route = %config.route, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

// =============================================================================
// State Handler
// =============================================================================

async fn handle_state(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> std::result::Result<Response, EndpointError> {
    match method {
        Method::OPTIONS => Ok(StatusCode::NO_CONTENT.into_response()),

        Method::GET => {
            let document = fetch_canonical(state.store.as_ref()).await?;
            Ok((
                [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
                Json(document),
            )
                .into_response())
        }

        Method::POST => {
            // Reject unparseable bodies before touching the merger or storage
            let incoming: Value =
                serde_json::from_slice(&body).map_err(EndpointError::InvalidJson)?;
            let document = replace_canonical(state.store.as_ref(), &incoming).await?;
            Ok(Json(ReplaceResponse {
                success: true,
                data: &document,
            })
            .into_response())
        }

        other => Err(EndpointError::MethodNotAllowed(other)),
    }
}
