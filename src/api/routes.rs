//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/shorten`  - Create (or return) a short URL
//! - `GET  /{short_id}`   - Short link redirect
//! - `GET  /health`       - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The redirect capture `/{short_id}` lives at the root; `/health` and
/// `/api/*` still win for their paths because static segments take
/// precedence over captures.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = Router::new().route("/shorten", post(shorten_handler));

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .route("/{short_id}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
