//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Redirects to `/settings/apps`
//! - `GET  /health`      - Health check including the backend probe
//! - `/settings/apps/*`  - Dashboard pages, data and form actions
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::response::Redirect;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the router with all routes and tracing, without path normalization.
///
/// Integration tests use this directly with `axum_test::TestServer`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/settings/apps") }))
        .route("/health", get(health_handler))
        .merge(web::routes::routes())
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with trailing slashes trimmed.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
