//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{alias}`       - Redirect to the target URL
//! - `GET    /health`        - Liveness check
//! - `POST   /url`           - Save a URL
//! - `DELETE /url/{alias}`   - Delete a mapping
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{request_id, tracing};
use crate::domain::repositories::{UrlDeleter, UrlGetter, UrlSaver};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds all routes with their middleware.
pub fn build_router<R>(state: AppState<R>) -> Router
where
    R: UrlSaver + UrlGetter + UrlDeleter + 'static,
{
    Router::new()
        .route("/health", get(health_handler))
        .route("/{alias}", get(redirect_handler::<R>))
        .merge(api::routes::url_routes::<R>())
        .with_state(state)
        .layer(request_id::propagate_layer())
        .layer(tracing::layer())
        .layer(request_id::set_layer())
}

/// Constructs the application service with trailing slashes trimmed.
pub fn app_router<R>(state: AppState<R>) -> NormalizePath<Router>
where
    R: UrlSaver + UrlGetter + UrlDeleter + 'static,
{
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
