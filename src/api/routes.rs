//! API route configuration.

use crate::api::handlers::{delete_handler, save_handler};
use crate::domain::repositories::{UrlDeleter, UrlSaver};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// URL management routes.
///
/// # Endpoints
///
/// - `POST   /url`          - Save a URL under a given or generated alias
/// - `DELETE /url/{alias}`  - Delete a mapping, returning the removed URL
pub fn url_routes<R>() -> Router<AppState<R>>
where
    R: UrlSaver + UrlDeleter + 'static,
{
    Router::new()
        .route("/url", post(save_handler::<R>))
        .route("/url/{alias}", delete(delete_handler::<R>))
}
