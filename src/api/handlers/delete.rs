//! Handler for the delete endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::delete::DeleteResponse;
use crate::domain::repositories::UrlDeleter;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes a mapping and returns the URL it pointed to.
///
/// # Endpoint
///
/// `DELETE /url/{alias}`
///
/// # Response
///
/// ```json
/// { "status": "ok", "deleted_url": "https://example.com" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the alias is unknown.
pub async fn delete_handler<R>(
    Path(alias): Path<String>,
    State(state): State<AppState<R>>,
) -> Result<Json<DeleteResponse>, AppError>
where
    R: UrlDeleter + 'static,
{
    let deleted_url = state.url_service.remove(&alias).await?;

    Ok(Json(DeleteResponse::ok(deleted_url)))
}
