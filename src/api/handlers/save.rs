//! Handler for the save endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::domain::repositories::UrlSaver;
use crate::error::AppError;
use crate::state::AppState;

/// Saves a URL under a caller-chosen or generated alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "alias": "abc123"   // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "status": "ok", "alias": "https://s.example.com/abc123" }
/// ```
///
/// # Errors
///
/// - 400 if the body cannot be decoded or fails validation
/// - 409 `{"status":"error","message":"url already exists"}` if the alias is taken
/// - 500 on storage or random source failures
pub async fn save_handler<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, AppError>
where
    R: UrlSaver + 'static,
{
    let Json(payload) = payload.map_err(|rejection| {
        tracing::error!(error = %rejection, "failed to decode request body");
        AppError::bad_request("failed to decode request", Value::Null)
    })?;

    tracing::info!(request = ?payload, "request body decoded");

    payload
        .validate()
        .inspect_err(|e| tracing::error!(error = %e, "invalid request"))?;

    let alias = state
        .url_service
        .shorten(&payload.url, payload.alias)
        .await?;

    Ok(Json(SaveResponse::ok(state.short_link(&alias))))
}
