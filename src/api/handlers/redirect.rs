//! Handler for alias redirects.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::domain::repositories::UrlGetter;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its target URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Returns 307 Temporary Redirect, or 404 if the alias is unknown.
pub async fn redirect_handler<R>(
    Path(alias): Path<String>,
    State(state): State<AppState<R>>,
) -> Result<Redirect, AppError>
where
    R: UrlGetter + 'static,
{
    let url = state.url_service.resolve(&alias).await?;

    tracing::debug!(alias = %alias, url = %url, "redirecting");

    Ok(Redirect::temporary(&url))
}
