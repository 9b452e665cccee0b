//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::absolute_url;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Returns 307 Temporary Redirect. Nothing is recorded about the visit.
/// Links stored as `www.…` are sent to `http://www.…`.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.resolution_service.resolve(&code).await?;

    debug!(code = %link.code, "Redirecting");

    Ok(Redirect::temporary(&absolute_url(&link.long_url)))
}
