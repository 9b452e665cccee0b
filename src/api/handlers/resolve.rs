//! Handler for the resolve endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::resolve::ResolveResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Reveals the long URL behind a short code without redirecting.
///
/// # Endpoint
///
/// `GET /api/resolve/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn resolve_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ResolveResponse>, AppError> {
    let link = state.resolution_service.resolve(&code).await?;

    Ok(Json(ResolveResponse {
        code: link.code,
        long_url: link.long_url,
    }))
}
