//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "long_url": "https://example.com/very/long/path",
///   "custom_alias": "promo"      // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` for a new link, `200 OK` when the URL was already shortened:
///
/// ```json
/// {
///   "short_code": "promo",
///   "short_url": "http://localhost:3000/promo",
///   "long_url": "https://example.com/very/long/path"
/// }
/// ```
///
/// # Errors
///
/// - 400 for malformed URLs, invalid aliases or oversized fields
/// - 409 if the alias is bound to another URL
/// - 500 on store failures or exhausted code generation
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let shortened = state
        .shortening_service
        .shorten(&payload.long_url, payload.custom_alias.as_deref())
        .await?;

    let status = if shortened.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    let short_url = state.short_url(&shortened.link.code);

    Ok((
        status,
        Json(ShortenResponse {
            short_code: shortened.link.code,
            short_url,
            long_url: shortened.link.long_url,
        }),
    ))
}
