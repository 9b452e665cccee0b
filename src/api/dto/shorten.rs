//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// Field names follow snake_case; the camelCase spellings, the bare `url`
/// key and `custom_url` are accepted as aliases.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL. Well-formedness is checked by the shortening service.
    #[serde(alias = "longURL", alias = "longUrl", alias = "url")]
    #[validate(length(max = 2048, message = "URL must be at most 2048 characters"))]
    pub long_url: String,

    /// Optional custom short code. Empty means none.
    #[serde(default, alias = "customAlias", alias = "custom_url")]
    #[validate(length(max = 64, message = "Alias must be at most 64 characters"))]
    pub custom_alias: Option<String>,
}

/// Successful shorten result.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
    pub long_url: String,
}
