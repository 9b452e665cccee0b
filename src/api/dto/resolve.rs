//! DTOs for the resolve endpoint.

use serde::Serialize;

/// A short code and the long URL it maps to.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub code: String,
    pub long_url: String,
}
