//! Application error type and its HTTP translation.
//!
//! [`AppError`] is shared by the core (validator, generator, store, services)
//! and the HTTP layer. The [`IntoResponse`] impl is the only place where error
//! kinds are mapped to status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// JSON envelope returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

/// Machine-readable error code with a human message and structured details.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The long URL is not a well-formed absolute http(s) URL.
    #[error("Invalid URL: {url:?}")]
    InvalidUrl { url: String },

    /// The custom alias does not satisfy short code rules.
    #[error("Invalid custom alias {alias:?}: {reason}")]
    InvalidAlias { alias: String, reason: &'static str },

    /// Request payload failed declarative validation.
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("Short code not found: {code}")]
    NotFound { code: String },

    /// The custom alias is already bound to a different URL.
    #[error("Short code already taken: {code}")]
    CodeConflict { code: String },

    /// Random generation collided on every attempt.
    #[error("Failed to generate a unique short code after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    /// The backing store could not be reached or failed the operation.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl AppError {
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    pub fn invalid_alias(alias: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidAlias {
            alias: alias.into(),
            reason,
        }
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    pub fn conflict(code: impl Into<String>) -> Self {
        Self::CodeConflict { code: code.into() }
    }

    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable(message.into())
    }

    /// HTTP status code for this error kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidUrl { .. } | Self::InvalidAlias { .. } | Self::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::CodeConflict { .. } => StatusCode::CONFLICT,
            Self::GenerationExhausted { .. } | Self::StoreUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Builds the serializable error payload without consuming the error.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, details) = match self {
            Self::InvalidUrl { url } => ("invalid_url", json!({ "url": url })),
            Self::InvalidAlias { alias, reason } => {
                ("invalid_alias", json!({ "alias": alias, "reason": reason }))
            }
            Self::Validation { details, .. } => ("validation_error", details.clone()),
            Self::NotFound { code } => ("not_found", json!({ "code": code })),
            Self::CodeConflict { code } => ("code_conflict", json!({ "code": code })),
            Self::GenerationExhausted { attempts } => {
                ("generation_exhausted", json!({ "attempts": attempts }))
            }
            // Backend messages stay in the logs.
            Self::StoreUnavailable(_) => ("store_unavailable", json!({})),
        };

        let message = match self {
            Self::StoreUnavailable(_) => "Store unavailable".to_string(),
            other => other.to_string(),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        Self::StoreUnavailable(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(errors.field_errors()).unwrap_or(Value::Null);

        Self::Validation {
            message: "Request validation failed".to_string(),
            details,
        }
    }
}
