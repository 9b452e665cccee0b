//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::LinkStore`] trait and
//! are shared with HTTP handlers through [`crate::state::AppState`].
//!
//! # Available Services
//!
//! - [`services::ShorteningService`] - Validation, dedup, allocation and insert
//! - [`services::ResolutionService`] - Short code lookup
//! - [`services::CodeGenerator`] - Custom alias checks and random code synthesis

pub mod services;
