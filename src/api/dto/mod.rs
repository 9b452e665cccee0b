//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input limits.

pub mod health;
pub mod resolve;
pub mod shorten;
