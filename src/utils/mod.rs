//! Pure helpers used by the application services.
//!
//! - [`url_validator`] - Long URL validation
//! - [`code_generator`] - Random code synthesis and custom alias rules

pub mod code_generator;
pub mod url_validator;
