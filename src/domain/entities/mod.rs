//! Core domain entities.
//!
//! The service has a single entity, [`ShortLink`]. It carries no behavior
//! beyond construction; rules live in the application services.

pub mod short_link;

pub use short_link::ShortLink;
