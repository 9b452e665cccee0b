//! Business logic services for the application layer.

pub mod code_generator;
pub mod resolution_service;
pub mod shortening_service;

pub use code_generator::CodeGenerator;
pub use resolution_service::ResolutionService;
pub use shortening_service::{Shortened, ShorteningService};
