//! Link store implementations.
//!
//! - [`InMemoryLinkStore`] - Process-local, used for tests and single-node demos
//! - [`PgLinkStore`] - PostgreSQL via SQLx

pub mod memory_link_store;
pub mod pg_link_store;

pub use memory_link_store::InMemoryLinkStore;
pub use pg_link_store::PgLinkStore;
