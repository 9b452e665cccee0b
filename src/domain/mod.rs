//! Domain layer: the short link entity and the storage contract.
//!
//! - [`entities`] - [`entities::ShortLink`]
//! - [`repositories`] - [`repositories::LinkStore`], implemented by the
//!   infrastructure layer
//!
//! Nothing here depends on HTTP or on a particular database.

pub mod entities;
pub mod repositories;
