//! Resolution service: looks a short code back up.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// Read-through lookup of short codes. Never writes.
pub struct ResolutionService<S: LinkStore + ?Sized> {
    store: Arc<S>,
}

impl<S: LinkStore + ?Sized> ResolutionService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Resolves `code` to its stored link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this code.
    /// Returns [`AppError::StoreUnavailable`] on store failures.
    pub async fn resolve(&self, code: &str) -> Result<ShortLink, AppError> {
        self.store
            .get(code)
            .await?
            .map(|long_url| ShortLink::new(code, long_url))
            .ok_or_else(|| AppError::not_found(code))
    }
}
