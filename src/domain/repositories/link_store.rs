//! Storage contract for short links.

use crate::error::AppError;
use async_trait::async_trait;

/// Durable mapping from short code to long URL.
///
/// All coordination between concurrent shorten requests is delegated to
/// [`LinkStore::insert_if_absent`]; implementations must make that check and
/// write a single atomic step.
///
/// Infrastructure failures are returned as [`AppError::StoreUnavailable`].
/// Implementations never retry internally.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkStore`] - process-local maps
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Returns the long URL stored under `code`, if any.
    async fn get(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Returns `true` if a record with exactly this code exists.
    async fn exists_by_code(&self, code: &str) -> Result<bool, AppError>;

    /// Finds a code already issued for `long_url`.
    ///
    /// When concurrent shortens minted several codes for the same URL, any one
    /// of them may be returned, but the answer is stable between calls.
    async fn find_code_by_url(&self, long_url: &str) -> Result<Option<String>, AppError>;

    /// Writes the record only if no record with this code exists.
    ///
    /// Returns `Ok(false)` without touching the existing record when the code
    /// is taken. A taken code is data, not an error.
    async fn insert_if_absent(&self, code: &str, long_url: &str) -> Result<bool, AppError>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
