//! Shortening service: turns a long URL into a stored short link.

use std::sync::Arc;

use crate::application::services::CodeGenerator;
use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::url_validator::is_valid_url;
use tracing::{debug, info, warn};

/// Outcome of a shorten call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortened {
    pub link: ShortLink,
    /// `false` when an existing record was returned and nothing was written.
    pub created: bool,
}

impl Shortened {
    fn created(link: ShortLink) -> Self {
        Self {
            link,
            created: true,
        }
    }

    fn existing(link: ShortLink) -> Self {
        Self {
            link,
            created: false,
        }
    }
}

/// Orchestrates validation, dedup, code allocation and the final insert.
///
/// Holds no locks of its own. Concurrent calls are coordinated only through
/// [`LinkStore::insert_if_absent`].
pub struct ShorteningService<S: LinkStore + ?Sized> {
    store: Arc<S>,
    generator: CodeGenerator<S>,
}

impl<S: LinkStore + ?Sized> ShorteningService<S> {
    /// Creates a service with a default [`CodeGenerator`] over the same store.
    pub fn new(store: Arc<S>) -> Self {
        let generator = CodeGenerator::new(store.clone());
        Self::with_generator(store, generator)
    }

    pub fn with_generator(store: Arc<S>, generator: CodeGenerator<S>) -> Self {
        Self { store, generator }
    }

    /// Shortens `long_url`, optionally under `custom_alias`.
    ///
    /// # Algorithm
    ///
    /// 1. Reject malformed URLs before touching the store
    /// 2. Return the existing code if the URL was shortened before
    /// 3. Allocate a code (custom alias or random)
    /// 4. Insert it if absent; on a lost race, retry with a fresh random code
    ///    or fail with a conflict for custom aliases
    ///
    /// A dedup hit in step 2 wins over a supplied alias.
    ///
    /// Two concurrent calls for the same new URL may both miss step 2 and
    /// store two codes. Both codes resolve; the reverse index answers with
    /// one of them afterwards.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] for malformed URLs (nothing is written)
    /// - [`AppError::InvalidAlias`] for aliases that break the token rules
    /// - [`AppError::CodeConflict`] if the alias belongs to another URL
    /// - [`AppError::GenerationExhausted`] if random codes keep colliding
    /// - [`AppError::StoreUnavailable`] on store failures
    pub async fn shorten(
        &self,
        long_url: &str,
        custom_alias: Option<&str>,
    ) -> Result<Shortened, AppError> {
        if !is_valid_url(long_url) {
            return Err(AppError::invalid_url(long_url));
        }

        if let Some(code) = self.store.find_code_by_url(long_url).await? {
            debug!(code = %code, "URL already shortened");
            return Ok(Shortened::existing(ShortLink::new(code, long_url)));
        }

        let custom_alias = custom_alias.filter(|alias| !alias.is_empty());
        let max_attempts = self.generator.max_attempts();

        for _ in 0..max_attempts {
            let code = self.generator.allocate_code(long_url, custom_alias).await?;

            if self.store.insert_if_absent(&code, long_url).await? {
                info!(code = %code, long_url = %long_url, "Short link created");
                return Ok(Shortened::created(ShortLink::new(code, long_url)));
            }

            if custom_alias.is_some() {
                return match self.store.get(&code).await? {
                    Some(existing) if existing == long_url => {
                        Ok(Shortened::existing(ShortLink::new(code, long_url)))
                    }
                    _ => {
                        warn!(code = %code, "Custom alias taken by a concurrent request");
                        Err(AppError::conflict(code))
                    }
                };
            }

            debug!(code = %code, "Generated code taken before insert, retrying");
        }

        Err(AppError::GenerationExhausted {
            attempts: max_attempts,
        })
    }
}
