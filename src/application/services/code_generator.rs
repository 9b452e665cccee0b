//! Store-aware short code allocation.

use std::sync::Arc;

use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code, validate_custom_alias};
use tracing::{debug, warn};

/// Default number of generation attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Picks the code a long URL should be stored under.
///
/// The existence checks here are best effort. Two requests can still pick
/// the same code; the store's insert-if-absent settles that.
pub struct CodeGenerator<S: LinkStore + ?Sized> {
    store: Arc<S>,
    code_length: usize,
    max_attempts: usize,
}

impl<S: LinkStore + ?Sized> CodeGenerator<S> {
    /// Creates a generator with the default code length and attempt limit.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            code_length: DEFAULT_CODE_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Creates a generator with explicit settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `code_length` or `max_attempts` is zero. A zero
    /// length would mint the empty code.
    pub fn with_settings(
        store: Arc<S>,
        code_length: usize,
        max_attempts: usize,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(code_length > 0, "code length must be at least 1");
        anyhow::ensure!(max_attempts > 0, "max attempts must be at least 1");

        Ok(Self {
            store,
            code_length,
            max_attempts,
        })
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Allocates a code for `long_url`.
    ///
    /// - With a non-empty `custom_alias`: validates it and returns it trimmed,
    ///   unless the store already maps it to a different URL.
    /// - Otherwise: generates random codes until one is not in the store.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidAlias`] if the alias breaks the token rules
    /// - [`AppError::CodeConflict`] if the alias belongs to another URL
    /// - [`AppError::GenerationExhausted`] after `max_attempts` collisions
    /// - [`AppError::StoreUnavailable`] on store failures
    pub async fn allocate_code(
        &self,
        long_url: &str,
        custom_alias: Option<&str>,
    ) -> Result<String, AppError> {
        match custom_alias.filter(|alias| !alias.is_empty()) {
            Some(alias) => self.claim_alias(long_url, alias).await,
            None => self.generate_unique_code().await,
        }
    }

    async fn claim_alias(&self, long_url: &str, alias: &str) -> Result<String, AppError> {
        let alias = validate_custom_alias(alias)?;

        match self.store.get(alias).await? {
            Some(existing) if existing != long_url => {
                warn!(code = %alias, "Custom alias already bound to another URL");
                Err(AppError::conflict(alias))
            }
            _ => Ok(alias.to_string()),
        }
    }

    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for attempt in 1..=self.max_attempts {
            let code = generate_code(self.code_length);

            if !self.store.exists_by_code(&code).await? {
                return Ok(code);
            }

            debug!(attempt, code = %code, "Generated code already exists");
        }

        Err(AppError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }
}
