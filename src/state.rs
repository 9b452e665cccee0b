//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{CodeGenerator, ResolutionService, ShorteningService};
use crate::domain::repositories::LinkStore;

/// Application state shared across handlers.
///
/// The store is chosen at startup, so services are held over `dyn LinkStore`.
#[derive(Clone)]
pub struct AppState {
    pub shortening_service: Arc<ShorteningService<dyn LinkStore>>,
    pub resolution_service: Arc<ResolutionService<dyn LinkStore>>,
    pub store: Arc<dyn LinkStore>,
    pub base_url: String,
}

impl AppState {
    /// Wires services around `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator settings are rejected.
    pub fn new(
        store: Arc<dyn LinkStore>,
        code_length: usize,
        max_generation_attempts: usize,
        base_url: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let generator =
            CodeGenerator::with_settings(store.clone(), code_length, max_generation_attempts)?;

        Ok(Self {
            shortening_service: Arc::new(ShorteningService::with_generator(
                store.clone(),
                generator,
            )),
            resolution_service: Arc::new(ResolutionService::new(store.clone())),
            store,
            base_url: base_url.into(),
        })
    }

    /// Full short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
