//! In-memory implementation of the link store.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// Process-local link store backed by sharded concurrent maps.
///
/// `links` maps code to long URL. `codes_by_url` is the reverse index and
/// keeps the first code written for each URL. The code check and write go
/// through a single `links` entry, which holds the shard lock for both.
#[derive(Debug, Default)]
pub struct InMemoryLinkStore {
    links: DashMap<String, String>,
    codes_by_url: DashMap<String, String>,
}

impl InMemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[async_trait]
impl LinkStore for InMemoryLinkStore {
    async fn get(&self, code: &str) -> Result<Option<String>, AppError> {
        Ok(self.links.get(code).map(|url| url.value().clone()))
    }

    async fn exists_by_code(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.links.contains_key(code))
    }

    async fn find_code_by_url(&self, long_url: &str) -> Result<Option<String>, AppError> {
        Ok(self
            .codes_by_url
            .get(long_url)
            .map(|code| code.value().clone()))
    }

    async fn insert_if_absent(&self, code: &str, long_url: &str) -> Result<bool, AppError> {
        match self.links.entry(code.to_owned()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(long_url.to_owned());
                self.codes_by_url
                    .entry(long_url.to_owned())
                    .or_insert_with(|| code.to_owned());
                Ok(true)
            }
        }
    }

    async fn health_check(&self) -> bool {
        true
    }
}
