//! In-memory implementation of the link store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::StoreError;
use crate::domain::repositories::LinkStore;

/// Process-local link records keyed by short code.
///
/// Keys are unique by construction, so lookups never report ambiguity.
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
    links: DashMap<String, Link>,
}

impl MemoryLinkStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError> {
        match self.links.entry(new_link.code.clone()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateKey(new_link.code)),
            Entry::Vacant(slot) => {
                let link = new_link.into_link(Utc::now());
                slot.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError> {
        Ok(self.links.get(code).map(|link| link.value().clone()))
    }

    async fn increment_clicks(&self, code: &str) -> Result<i64, StoreError> {
        let mut link = self
            .links
            .get_mut(code)
            .ok_or_else(|| StoreError::Missing(code.to_owned()))?;
        link.clicks += 1;
        Ok(link.clicks)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.links.len() as i64)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
