//! In-memory implementation of ItemRepository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::instrument;

use groundwork_core::entities::Item;
use groundwork_core::error::DomainError;
use groundwork_core::traits::{ItemRepository, RepoResult};
use groundwork_core::value_objects::ItemId;

/// In-memory ItemRepository backed by a `HashMap`
///
/// Intended for tests, examples, and as the placeholder a real backend
/// replaces. Last write wins on `save`; lost updates are not detected.
/// The lock exists to allow `&self` mutation through a shared trait
/// object, not to provide transactional semantics.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: RwLock<HashMap<ItemId, Item>>,
}

impl InMemoryItemRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.items.read().map(|items| items.len()).unwrap_or(0)
    }

    /// Check whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn poisoned() -> DomainError {
        DomainError::StorageError("item store lock poisoned".to_string())
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ItemId) -> RepoResult<Option<Item>> {
        let items = self.items.read().map_err(|_| Self::poisoned())?;
        Ok(items.get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Item>> {
        let items = self.items.read().map_err(|_| Self::poisoned())?;
        Ok(items.values().cloned().collect())
    }

    #[instrument(skip(self, item), fields(item_id = %item.id()))]
    async fn save(&self, item: &Item) -> RepoResult<()> {
        let mut items = self.items.write().map_err(|_| Self::poisoned())?;
        items.insert(item.id(), item.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ItemId) -> RepoResult<()> {
        let mut items = self.items.write().map_err(|_| Self::poisoned())?;
        items.remove(&id);
        Ok(())
    }
}
