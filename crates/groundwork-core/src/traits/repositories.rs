//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::Item;
use crate::error::DomainError;
use crate::value_objects::ItemId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Persistence contract for items
///
/// Implementations may only fail with infrastructure-wrapping errors
/// (`DomainError::StorageError`); absence is reported through `Option`,
/// never through an error.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Find an item by id; `None` when the id is unknown
    async fn find_by_id(&self, id: ItemId) -> RepoResult<Option<Item>>;

    /// List all items (order unspecified)
    async fn find_all(&self) -> RepoResult<Vec<Item>>;

    /// Save an item: creates it, or overwrites an existing entry with the
    /// same id (upsert, last write wins)
    async fn save(&self, item: &Item) -> RepoResult<()>;

    /// Delete an item by id; deleting an absent id succeeds silently
    async fn delete(&self, id: ItemId) -> RepoResult<()>;
}
