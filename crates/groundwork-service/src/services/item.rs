//! Item service
//!
//! One use case per method: create, get, list, rename, delete.

use chrono::Utc;
use tracing::{info, instrument};

use groundwork_core::entities::Item;
use groundwork_core::value_objects::ItemId;

use crate::dto::{CreateItemRequest, RenameItemRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Item service
pub struct ItemService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ItemService<'a> {
    /// Create a new ItemService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new item
    ///
    /// Generates an id, constructs the entity with the given name and the
    /// current time, persists it, and returns it. Entity validation
    /// failures propagate unchanged; the service adds no validation of
    /// its own.
    #[instrument(skip(self, request))]
    pub async fn create_item(&self, request: CreateItemRequest) -> ServiceResult<Item> {
        let item_id = self.ctx.generate_id();
        let item = Item::new(item_id, request.name, Utc::now())?;

        self.ctx.item_repo().save(&item).await?;

        info!(item_id = %item.id(), "Item created");

        Ok(item)
    }

    /// Get an item by id
    #[instrument(skip(self))]
    pub async fn get_item(&self, item_id: ItemId) -> ServiceResult<Item> {
        self.ctx
            .item_repo()
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Item", item_id.to_string()))
    }

    /// List all items (order unspecified)
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ServiceResult<Vec<Item>> {
        Ok(self.ctx.item_repo().find_all().await?)
    }

    /// Rename an existing item
    ///
    /// Loads the item, applies the validating rename, and persists the
    /// result. An unknown id maps to a not-found error.
    #[instrument(skip(self, request))]
    pub async fn rename_item(
        &self,
        item_id: ItemId,
        request: RenameItemRequest,
    ) -> ServiceResult<Item> {
        let mut item = self
            .ctx
            .item_repo()
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Item", item_id.to_string()))?;

        item.rename(request.name)?;
        self.ctx.item_repo().save(&item).await?;

        info!(item_id = %item.id(), "Item renamed");

        Ok(item)
    }

    /// Delete an item by id
    ///
    /// Deleting an absent id succeeds silently, mirroring the repository
    /// contract.
    #[instrument(skip(self))]
    pub async fn delete_item(&self, item_id: ItemId) -> ServiceResult<()> {
        self.ctx.item_repo().delete(item_id).await?;

        info!(item_id = %item_id, "Item deleted");

        Ok(())
    }
}
