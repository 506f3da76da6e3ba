use crate::{
    domain::normalized::{InventoryItemChanges, NewInventoryItem},
    model::InventoryItem as InventoryItemModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynInventoryItemCommandRepository =
    Arc<dyn InventoryItemCommandRepositoryTrait + Send + Sync>;

/// Write side of the `inventory_items` table.
///
/// `update_item` owns the `updated_at` column: it is set to the current time
/// whenever `changes` is non-empty and left alone otherwise. Unknown ids
/// yield `Ok(None)` from both `update_item` and `delete_item`.
#[async_trait]
pub trait InventoryItemCommandRepositoryTrait {
    async fn create_item(
        &self,
        item: &NewInventoryItem,
    ) -> Result<InventoryItemModel, RepositoryError>;
    async fn update_item(
        &self,
        id: i32,
        changes: &InventoryItemChanges,
    ) -> Result<Option<InventoryItemModel>, RepositoryError>;
    async fn delete_item(&self, id: i32) -> Result<Option<InventoryItemModel>, RepositoryError>;
}
