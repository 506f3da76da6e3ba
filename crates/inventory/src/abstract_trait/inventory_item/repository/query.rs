use crate::model::InventoryItem as InventoryItemModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynInventoryItemQueryRepository =
    Arc<dyn InventoryItemQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait InventoryItemQueryRepositoryTrait {
    /// Every stored item, ordered by id.
    async fn find_all(&self) -> Result<Vec<InventoryItemModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<InventoryItemModel>, RepositoryError>;
}
