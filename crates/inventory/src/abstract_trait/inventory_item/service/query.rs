use crate::domain::response::{ApiResponse, InventoryItemResponse};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynInventoryItemQueryService = Arc<dyn InventoryItemQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait InventoryItemQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<InventoryItemResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<ApiResponse<Option<InventoryItemResponse>>, ServiceError>;
}
