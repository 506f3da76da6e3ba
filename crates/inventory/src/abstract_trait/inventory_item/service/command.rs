use crate::domain::{
    requests::{CreateInventoryItemRequest, UpdateInventoryItemRequest},
    response::{ApiResponse, InventoryItemResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynInventoryItemCommandService =
    Arc<dyn InventoryItemCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait InventoryItemCommandServiceTrait {
    async fn create_item(
        &self,
        req: &CreateInventoryItemRequest,
    ) -> Result<ApiResponse<InventoryItemResponse>, ServiceError>;
    async fn update_item(
        &self,
        req: &UpdateInventoryItemRequest,
    ) -> Result<ApiResponse<Option<InventoryItemResponse>>, ServiceError>;
    async fn delete_item(
        &self,
        id: i32,
    ) -> Result<ApiResponse<Option<InventoryItemResponse>>, ServiceError>;
}
