use crate::{
    abstract_trait::{DynInventoryItemCommandRepository, InventoryItemCommandServiceTrait},
    domain::{
        requests::{CreateInventoryItemRequest, UpdateInventoryItemRequest},
        response::{ApiResponse, InventoryItemResponse},
    },
    service::TRACER_NAME,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct InventoryItemCommandService {
    command: DynInventoryItemCommandRepository,
    metrics: Arc<Metrics>,
}

impl InventoryItemCommandService {
    pub fn new(command: DynInventoryItemCommandRepository, registry: &mut Registry) -> Self {
        let metrics = Arc::new(Metrics::new());
        metrics.register(
            registry,
            "inventory_command_service",
            "InventoryItemCommandService",
        );

        Self { command, metrics }
    }
}

#[async_trait]
impl InventoryItemCommandServiceTrait for InventoryItemCommandService {
    async fn create_item(
        &self,
        req: &CreateInventoryItemRequest,
    ) -> Result<ApiResponse<InventoryItemResponse>, ServiceError> {
        info!("🏗️ Creating inventory item: {:?}", req.name);

        let method = Method::Post;
        let tracing_ctx = TracingContext::start(
            TRACER_NAME,
            "create_inventory_item",
            vec![
                KeyValue::new("component", "inventory"),
                KeyValue::new("operation", "create"),
                KeyValue::new(
                    "inventory_item.name",
                    req.name.clone().unwrap_or_default(),
                ),
            ],
        );

        let record = match req.normalize() {
            Ok(record) => record,
            Err(err) => {
                warn!("⚠️ Rejected create request: {err}");
                tracing_ctx.complete_error(&self.metrics, method, "Validation failed");
                return Err(err);
            }
        };

        let item = match self.command.create_item(&record).await {
            Ok(item) => {
                tracing_ctx.complete_success(
                    &self.metrics,
                    method,
                    "Inventory item created successfully",
                );
                item
            }
            Err(err) => {
                error!("❌ Failed to create inventory item: {err:?}");
                tracing_ctx.complete_error(
                    &self.metrics,
                    method,
                    "Failed to create inventory item",
                );
                return Err(ServiceError::Repo(err));
            }
        };

        let response = InventoryItemResponse::from(item);

        info!(
            "✅ Inventory item created: {} (ID: {})",
            response.name, response.id
        );

        Ok(ApiResponse::success(
            "Inventory item created successfully",
            response,
        ))
    }

    async fn update_item(
        &self,
        req: &UpdateInventoryItemRequest,
    ) -> Result<ApiResponse<Option<InventoryItemResponse>>, ServiceError> {
        info!("✏️ Updating inventory item ID: {:?}", req.id);

        let method = Method::Patch;
        let tracing_ctx = TracingContext::start(
            TRACER_NAME,
            "update_inventory_item",
            vec![
                KeyValue::new("component", "inventory"),
                KeyValue::new("operation", "update"),
                KeyValue::new("inventory_item.id", i64::from(req.id.unwrap_or_default())),
            ],
        );

        let (id, changes) = match req.normalize() {
            Ok(normalized) => normalized,
            Err(err) => {
                warn!("⚠️ Rejected update request: {err}");
                tracing_ctx.complete_error(&self.metrics, method, "Validation failed");
                return Err(err);
            }
        };

        match self.command.update_item(id, &changes).await {
            Ok(Some(item)) => {
                tracing_ctx.complete_success(
                    &self.metrics,
                    method,
                    "Inventory item updated successfully",
                );

                let response = InventoryItemResponse::from(item);
                info!(
                    "✅ Inventory item updated: {} (ID: {})",
                    response.name, response.id
                );

                Ok(ApiResponse::success(
                    "Inventory item updated successfully",
                    Some(response),
                ))
            }
            Ok(None) => {
                info!("🔍 Inventory item ID={id} not found for update");
                tracing_ctx.complete_not_found(&self.metrics, method, "Inventory item not found");
                Ok(ApiResponse::success("Inventory item not found", None))
            }
            Err(err) => {
                error!("❌ Failed to update inventory item ID={id}: {err:?}");
                tracing_ctx.complete_error(
                    &self.metrics,
                    method,
                    "Failed to update inventory item",
                );
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn delete_item(
        &self,
        id: i32,
    ) -> Result<ApiResponse<Option<InventoryItemResponse>>, ServiceError> {
        info!("🗑️ Deleting inventory item ID: {id}");

        let method = Method::Delete;
        let tracing_ctx = TracingContext::start(
            TRACER_NAME,
            "delete_inventory_item",
            vec![
                KeyValue::new("component", "inventory"),
                KeyValue::new("operation", "delete"),
                KeyValue::new("inventory_item.id", i64::from(id)),
            ],
        );

        match self.command.delete_item(id).await {
            Ok(Some(item)) => {
                tracing_ctx.complete_success(
                    &self.metrics,
                    method,
                    "Inventory item deleted successfully",
                );
                Ok(ApiResponse::success(
                    "Inventory item deleted successfully",
                    Some(InventoryItemResponse::from(item)),
                ))
            }
            Ok(None) => {
                info!("🔍 Inventory item ID={id} not found for delete");
                tracing_ctx.complete_not_found(&self.metrics, method, "Inventory item not found");
                Ok(ApiResponse::success("Inventory item not found", None))
            }
            Err(err) => {
                error!("❌ Failed to delete inventory item ID={id}: {err:?}");
                tracing_ctx.complete_error(
                    &self.metrics,
                    method,
                    "Failed to delete inventory item",
                );
                Err(ServiceError::Repo(err))
            }
        }
    }
}
