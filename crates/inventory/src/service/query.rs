use crate::{
    abstract_trait::{DynInventoryItemQueryRepository, InventoryItemQueryServiceTrait},
    domain::response::{ApiResponse, InventoryItemResponse},
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
use tracing::{error, info};

#[derive(Clone)]
pub struct InventoryItemQueryService {
    query: DynInventoryItemQueryRepository,
    metrics: Arc<Metrics>,
}

impl InventoryItemQueryService {
    pub fn new(query: DynInventoryItemQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Arc::new(Metrics::new());
        metrics.register(
            registry,
            "inventory_query_service",
            "InventoryItemQueryService",
        );

        Self { query, metrics }
    }
}

#[async_trait]
impl InventoryItemQueryServiceTrait for InventoryItemQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<InventoryItemResponse>>, ServiceError> {
        info!("🔍 Listing inventory items");

        let tracing_ctx = TracingContext::start(
            TRACER_NAME,
            "get_inventory_items",
            vec![
                KeyValue::new("component", "inventory"),
                KeyValue::new("operation", "find_all"),
            ],
        );

        let items = match self.query.find_all().await {
            Ok(items) => {
                tracing_ctx.complete_success(
                    &self.metrics,
                    Method::Get,
                    "Inventory items retrieved successfully",
                );
                items
            }
            Err(err) => {
                error!("❌ Failed to list inventory items: {err:?}");
                tracing_ctx.complete_error(
                    &self.metrics,
                    Method::Get,
                    "Failed to list inventory items",
                );
                return Err(ServiceError::Repo(err));
            }
        };

        let data: Vec<InventoryItemResponse> =
            items.into_iter().map(InventoryItemResponse::from).collect();

        Ok(ApiResponse::success(
            "Inventory items retrieved successfully",
            data,
        ))
    }

    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<ApiResponse<Option<InventoryItemResponse>>, ServiceError> {
        info!("🆔 Fetching inventory item ID={id}");

        let tracing_ctx = TracingContext::start(
            TRACER_NAME,
            "get_inventory_item_by_id",
            vec![
                KeyValue::new("component", "inventory"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("inventory_item.id", i64::from(id)),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(item)) => {
                tracing_ctx.complete_success(
                    &self.metrics,
                    Method::Get,
                    "Inventory item retrieved successfully",
                );
                Ok(ApiResponse::success(
                    "Inventory item retrieved successfully",
                    Some(InventoryItemResponse::from(item)),
                ))
            }
            Ok(None) => {
                info!("🔍 Inventory item ID={id} not found");
                tracing_ctx.complete_not_found(
                    &self.metrics,
                    Method::Get,
                    "Inventory item not found",
                );
                Ok(ApiResponse::success("Inventory item not found", None))
            }
            Err(err) => {
                error!("❌ Failed to fetch inventory item ID={id}: {err:?}");
                tracing_ctx.complete_error(
                    &self.metrics,
                    Method::Get,
                    "Failed to fetch inventory item",
                );
                Err(ServiceError::Repo(err))
            }
        }
    }
}
