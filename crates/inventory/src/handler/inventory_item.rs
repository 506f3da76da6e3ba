use crate::{
    abstract_trait::{DynInventoryItemCommandService, DynInventoryItemQueryService},
    domain::{
        requests::{CreateInventoryItemRequest, UpdateInventoryItemRequest},
        response::{ApiResponse, InventoryItemResponse},
    },
    middleware::{path::PathId, validate::ValidatedJson},
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/inventory-items",
    tag = "Inventory",
    responses(
        (status = 200, description = "All inventory items ordered by id", body = ApiResponse<Vec<InventoryItemResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_inventory_items(
    Extension(service): Extension<DynInventoryItemQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/inventory-items/{id}",
    tag = "Inventory",
    params(("id" = i32, Path, description = "Inventory item ID")),
    responses(
        (status = 200, description = "Inventory item, `data` is null when the id is unknown", body = ApiResponse<InventoryItemResponse>),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_inventory_item(
    Extension(service): Extension<DynInventoryItemQueryService>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/inventory-items",
    tag = "Inventory",
    request_body = CreateInventoryItemRequest,
    responses(
        (status = 201, description = "Inventory item created", body = ApiResponse<InventoryItemResponse>),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_inventory_item(
    Extension(service): Extension<DynInventoryItemCommandService>,
    ValidatedJson(body): ValidatedJson<CreateInventoryItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_item(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/inventory-items/{id}",
    tag = "Inventory",
    params(("id" = i32, Path, description = "Inventory item ID")),
    request_body = UpdateInventoryItemRequest,
    responses(
        (status = 200, description = "Inventory item updated, `data` is null when the id is unknown", body = ApiResponse<InventoryItemResponse>),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_inventory_item(
    Extension(service): Extension<DynInventoryItemCommandService>,
    PathId(id): PathId,
    ValidatedJson(mut body): ValidatedJson<UpdateInventoryItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = Some(id);
    let response = service.update_item(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/inventory-items/{id}",
    tag = "Inventory",
    params(("id" = i32, Path, description = "Inventory item ID")),
    responses(
        (status = 200, description = "Deleted inventory item, `data` is null when the id is unknown", body = ApiResponse<InventoryItemResponse>),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_inventory_item(
    Extension(service): Extension<DynInventoryItemCommandService>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_item(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn inventory_item_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/api/inventory-items",
            get(get_inventory_items).post(create_inventory_item),
        )
        .route(
            "/api/inventory-items/{id}",
            get(get_inventory_item)
                .patch(update_inventory_item)
                .delete(delete_inventory_item),
        )
        .layer(Extension(app_state.di_container.inventory_query.clone()))
        .layer(Extension(app_state.di_container.inventory_command.clone()))
}
