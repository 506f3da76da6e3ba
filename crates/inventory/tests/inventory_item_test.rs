mod common;

use common::{InMemoryInventoryStore, app_state};
use inventory::{
    abstract_trait::{DynInventoryItemCommandService, DynInventoryItemQueryService},
    domain::{
        requests::{CreateInventoryItemRequest, UpdateInventoryItemRequest},
        response::InventoryItemResponse,
    },
};
use serde_json::{Value, json};
use shared::errors::{ServiceError, ValidationKind};
use std::{sync::Arc, time::Duration};

struct Services {
    store: Arc<InMemoryInventoryStore>,
    query: DynInventoryItemQueryService,
    command: DynInventoryItemCommandService,
}

fn services() -> Services {
    let store = InMemoryInventoryStore::new();
    let state = app_state(&store);

    Services {
        store,
        query: state.di_container.inventory_query.clone(),
        command: state.di_container.inventory_command.clone(),
    }
}

fn create_req(body: Value) -> CreateInventoryItemRequest {
    serde_json::from_value(body).unwrap()
}

fn update_req(body: Value) -> UpdateInventoryItemRequest {
    serde_json::from_value(body).unwrap()
}

async fn create(s: &Services, body: Value) -> InventoryItemResponse {
    s.command.create_item(&create_req(body)).await.unwrap().data
}

async fn update(s: &Services, body: Value) -> Option<InventoryItemResponse> {
    // Keeps updated_at strictly after created_at on coarse clocks.
    tokio::time::sleep(Duration::from_millis(5)).await;
    s.command.update_item(&update_req(body)).await.unwrap().data
}

fn validation_kinds(err: ServiceError) -> Vec<(String, ValidationKind)> {
    match err {
        ServiceError::Validation(errors) => errors.into_iter().map(|e| (e.field, e.kind)).collect(),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn widget_lifecycle() {
    let s = services();

    let created = create(
        &s,
        json!({ "name": "Widget", "quantity": 50, "location": "Warehouse A" }),
    )
    .await;

    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Widget");
    assert_eq!(created.description, None);
    assert_eq!(created.quantity, 50);
    assert_eq!(created.location, "Warehouse A");
    assert_eq!(created.updated_at, None);

    let updated = update(&s, json!({ "id": 1, "quantity": 75 })).await.unwrap();
    assert_eq!(updated.name, "Widget");
    assert_eq!(updated.quantity, 75);
    assert_eq!(updated.location, "Warehouse A");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at.unwrap() > created.created_at);

    let cleared = update(&s, json!({ "id": 1, "description": null })).await.unwrap();
    assert_eq!(cleared.description, None);

    let deleted = s.command.delete_item(1).await.unwrap();
    assert_eq!(deleted.data, Some(cleared));

    let after = s.query.find_by_id(1).await.unwrap();
    assert_eq!(after.data, None);
    assert_eq!(after.message, "Inventory item not found");
}

#[tokio::test]
async fn create_keeps_quantity_and_leaves_updated_at_null() {
    let s = services();

    for quantity in [0, 1, 9_999] {
        let item = create(
            &s,
            json!({ "name": "Bolt", "description": "M6", "quantity": quantity, "location": "Bin 4" }),
        )
        .await;

        assert_eq!(item.quantity, quantity);
        assert_eq!(item.description.as_deref(), Some("M6"));
        assert_eq!(item.updated_at, None);
    }
}

#[tokio::test]
async fn omitted_description_is_stored_as_null() {
    let s = services();

    let item = create(&s, json!({ "name": "Nut", "quantity": 3, "location": "Bin 1" })).await;

    assert_eq!(s.store.row(item.id).await.unwrap().description, None);
}

#[tokio::test]
async fn partial_update_leaves_other_fields_untouched() {
    let s = services();
    let original = create(
        &s,
        json!({ "name": "Gear", "description": "Steel", "quantity": 10, "location": "Shelf 2" }),
    )
    .await;

    let updated = update(&s, json!({ "id": original.id, "location": "Shelf 9" }))
        .await
        .unwrap();

    assert_eq!(updated.name, original.name);
    assert_eq!(updated.description, original.description);
    assert_eq!(updated.quantity, original.quantity);
    assert_eq!(updated.location, "Shelf 9");
    assert!(updated.updated_at.unwrap() > original.created_at);
}

#[tokio::test]
async fn created_at_survives_repeated_updates() {
    let s = services();
    let original = create(&s, json!({ "name": "Cog", "quantity": 1, "location": "A" })).await;

    for quantity in 2..6 {
        let updated = update(&s, json!({ "id": original.id, "quantity": quantity }))
            .await
            .unwrap();
        assert_eq!(updated.created_at, original.created_at);
    }
}

#[tokio::test]
async fn explicit_null_clears_description_but_omission_keeps_it() {
    let s = services();
    let item = create(
        &s,
        json!({ "name": "Lamp", "description": "Desk lamp", "quantity": 2, "location": "B" }),
    )
    .await;

    let renamed = update(&s, json!({ "id": item.id, "name": "Lamp XL" })).await.unwrap();
    assert_eq!(renamed.description.as_deref(), Some("Desk lamp"));

    let cleared = update(&s, json!({ "id": item.id, "description": null })).await.unwrap();
    assert_eq!(cleared.description, None);
    assert_eq!(s.store.row(item.id).await.unwrap().description, None);
}

#[tokio::test]
async fn quantity_can_drop_to_zero() {
    let s = services();
    let item = create(&s, json!({ "name": "Fuse", "quantity": 12, "location": "C" })).await;

    let updated = update(&s, json!({ "id": item.id, "quantity": 0 })).await.unwrap();

    assert_eq!(updated.quantity, 0);
    assert_eq!(s.store.row(item.id).await.unwrap().quantity, 0);
}

#[tokio::test]
async fn update_without_fields_does_not_touch_updated_at() {
    let s = services();
    let item = create(&s, json!({ "name": "Tape", "quantity": 1, "location": "D" })).await;

    let same = update(&s, json!({ "id": item.id })).await.unwrap();

    assert_eq!(same, item);
}

#[tokio::test]
async fn unknown_ids_yield_absent_results() {
    let s = services();
    create(&s, json!({ "name": "Wire", "quantity": 5, "location": "E" })).await;

    assert_eq!(s.query.find_by_id(42).await.unwrap().data, None);
    assert_eq!(update(&s, json!({ "id": 42, "quantity": 1 })).await, None);

    let deleted = s.command.delete_item(42).await.unwrap();
    assert_eq!(deleted.data, None);
    assert_eq!(s.store.len().await, 1);
}

#[tokio::test]
async fn delete_removes_exactly_one_row() {
    let s = services();
    for name in ["a", "b", "c"] {
        create(&s, json!({ "name": name, "quantity": 1, "location": "F" })).await;
    }
    let before = s.query.find_all().await.unwrap().data;

    let deleted = s.command.delete_item(2).await.unwrap().data.unwrap();
    assert_eq!(deleted.name, "b");

    let after = s.query.find_all().await.unwrap().data;
    assert_eq!(after, vec![before[0].clone(), before[2].clone()]);
}

#[tokio::test]
async fn invalid_create_never_reaches_storage() {
    let s = services();

    let err = s
        .command
        .create_item(&create_req(json!({ "name": "", "quantity": 1.5, "location": "G" })))
        .await
        .unwrap_err();

    assert_eq!(
        validation_kinds(err),
        vec![
            ("name".to_string(), ValidationKind::EmptyString),
            ("quantity".to_string(), ValidationKind::NonIntegerQuantity),
        ]
    );
    assert_eq!(s.store.len().await, 0);
}

#[tokio::test]
async fn invalid_update_leaves_row_unchanged() {
    let s = services();
    let item = create(&s, json!({ "name": "Pipe", "quantity": 4, "location": "H" })).await;

    let err = s
        .command
        .update_item(&update_req(json!({ "id": item.id, "name": "Pipe 2", "quantity": -1 })))
        .await
        .unwrap_err();

    assert_eq!(
        validation_kinds(err),
        vec![("quantity".to_string(), ValidationKind::NegativeQuantity)]
    );

    let row = s.store.row(item.id).await.unwrap();
    assert_eq!(row.name, "Pipe");
    assert_eq!(row.quantity, 4);
    assert_eq!(row.updated_at, None);
}
