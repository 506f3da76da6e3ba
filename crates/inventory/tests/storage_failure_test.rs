use async_trait::async_trait;
use inventory::{
    abstract_trait::{InventoryItemCommandRepositoryTrait, InventoryItemQueryRepositoryTrait},
    di::DependenciesInjectDeps,
    domain::{
        normalized::{InventoryItemChanges, NewInventoryItem},
        requests::{CreateInventoryItemRequest, UpdateInventoryItemRequest},
    },
    model::InventoryItem,
    state::AppState,
};
use mockall::{mock, predicate::eq};
use serde_json::json;
use shared::errors::{HttpError, RepositoryError, ServiceError};
use std::sync::Arc;

mock! {
    pub QueryRepo {}

    #[async_trait]
    impl InventoryItemQueryRepositoryTrait for QueryRepo {
        async fn find_all(&self) -> Result<Vec<InventoryItem>, RepositoryError>;
        async fn find_by_id(&self, id: i32) -> Result<Option<InventoryItem>, RepositoryError>;
    }
}

mock! {
    pub CommandRepo {}

    #[async_trait]
    impl InventoryItemCommandRepositoryTrait for CommandRepo {
        async fn create_item(&self, item: &NewInventoryItem) -> Result<InventoryItem, RepositoryError>;
        async fn update_item(
            &self,
            id: i32,
            changes: &InventoryItemChanges,
        ) -> Result<Option<InventoryItem>, RepositoryError>;
        async fn delete_item(&self, id: i32) -> Result<Option<InventoryItem>, RepositoryError>;
    }
}

fn state(query: MockQueryRepo, command: MockCommandRepo) -> AppState {
    AppState::with_deps(DependenciesInjectDeps {
        query_repository: Arc::new(query),
        command_repository: Arc::new(command),
    })
}

fn pool_timeout() -> RepositoryError {
    RepositoryError::Sqlx(sqlx::Error::PoolTimedOut)
}

#[tokio::test]
async fn create_failure_propagates_as_repository_error() {
    let mut command = MockCommandRepo::new();
    command
        .expect_create_item()
        .times(1)
        .returning(|_| Err(pool_timeout()));

    let state = state(MockQueryRepo::new(), command);
    let req: CreateInventoryItemRequest =
        serde_json::from_value(json!({ "name": "Widget", "quantity": 1, "location": "A" }))
            .unwrap();

    let err = state
        .di_container
        .inventory_command
        .create_item(&req)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Repo(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut))
    ));
}

#[tokio::test]
async fn storage_failure_is_reported_generically_over_http() {
    let mut query = MockQueryRepo::new();
    query
        .expect_find_all()
        .times(1)
        .returning(|| Err(pool_timeout()));

    let state = state(query, MockCommandRepo::new());
    let err = state.di_container.inventory_query.find_all().await.unwrap_err();

    match HttpError::from(err) {
        HttpError::Internal(message) => assert_eq!(message, "Database error"),
        other => panic!("unexpected mapping: {other:?}"),
    }
}

#[tokio::test]
async fn lookup_failure_is_not_mistaken_for_not_found() {
    let mut query = MockQueryRepo::new();
    query
        .expect_find_by_id()
        .with(eq(3))
        .times(1)
        .returning(|_| Err(RepositoryError::Custom("connection reset".into())));

    let state = state(query, MockCommandRepo::new());
    let result = state.di_container.inventory_query.find_by_id(3).await;

    assert!(matches!(
        result,
        Err(ServiceError::Repo(RepositoryError::Custom(_)))
    ));
}

#[tokio::test]
async fn rejected_requests_never_call_storage() {
    let mut command = MockCommandRepo::new();
    command.expect_create_item().never();
    command.expect_update_item().never();

    let state = state(MockQueryRepo::new(), command);
    let service = &state.di_container.inventory_command;

    let create: CreateInventoryItemRequest =
        serde_json::from_value(json!({ "name": "Widget", "quantity": -5 })).unwrap();
    assert!(service.create_item(&create).await.unwrap_err().is_validation());

    let update: UpdateInventoryItemRequest =
        serde_json::from_value(json!({ "id": 1, "location": "" })).unwrap();
    assert!(service.update_item(&update).await.unwrap_err().is_validation());

    let missing_id: UpdateInventoryItemRequest =
        serde_json::from_value(json!({ "quantity": 3 })).unwrap();
    assert!(service.update_item(&missing_id).await.unwrap_err().is_validation());
}

#[tokio::test]
async fn delete_passes_the_id_through() {
    let mut command = MockCommandRepo::new();
    command
        .expect_delete_item()
        .with(eq(9))
        .times(1)
        .returning(|_| Ok(None));

    let state = state(MockQueryRepo::new(), command);
    let response = state.di_container.inventory_command.delete_item(9).await.unwrap();

    assert_eq!(response.data, None);
}
