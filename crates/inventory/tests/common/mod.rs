#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use inventory::{
    abstract_trait::{InventoryItemCommandRepositoryTrait, InventoryItemQueryRepositoryTrait},
    di::DependenciesInjectDeps,
    domain::normalized::{InventoryItemChanges, NewInventoryItem},
    model::InventoryItem,
    state::AppState,
};
use shared::errors::RepositoryError;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Table-like store with serial ids, used in place of Postgres.
#[derive(Default)]
pub struct InMemoryInventoryStore {
    rows: Mutex<Vec<InventoryItem>>,
    next_id: Mutex<i32>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }

    pub async fn row(&self, id: i32) -> Option<InventoryItem> {
        self.rows.lock().await.iter().find(|r| r.id == id).cloned()
    }
}

#[async_trait]
impl InventoryItemQueryRepositoryTrait for InMemoryInventoryStore {
    async fn find_all(&self) -> Result<Vec<InventoryItem>, RepositoryError> {
        let mut rows = self.rows.lock().await.clone();
        rows.sort_by_key(|r| r.id);
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<InventoryItem>, RepositoryError> {
        Ok(self.row(id).await)
    }
}

#[async_trait]
impl InventoryItemCommandRepositoryTrait for InMemoryInventoryStore {
    async fn create_item(&self, item: &NewInventoryItem) -> Result<InventoryItem, RepositoryError> {
        let id = {
            let mut next_id = self.next_id.lock().await;
            *next_id += 1;
            *next_id
        };

        let row = InventoryItem {
            id,
            name: item.name.clone(),
            description: item.description.clone(),
            quantity: item.quantity,
            location: item.location.clone(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        };

        self.rows.lock().await.push(row.clone());
        Ok(row)
    }

    async fn update_item(
        &self,
        id: i32,
        changes: &InventoryItemChanges,
    ) -> Result<Option<InventoryItem>, RepositoryError> {
        let mut rows = self.rows.lock().await;
        let Some(row) = rows.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        if changes.is_empty() {
            return Ok(Some(row.clone()));
        }

        if let Some(name) = &changes.name {
            row.name = name.clone();
        }
        row.description = changes.description.clone().apply(row.description.take());
        if let Some(quantity) = changes.quantity {
            row.quantity = quantity;
        }
        if let Some(location) = &changes.location {
            row.location = location.clone();
        }
        row.updated_at = Some(Utc::now());

        Ok(Some(row.clone()))
    }

    async fn delete_item(&self, id: i32) -> Result<Option<InventoryItem>, RepositoryError> {
        let mut rows = self.rows.lock().await;
        let position = rows.iter().position(|r| r.id == id);
        Ok(position.map(|index| rows.remove(index)))
    }
}

pub fn deps(store: &Arc<InMemoryInventoryStore>) -> DependenciesInjectDeps {
    DependenciesInjectDeps {
        query_repository: store.clone(),
        command_repository: store.clone(),
    }
}

pub fn app_state(store: &Arc<InMemoryInventoryStore>) -> AppState {
    AppState::with_deps(deps(store))
}
