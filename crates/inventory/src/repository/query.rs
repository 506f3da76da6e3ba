use crate::{
    abstract_trait::InventoryItemQueryRepositoryTrait, model::InventoryItem as InventoryItemModel,
    repository::INVENTORY_ITEM_COLUMNS,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct InventoryItemQueryRepository {
    db: ConnectionPool,
}

impl InventoryItemQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InventoryItemQueryRepositoryTrait for InventoryItemQueryRepository {
    async fn find_all(&self) -> Result<Vec<InventoryItemModel>, RepositoryError> {
        info!("🔍 Fetching all inventory items");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let sql = format!("SELECT {INVENTORY_ITEM_COLUMNS} FROM inventory_items ORDER BY id ASC");

        let items = sqlx::query_as::<_, InventoryItemModel>(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch inventory items: {:?}", e);
                RepositoryError::from(e)
            })?;

        info!("✅ Fetched {} inventory items", items.len());
        Ok(items)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<InventoryItemModel>, RepositoryError> {
        info!("🆔 Fetching inventory item by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!("SELECT {INVENTORY_ITEM_COLUMNS} FROM inventory_items WHERE id = $1");

        let item = sqlx::query_as::<_, InventoryItemModel>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch inventory item {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        Ok(item)
    }
}
