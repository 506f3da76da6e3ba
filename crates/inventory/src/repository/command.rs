use crate::{
    abstract_trait::InventoryItemCommandRepositoryTrait,
    domain::{
        normalized::{InventoryItemChanges, NewInventoryItem},
        requests::Patch,
    },
    model::InventoryItem as InventoryItemModel,
    repository::INVENTORY_ITEM_COLUMNS,
};
use async_trait::async_trait;
use chrono::Utc;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::{Postgres, QueryBuilder};
use tracing::{error, info};

pub struct InventoryItemCommandRepository {
    db: ConnectionPool,
}

impl InventoryItemCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

/// Builds `UPDATE ... SET <present columns>, updated_at = now ... RETURNING`.
/// Returns `None` when there is nothing to set.
fn build_update(id: i32, changes: &InventoryItemChanges) -> Option<QueryBuilder<'static, Postgres>> {
    if changes.is_empty() {
        return None;
    }

    let mut builder = QueryBuilder::<Postgres>::new("UPDATE inventory_items SET ");
    let mut set = builder.separated(", ");

    if let Some(name) = &changes.name {
        set.push("name = ");
        set.push_bind_unseparated(name.clone());
    }

    match &changes.description {
        Patch::Untouched => {}
        Patch::Cleared => {
            set.push("description = NULL");
        }
        Patch::Set(description) => {
            set.push("description = ");
            set.push_bind_unseparated(description.clone());
        }
    }

    if let Some(quantity) = changes.quantity {
        set.push("quantity = ");
        set.push_bind_unseparated(quantity);
    }

    if let Some(location) = &changes.location {
        set.push("location = ");
        set.push_bind_unseparated(location.clone());
    }

    set.push("updated_at = ");
    set.push_bind_unseparated(Utc::now());

    builder.push(" WHERE id = ");
    builder.push_bind(id);
    builder.push(format!(" RETURNING {INVENTORY_ITEM_COLUMNS}"));

    Some(builder)
}

#[async_trait]
impl InventoryItemCommandRepositoryTrait for InventoryItemCommandRepository {
    async fn create_item(
        &self,
        item: &NewInventoryItem,
    ) -> Result<InventoryItemModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            INSERT INTO inventory_items (name, description, quantity, location, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {INVENTORY_ITEM_COLUMNS}
            "#
        );

        let result = sqlx::query_as::<_, InventoryItemModel>(&sql)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.quantity)
            .bind(&item.location)
            .bind(item.created_at)
            .bind(item.updated_at)
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to create inventory item {}: {:?}", item.name, err);
                RepositoryError::from(err)
            })?;

        info!(
            "✅ Created inventory item ID {} ({})",
            result.id, result.name
        );
        Ok(result)
    }

    async fn update_item(
        &self,
        id: i32,
        changes: &InventoryItemChanges,
    ) -> Result<Option<InventoryItemModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let Some(mut builder) = build_update(id, changes) else {
            info!("↩️ No fields to update for inventory item ID {}", id);

            let sql =
                format!("SELECT {INVENTORY_ITEM_COLUMNS} FROM inventory_items WHERE id = $1");

            return sqlx::query_as::<_, InventoryItemModel>(&sql)
                .bind(id)
                .fetch_optional(&mut *conn)
                .await
                .map_err(|err| {
                    error!("❌ Failed to read inventory item ID {}: {:?}", id, err);
                    RepositoryError::from(err)
                });
        };

        let result = builder
            .build_query_as::<InventoryItemModel>()
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to update inventory item ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        match &result {
            Some(item) => info!(
                "🔄 Updated inventory item ID {} ({:?})",
                item.id,
                changes.changed_fields()
            ),
            None => info!("🔍 Inventory item ID {} not found for update", id),
        }

        Ok(result)
    }

    async fn delete_item(&self, id: i32) -> Result<Option<InventoryItemModel>, RepositoryError> {
        info!("❌ Deleting inventory item: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!("DELETE FROM inventory_items WHERE id = $1 RETURNING {INVENTORY_ITEM_COLUMNS}");

        let result = sqlx::query_as::<_, InventoryItemModel>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete inventory item {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        match &result {
            Some(item) => info!("✅ Inventory item ID {} permanently deleted", item.id),
            None => info!("🔍 Inventory item ID {} not found for delete", id),
        }

        Ok(result)
    }
}
