mod command;
mod query;

pub use self::command::InventoryItemCommandRepository;
pub use self::query::InventoryItemQueryRepository;

use crate::abstract_trait::{DynInventoryItemCommandRepository, DynInventoryItemQueryRepository};
use shared::config::ConnectionPool;
use std::sync::Arc;

pub(crate) const INVENTORY_ITEM_COLUMNS: &str =
    "id, name, description, quantity, location, created_at, updated_at";

#[derive(Clone)]
pub struct InventoryItemRepository {
    pub query: DynInventoryItemQueryRepository,
    pub command: DynInventoryItemCommandRepository,
}

impl InventoryItemRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(InventoryItemQueryRepository::new(pool.clone()))
            as DynInventoryItemQueryRepository;

        let command = Arc::new(InventoryItemCommandRepository::new(pool))
            as DynInventoryItemCommandRepository;

        Self { query, command }
    }
}
