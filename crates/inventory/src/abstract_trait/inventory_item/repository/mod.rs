mod command;
mod query;

pub use self::command::{DynInventoryItemCommandRepository, InventoryItemCommandRepositoryTrait};
pub use self::query::{DynInventoryItemQueryRepository, InventoryItemQueryRepositoryTrait};
