mod command;
mod query;

pub use self::command::{DynInventoryItemCommandService, InventoryItemCommandServiceTrait};
pub use self::query::{DynInventoryItemQueryService, InventoryItemQueryServiceTrait};
