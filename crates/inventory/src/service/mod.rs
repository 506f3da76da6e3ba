mod command;
mod query;

pub use self::command::InventoryItemCommandService;
pub use self::query::InventoryItemQueryService;

pub(crate) const TRACER_NAME: &str = "inventory-service";
