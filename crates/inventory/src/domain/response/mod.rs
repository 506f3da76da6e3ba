mod api;
mod inventory_item;

pub use self::api::ApiResponse;
pub use self::inventory_item::InventoryItemResponse;
