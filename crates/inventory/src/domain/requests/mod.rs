mod inventory_item;
mod patch;

pub use self::inventory_item::{CreateInventoryItemRequest, UpdateInventoryItemRequest};
pub use self::patch::Patch;
