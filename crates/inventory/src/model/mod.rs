mod inventory_item;

pub use self::inventory_item::InventoryItem;
