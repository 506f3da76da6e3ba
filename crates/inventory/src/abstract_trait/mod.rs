pub mod inventory_item;

pub use self::inventory_item::repository::{
    DynInventoryItemCommandRepository, DynInventoryItemQueryRepository,
    InventoryItemCommandRepositoryTrait, InventoryItemQueryRepositoryTrait,
};
pub use self::inventory_item::service::{
    DynInventoryItemCommandService, DynInventoryItemQueryService,
    InventoryItemCommandServiceTrait, InventoryItemQueryServiceTrait,
};
