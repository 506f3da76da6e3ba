use crate::{
    abstract_trait::{
        DynInventoryItemCommandRepository, DynInventoryItemCommandService,
        DynInventoryItemQueryRepository, DynInventoryItemQueryService,
    },
    repository::InventoryItemRepository,
    service::{InventoryItemCommandService, InventoryItemQueryService},
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub inventory_query: DynInventoryItemQueryService,
    pub inventory_command: DynInventoryItemCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("inventory_query", &"InventoryItemQueryService")
            .field("inventory_command", &"InventoryItemCommandService")
            .finish()
    }
}

/// Storage handles the services are built from.
#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub query_repository: DynInventoryItemQueryRepository,
    pub command_repository: DynInventoryItemCommandRepository,
}

impl DependenciesInjectDeps {
    pub fn from_pool(pool: ConnectionPool) -> Self {
        let InventoryItemRepository { query, command } = InventoryItemRepository::new(pool);

        Self {
            query_repository: query,
            command_repository: command,
        }
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps {
            query_repository,
            command_repository,
        } = deps;

        let inventory_query = Arc::new(InventoryItemQueryService::new(query_repository, registry))
            as DynInventoryItemQueryService;

        let inventory_command =
            Arc::new(InventoryItemCommandService::new(command_repository, registry))
                as DynInventoryItemCommandService;

        Self {
            inventory_query,
            inventory_command,
        }
    }
}
