use std::sync::Arc;

use crate::{
    config::Config,
    db::{InMemoryPlanStore, PlanStore},
    services::Catalog,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub plans: Arc<dyn PlanStore>,
}

impl AppState {
    pub fn new(catalog: Catalog, plans: Arc<dyn PlanStore>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            plans,
        }
    }

    /// State backed by the in-memory plan store
    pub fn in_memory(catalog: Catalog, config: &Config) -> Self {
        Self::new(
            catalog,
            Arc::new(InMemoryPlanStore::new(config.plan_history_limit)),
        )
    }
}
