pub mod plans;

pub use plans::{InMemoryPlanStore, NewPlan, PlanStore};
