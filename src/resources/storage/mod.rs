mod errors;
mod json_file;
mod memory;

pub use errors::StorageError;
pub use json_file::{JsonFileStore, PlanDocument};
pub use memory::InMemoryStore;

use crate::components::LoadPlan;

/// Durable, append-only collection of load plans.
///
/// Implementations assign the id; whatever `plan.id` holds on entry is discarded.
pub trait PlanStore: Send + Sync {
    /// Stores `plan` under a freshly generated id and returns that id.
    fn append(&self, plan: LoadPlan) -> Result<String, StorageError>;

    /// All plans whose `user` matches exactly, in insertion order.
    fn list_by_user(&self, user: &str) -> Result<Vec<LoadPlan>, StorageError>;

    fn get(&self, id: &str) -> Result<Option<LoadPlan>, StorageError>;
}

pub(crate) fn new_plan_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
