use parking_lot::RwLock;

use crate::components::LoadPlan;
use crate::resources::storage::{new_plan_id, PlanStore, StorageError};

/// Volatile plan store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    plans: RwLock<Vec<LoadPlan>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.plans.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.read().is_empty()
    }
}

impl PlanStore for InMemoryStore {
    fn append(&self, mut plan: LoadPlan) -> Result<String, StorageError> {
        plan.id = new_plan_id();
        let id = plan.id.clone();
        self.plans.write().push(plan);
        Ok(id)
    }

    fn list_by_user(&self, user: &str) -> Result<Vec<LoadPlan>, StorageError> {
        Ok(self
            .plans
            .read()
            .iter()
            .filter(|p| p.user == user)
            .cloned()
            .collect())
    }

    fn get(&self, id: &str) -> Result<Option<LoadPlan>, StorageError> {
        Ok(self.plans.read().iter().find(|p| p.id == id).cloned())
    }
}
