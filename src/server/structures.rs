use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{components::AircraftCatalog, resources::PlanStore};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    /// Where saved plans live.
    pub store: Arc<dyn PlanStore>,
    /// Aircraft envelopes used by `/aircraft` and `/check-cg`.
    pub catalog: Arc<AircraftCatalog>,
}

impl AppState {
    pub fn new(store: Arc<dyn PlanStore>, catalog: AircraftCatalog) -> Self {
        Self {
            store,
            catalog: Arc::new(catalog),
        }
    }
}

/// Body returned by `POST /save`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub status: String,
    pub id: String,
}

impl SaveResponse {
    pub fn saved(id: String) -> Self {
        Self {
            status: "saved".to_string(),
            id,
        }
    }
}

/// Body returned with every error status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
