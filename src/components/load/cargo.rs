use serde::{Deserialize, Serialize};

use crate::components::load::Payload;

/// A single palletised or loose cargo item on the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CargoItem {
    pub name: String,
    /// Weight in the same unit used across the plan.
    pub weight: f64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// Longitudinal station of the item's centroid.
    pub position: f64,
    /// Free-form cargo category tag, e.g. "pallet" or "vehicle".
    pub cargo_type: String,
    pub is_hazmat: bool,
}

impl Payload for CargoItem {
    fn weight(&self) -> f64 {
        self.weight
    }

    fn position(&self) -> f64 {
        self.position
    }
}
