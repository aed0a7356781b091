use serde::{Deserialize, Serialize};

use crate::components::load::Payload;

/// Crew member or passenger seated at a fixed station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personnel {
    pub name: String,
    pub weight: f64,
    pub position: f64,
}

impl Payload for Personnel {
    fn weight(&self) -> f64 {
        self.weight
    }

    fn position(&self) -> f64 {
        self.position
    }
}
