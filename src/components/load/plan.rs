use serde::{Deserialize, Serialize};

use crate::components::load::{CargoItem, Payload, Personnel};

/// A user's load plan for one aircraft.
///
/// `id` is empty until the plan is persisted; stores overwrite whatever the
/// client supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadPlan {
    pub user: String,
    /// Must match an `AircraftSpec::name` for CG checks to succeed.
    pub aircraft: String,
    pub cargo: Vec<CargoItem>,
    pub personnel: Vec<Personnel>,
    #[serde(default)]
    pub id: String,
}

impl LoadPlan {
    pub fn new(user: impl Into<String>, aircraft: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            aircraft: aircraft.into(),
            cargo: Vec::new(),
            personnel: Vec::new(),
            id: String::new(),
        }
    }

    pub fn with_cargo(mut self, item: CargoItem) -> Self {
        self.cargo.push(item);
        self
    }

    pub fn with_personnel(mut self, person: Personnel) -> Self {
        self.personnel.push(person);
        self
    }

    /// Every mass aboard: cargo first, then personnel, each in manifest order.
    pub fn payloads(&self) -> impl Iterator<Item = &dyn Payload> + '_ {
        self.cargo
            .iter()
            .map(|c| c as &dyn Payload)
            .chain(self.personnel.iter().map(|p| p as &dyn Payload))
    }
}
