pub mod aircraft;
pub mod load;

pub use aircraft::{AircraftCatalog, AircraftSpec, CatalogSource, CgLimits};
pub use load::{CargoItem, LoadPlan, Payload, Personnel};
