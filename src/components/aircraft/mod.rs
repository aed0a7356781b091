mod catalog;
mod spec;

pub use catalog::{AircraftCatalog, CatalogSource};
pub use spec::{AircraftSpec, CgLimits};
