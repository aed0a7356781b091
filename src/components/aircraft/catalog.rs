use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::components::aircraft::AircraftSpec;
use crate::utils::ConfigError;

/// Source for the aircraft catalog.
/// Either the built-in table (`Programmed`) or a YAML file (`File`).
#[derive(Debug, Clone)]
pub enum CatalogSource {
    Programmed,
    File(PathBuf),
}

/// Raw YAML layout of a catalog file.
#[derive(Debug, Deserialize)]
struct RawCatalog {
    aircraft: Vec<AircraftSpec>,
}

/// Ordered, immutable list of aircraft weight and balance envelopes.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftCatalog {
    specs: Vec<AircraftSpec>,
}

impl Default for AircraftCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AircraftCatalog {
    /// Creates a catalog from a given source.
    ///
    /// # Arguments
    /// * `source` - A `CatalogSource` specifying the built-in table or a YAML file.
    ///
    /// # Returns
    /// A `Result` containing the catalog or an error if the file fails to load or validate.
    pub fn new(source: CatalogSource) -> Result<Self, ConfigError> {
        match source {
            CatalogSource::Programmed => Ok(Self::builtin()),
            CatalogSource::File(path) => Self::from_file(path),
        }
    }

    /// The built-in C-130J, C-17 and C-5 table, in that order.
    pub fn builtin() -> Self {
        Self {
            specs: vec![AircraftSpec::c130j(), AircraftSpec::c17(), AircraftSpec::c5()],
        }
    }

    /// Builds a catalog from explicit specs, rejecting empty lists and duplicate names.
    pub fn from_specs(specs: Vec<AircraftSpec>) -> Result<Self, ConfigError> {
        if specs.is_empty() {
            return Err(ConfigError::ValidationError(
                "aircraft catalog must contain at least one entry".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for spec in &specs {
            if !seen.insert(spec.name.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate aircraft name '{}'",
                    spec.name
                )));
            }
        }

        Ok(Self { specs })
    }

    /// Loads a catalog from a YAML file of the form `aircraft: [{name, max_weight, cg_limits}]`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file_contents = std::fs::read_to_string(path)?;
        let raw: RawCatalog = serde_yaml::from_str(&file_contents)?;
        let catalog = Self::from_specs(raw.aircraft)?;
        info!(
            "Loaded {} aircraft from {}",
            catalog.specs.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn specs(&self) -> &[AircraftSpec] {
        &self.specs
    }

    /// Exact, case-sensitive lookup by name.
    pub fn get(&self, name: &str) -> Option<&AircraftSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }
}
