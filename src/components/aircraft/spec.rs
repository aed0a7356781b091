use serde::{Deserialize, Serialize};

use crate::utils::ConfigError;

/// Inclusive longitudinal station range the centre of gravity must fall within.
///
/// Serialized as a two element array `[min, max]`. Deserialization rejects
/// pairs where `min > max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct CgLimits {
    pub min: f64,
    pub max: f64,
}

impl CgLimits {
    /// Creates a new limit pair.
    ///
    /// # Returns
    /// A `ConfigError::ValidationError` if `min` exceeds `max` or either bound is NaN.
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(ConfigError::ValidationError(format!(
                "cg_limits [{}, {}] must satisfy min <= max",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Whether `cg` lies within the limits, boundaries included.
    pub fn contains(&self, cg: f64) -> bool {
        self.min <= cg && cg <= self.max
    }
}

impl TryFrom<[f64; 2]> for CgLimits {
    type Error = ConfigError;

    fn try_from(pair: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(pair[0], pair[1])
    }
}

impl From<CgLimits> for [f64; 2] {
    fn from(limits: CgLimits) -> Self {
        [limits.min, limits.max]
    }
}

/// Weight and balance envelope for one aircraft type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftSpec {
    /// Catalog key, matched exactly against `LoadPlan::aircraft`.
    pub name: String,
    /// Maximum gross weight. Advisory only; the CG check does not enforce it.
    pub max_weight: f64,
    /// Allowed CG station range.
    pub cg_limits: CgLimits,
}

impl AircraftSpec {
    pub fn new(name: impl Into<String>, max_weight: f64, cg_limits: CgLimits) -> Self {
        Self {
            name: name.into(),
            max_weight,
            cg_limits,
        }
    }

    pub fn c130j() -> Self {
        Self::new("C-130J", 46700.0, CgLimits { min: 15.0, max: 35.0 })
    }

    pub fn c17() -> Self {
        Self::new("C-17", 170900.0, CgLimits { min: 25.0, max: 45.0 })
    }

    pub fn c5() -> Self {
        Self::new("C-5", 281001.0, CgLimits { min: 30.0, max: 60.0 })
    }
}
