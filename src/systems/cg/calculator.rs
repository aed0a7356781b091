use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::components::{AircraftCatalog, AircraftSpec, CgLimits, LoadPlan};
use crate::utils::LoadPlanError;

/// One plotted mass: `x` is the station, `y` the weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadPoint {
    pub x: f64,
    pub y: f64,
}

/// Result of a weight and balance check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CgReport {
    pub cg: f64,
    pub within_limits: bool,
    pub limits: CgLimits,
    pub moment: f64,
    pub total_weight: f64,
    /// Cargo points followed by personnel points, in manifest order.
    pub points: Vec<LoadPoint>,
}

// --- Pure Calculation Logic ---

/// Computes the centre of gravity of `plan` against an already resolved aircraft.
///
/// # Arguments
/// * `plan` - The load plan; its `aircraft` field is not consulted.
/// * `spec` - The aircraft envelope to check against.
///
/// # Returns
/// The `CgReport`. A plan with zero total weight reports a CG of 0.
pub fn calculate_cg(plan: &LoadPlan, spec: &AircraftSpec) -> CgReport {
    let mut total_weight = 0.0;
    let mut moment = 0.0;
    let mut points = Vec::with_capacity(plan.cargo.len() + plan.personnel.len());

    for payload in plan.payloads() {
        total_weight += payload.weight();
        moment += payload.moment();
        points.push(LoadPoint {
            x: payload.position(),
            y: payload.weight(),
        });
    }

    let cg = if total_weight == 0.0 {
        0.0
    } else {
        moment / total_weight
    };
    let limits = spec.cg_limits;

    CgReport {
        cg,
        within_limits: limits.contains(cg),
        limits,
        moment,
        total_weight,
        points,
    }
}

/// Resolves `plan.aircraft` in the catalog and computes the CG report.
///
/// # Returns
/// `LoadPlanError::AircraftNotFound` when the name has no exact catalog match.
pub fn check_cg(plan: &LoadPlan, catalog: &AircraftCatalog) -> Result<CgReport, LoadPlanError> {
    let spec = catalog.get(&plan.aircraft).ok_or_else(|| {
        debug!("No catalog entry for aircraft '{}'", plan.aircraft);
        LoadPlanError::AircraftNotFound(plan.aircraft.clone())
    })?;

    Ok(calculate_cg(plan, spec))
}
