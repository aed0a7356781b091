use approx::assert_relative_eq;
use loadmaster::{
    components::{AircraftCatalog, LoadPlan},
    systems::{calculate_cg, check_cg},
    utils::LoadPlanError,
};

use crate::common::{
    assert_report_valid, create_mixed_plan, create_reference_plan, create_test_aircraft,
    create_test_pallet, create_test_person,
};

#[test]
fn test_reference_plan_on_c130j() {
    let catalog = AircraftCatalog::builtin();
    let plan = create_reference_plan("alice");

    let report = check_cg(&plan, &catalog).unwrap();
    assert_report_valid(&plan, &report);
    assert_relative_eq!(report.total_weight, 1200.0);
    assert_relative_eq!(report.moment, 26000.0);
    assert_relative_eq!(report.cg, 26000.0 / 1200.0);
    assert!(report.within_limits);
}

#[test]
fn test_mixed_plan_matches_hand_calculation() {
    let catalog = AircraftCatalog::builtin();
    let plan = create_mixed_plan("bob");

    let weights = [4500.0, 1200.0, 3800.0, 95.0, 88.0];
    let stations = [28.0, 41.5, 35.0, 5.0, 5.0];
    let total: f64 = weights.iter().sum();
    let moment: f64 = weights.iter().zip(stations.iter()).map(|(w, s)| w * s).sum();

    let report = check_cg(&plan, &catalog).unwrap();
    assert_report_valid(&plan, &report);
    assert_relative_eq!(report.total_weight, total);
    assert_relative_eq!(report.moment, moment, epsilon = 1e-6);
    assert_relative_eq!(report.cg, moment / total, epsilon = 1e-9);
    // ~32.0, inside the C-17 envelope [25, 45]
    assert!(report.within_limits);
}

#[test]
fn test_same_load_different_aircraft() {
    let catalog = AircraftCatalog::builtin();
    let mut plan = LoadPlan::new("carol", "C-130J").with_cargo(create_test_pallet(2000.0, 27.0));

    assert!(check_cg(&plan, &catalog).unwrap().within_limits);

    plan.aircraft = "C-5".to_string();
    let report = check_cg(&plan, &catalog).unwrap();
    assert_eq!(report.cg, 27.0);
    assert!(!report.within_limits);
}

#[test]
fn test_forward_heavy_load_out_of_limits() {
    let catalog = AircraftCatalog::builtin();
    let plan = LoadPlan::new("dave", "C-17")
        .with_cargo(create_test_pallet(6000.0, 12.0))
        .with_personnel(create_test_person("Pilot", 90.0, 4.0));

    let report = check_cg(&plan, &catalog).unwrap();
    assert_report_valid(&plan, &report);
    assert!(report.cg < report.limits.min);
    assert!(!report.within_limits);
}

#[test]
fn test_unknown_aircraft_produces_no_report() {
    let catalog = AircraftCatalog::builtin();
    let plan = LoadPlan::new("erin", "An-124").with_cargo(create_test_pallet(100.0, 30.0));

    assert!(matches!(
        check_cg(&plan, &catalog),
        Err(LoadPlanError::AircraftNotFound(ref name)) if name == "An-124"
    ));
}

#[test]
fn test_empty_plan_against_custom_aircraft() {
    let spec = create_test_aircraft();
    let plan = LoadPlan::new("frank", &spec.name);

    let report = calculate_cg(&plan, &spec);
    assert_report_valid(&plan, &report);
    assert_eq!(report.cg, 0.0);
    assert!(report.within_limits);
}
