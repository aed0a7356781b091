use loadmaster::components::{AircraftSpec, CargoItem, CgLimits, LoadPlan, Personnel};

/// Creates a standard 463L pallet at the given station
pub fn create_test_pallet(weight: f64, position: f64) -> CargoItem {
    CargoItem {
        name: "463L pallet".to_string(),
        weight,
        length: 2.74,
        width: 2.24,
        height: 2.44,
        position,
        cargo_type: "pallet".to_string(),
        is_hazmat: false,
    }
}

/// Creates a hazmat item, e.g. a fuel bladder
pub fn create_test_hazmat(weight: f64, position: f64) -> CargoItem {
    CargoItem {
        name: "Fuel bladder".to_string(),
        cargo_type: "fuel".to_string(),
        is_hazmat: true,
        ..create_test_pallet(weight, position)
    }
}

pub fn create_test_person(name: &str, weight: f64, position: f64) -> Personnel {
    Personnel {
        name: name.to_string(),
        weight,
        position,
    }
}

/// Reference plan: 1000 at station 20 plus 200 at station 30 on a C-130J
pub fn create_reference_plan(user: &str) -> LoadPlan {
    LoadPlan::new(user, "C-130J")
        .with_cargo(create_test_pallet(1000.0, 20.0))
        .with_personnel(create_test_person("Loadmaster", 200.0, 30.0))
}

/// A mixed manifest spread along a C-17 cargo bay
pub fn create_mixed_plan(user: &str) -> LoadPlan {
    LoadPlan::new(user, "C-17")
        .with_cargo(create_test_pallet(4500.0, 28.0))
        .with_cargo(create_test_hazmat(1200.0, 41.5))
        .with_cargo(create_test_pallet(3800.0, 35.0))
        .with_personnel(create_test_person("Pilot", 95.0, 5.0))
        .with_personnel(create_test_person("Co-pilot", 88.0, 5.0))
}

/// A custom aircraft with limits that straddle zero
pub fn create_test_aircraft() -> AircraftSpec {
    AircraftSpec::new(
        "Test Lifter",
        10000.0,
        CgLimits::new(-10.0, 10.0).expect("valid limits"),
    )
}
