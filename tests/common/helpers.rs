use serde_json::Value;

use loadmaster::components::LoadPlan;

/// Parses a JSON value returned by the server into a plan
pub fn plan_from_value(value: &Value) -> LoadPlan {
    serde_json::from_value(value.clone()).expect("response is a LoadPlan")
}

/// Extracts the list of plans from a `/plans/{user}` response
pub fn plans_from_value(value: &Value) -> Vec<LoadPlan> {
    serde_json::from_value(value.clone()).expect("response is a list of LoadPlan")
}

/// Pulls the `id` field out of a `/save` response
pub fn saved_id(value: &Value) -> String {
    assert_eq!(value["status"], "saved");
    value["id"].as_str().expect("id is a string").to_string()
}
