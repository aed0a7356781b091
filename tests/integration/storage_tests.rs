use std::sync::Arc;

use loadmaster::resources::{InMemoryStore, JsonFileStore, PlanStore};
use tempfile::TempDir;

use crate::common::{
    assert_same_manifest, create_mixed_plan, create_reference_plan, saved_id, TestAppBuilder,
};

fn exercise_store(store: &dyn PlanStore) {
    let plan = create_mixed_plan("alice");
    let id = store.append(plan.clone()).unwrap();

    let fetched = store.get(&id).unwrap().expect("stored plan");
    assert_same_manifest(&plan, &fetched);
    assert_eq!(fetched.id, id);

    store.append(create_reference_plan("bob")).unwrap();
    assert_eq!(store.list_by_user("alice").unwrap().len(), 1);
    assert_eq!(store.list_by_user("bob").unwrap().len(), 1);
    assert!(store.get("unknown").unwrap().is_none());
}

#[test]
fn test_json_file_store_contract() {
    let dir = TempDir::new().unwrap();
    exercise_store(&JsonFileStore::new(dir.path().join("data.json")));
}

#[test]
fn test_in_memory_store_contract() {
    exercise_store(&InMemoryStore::new());
}

#[test]
fn test_concurrent_appends_within_one_process() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path().join("data.json")));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || store.append(create_reference_plan(&format!("user{}", i % 2))))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    assert_eq!(store.list_by_user("user0").unwrap().len(), 4);
    assert_eq!(store.list_by_user("user1").unwrap().len(), 4);
}

#[tokio::test]
async fn test_saved_plans_visible_through_store() {
    let app = TestAppBuilder::new().with_file_store().build();

    let id = saved_id(&app.post_json("/save", &create_reference_plan("alice")).await.1);
    let stored = app.store.get(&id).unwrap().expect("plan persisted");
    assert_eq!(stored.user, "alice");
}
