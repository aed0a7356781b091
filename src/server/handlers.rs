use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::{
    components::{AircraftSpec, LoadPlan},
    resources::{PlanStore, StorageError},
    server::{
        errors::ApiError,
        extract::JsonBody,
        structures::{AppState, SaveResponse},
    },
    systems::{check_cg, CgReport},
    utils::LoadPlanError,
};

/// Runs a store operation on the blocking pool so file I/O stays off the async workers.
async fn with_store<T, F>(store: &Arc<dyn PlanStore>, op: F) -> Result<T, StorageError>
where
    T: Send + 'static,
    F: FnOnce(&dyn PlanStore) -> Result<T, StorageError> + Send + 'static,
{
    let store = Arc::clone(store);
    tokio::task::spawn_blocking(move || op(store.as_ref())).await?
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn list_aircraft(State(state): State<AppState>) -> Json<Vec<AircraftSpec>> {
    Json(state.catalog.specs().to_vec())
}

pub async fn save_plan(
    State(state): State<AppState>,
    JsonBody(plan): JsonBody<LoadPlan>,
) -> Result<Json<SaveResponse>, ApiError> {
    let user = plan.user.clone();
    let id = with_store(&state.store, move |store| store.append(plan)).await?;
    info!(plan_id = %id, user = %user, "Saved load plan");
    Ok(Json(SaveResponse::saved(id)))
}

pub async fn list_user_plans(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> Result<Json<Vec<LoadPlan>>, ApiError> {
    let plans = with_store(&state.store, move |store| store.list_by_user(&user)).await?;
    Ok(Json(plans))
}

pub async fn get_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
) -> Result<Json<LoadPlan>, ApiError> {
    let lookup_id = plan_id.clone();
    let plan = with_store(&state.store, move |store| store.get(&lookup_id)).await?;
    plan.map(Json)
        .ok_or_else(|| LoadPlanError::PlanNotFound(plan_id).into())
}

pub async fn check_plan_cg(
    State(state): State<AppState>,
    JsonBody(plan): JsonBody<LoadPlan>,
) -> Result<Json<CgReport>, ApiError> {
    let report = check_cg(&plan, &state.catalog)?;
    Ok(Json(report))
}
