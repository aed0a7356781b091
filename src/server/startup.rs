use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::{
    components::AircraftCatalog,
    resources::{JsonFileStore, ServerConfig},
    server::{handlers, structures::AppState},
    utils::ConfigError,
};

/// Builds the HTTP router over `state`.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/aircraft", get(handlers::list_aircraft))
        .route("/save", post(handlers::save_plan))
        .route("/plans/:user", get(handlers::list_user_plans))
        .route("/plan/:id", get(handlers::get_plan))
        .route("/check-cg", post(handlers::check_plan_cg))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Loads the catalog and opens the JSON plan store named by `config`.
pub fn setup_state(config: &ServerConfig) -> Result<AppState, ConfigError> {
    let catalog = AircraftCatalog::new(config.catalog_source())?;
    info!(
        "Aircraft catalog: {}",
        catalog
            .specs()
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let store = JsonFileStore::new(&config.data_file);
    Ok(AppState::new(Arc::new(store), catalog))
}
