use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error};

use crate::{resources::StorageError, server::structures::ErrorBody, utils::LoadPlanError};

/// Handler error, rendered as a status code plus `{"detail": ...}`.
#[derive(Debug)]
pub enum ApiError {
    /// Failure raised by the load planning core or its store.
    Domain(LoadPlanError),
    /// Request body that is not valid JSON or does not match the schema.
    InvalidBody(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(LoadPlanError::AircraftNotFound(_)) => StatusCode::BAD_REQUEST,
            ApiError::Domain(LoadPlanError::PlanNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Domain(LoadPlanError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::Domain(LoadPlanError::AircraftNotFound(_)) => {
                "Aircraft not found".to_string()
            }
            ApiError::Domain(LoadPlanError::PlanNotFound(_)) => "Plan not found".to_string(),
            ApiError::Domain(LoadPlanError::Storage(e)) => e.to_string(),
            ApiError::InvalidBody(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self.detail());
        }
        (
            status,
            Json(ErrorBody {
                detail: self.detail(),
            }),
        )
            .into_response()
    }
}

impl From<LoadPlanError> for ApiError {
    fn from(err: LoadPlanError) -> Self {
        ApiError::Domain(err)
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::Domain(LoadPlanError::Storage(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!("Rejected request body: {}", rejection.body_text());
        ApiError::InvalidBody(rejection.body_text())
    }
}
