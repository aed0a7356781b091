use std::io;
use thiserror::Error;

use crate::resources::StorageError;

#[derive(Error, Debug)]
pub enum LoadPlanError {
    #[error("Aircraft not found: {0}")]
    AircraftNotFound(String),

    #[error("Plan not found: {0}")]
    PlanNotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    #[error("Invalid parameter '{name}' with value '{value}'")]
    InvalidParameter { name: String, value: String },
}
