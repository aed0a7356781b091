pub mod config;
pub mod storage;

pub use config::{ServerConfig, CONFIG_PATH_VAR};
pub use storage::{InMemoryStore, JsonFileStore, PlanDocument, PlanStore, StorageError};
