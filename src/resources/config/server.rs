use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::CatalogSource;
use crate::utils::ConfigError;

pub const CONFIG_PATH_VAR: &str = "LOADMASTER_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// JSON file holding saved plans.
    pub data_file: PathBuf,
    /// Optional YAML aircraft catalog; the built-in table is used when absent.
    pub catalog_file: Option<PathBuf>,
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            data_file: PathBuf::from("data.json"),
            catalog_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config = serde_yaml::from_reader(file)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Defaults, then the YAML file named by `LOADMASTER_CONFIG`, then per-field
    /// environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same resolution as `from_env` but reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.with_overrides(lookup)
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("LOADMASTER_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("LOADMASTER_PORT") {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidParameter {
                    name: "LOADMASTER_PORT".to_string(),
                    value: port.clone(),
                })?;
        }
        if let Some(data_file) = lookup("LOADMASTER_DATA_FILE") {
            self.data_file = PathBuf::from(data_file);
        }
        if let Some(catalog) = lookup("LOADMASTER_CATALOG") {
            self.catalog_file = Some(PathBuf::from(catalog));
        }
        if let Some(level) = lookup("LOADMASTER_LOG") {
            self.log_level = level;
        }
        Ok(self)
    }

    pub fn catalog_source(&self) -> CatalogSource {
        match &self.catalog_file {
            Some(path) => CatalogSource::File(path.clone()),
            None => CatalogSource::Programmed,
        }
    }
}
