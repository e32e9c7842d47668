//! Service configuration file
//!
//! ```json
//! {
//!   "server":  { "host": "0.0.0.0", "port": 8080, "cors_origins": [] },
//!   "store":   { "backend": "file", "path": "./data/vehicles.json" },
//!   "logging": { "json": false }
//! }
//! ```
//!
//! Every field is optional.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::observability::LogFormat;
use crate::store::{FileVehicleStore, InMemoryVehicleStore, VehicleStore};

use super::errors::{CliError, CliResult};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which store implementation backs the service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Records are lost on restart
    #[default]
    Memory,
    /// Records persist to a JSON file
    File,
}

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Backing file for the `file` backend
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("./data/vehicles.json")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: default_store_path(),
        }
    }
}

impl StoreConfig {
    /// Open the configured store
    pub fn open(&self) -> CliResult<Arc<dyn VehicleStore>> {
        let store: Arc<dyn VehicleStore> = match self.backend {
            StoreBackend::Memory => Arc::new(InMemoryVehicleStore::new()),
            StoreBackend::File => Arc::new(FileVehicleStore::open(&self.path)?),
        };
        Ok(store)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    pub fn format(&self) -> LogFormat {
        if self.json {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

impl ServiceConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config: ServiceConfig =
            serde_json::from_str(&content).map_err(|source| CliError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file, or use defaults if it does not exist
    pub fn load_or_default(path: &Path) -> CliResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(CliError::ConfigInvalid("server.host must not be empty".into()));
        }

        if self.store.backend == StoreBackend::File && self.store.path.as_os_str().is_empty() {
            return Err(CliError::ConfigInvalid(
                "store.path is required for the file backend".into(),
            ));
        }

        Ok(())
    }
}
