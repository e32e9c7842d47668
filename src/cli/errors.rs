//! CLI-specific error types
//!
//! All CLI errors are fatal: `main` prints them and exits non-zero.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing_subscriber::util::TryInitError;

use crate::store::StoreError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file exists but could not be read
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration file is not valid JSON for [`ServiceConfig`](super::ServiceConfig)
    #[error("Invalid config JSON in {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration parsed but holds unusable values
    #[error("Invalid config: {0}")]
    ConfigInvalid(String),

    /// Vehicle store could not be opened
    #[error("Failed to open store: {0}")]
    Store(#[from] StoreError),

    /// Log subscriber could not be installed
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] TryInitError),

    /// Output encoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Runtime, bind or serve failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            CliError::ConfigRead { .. }
            | CliError::ConfigParse { .. }
            | CliError::ConfigInvalid(_) => "VEHICLE_CLI_CONFIG_ERROR",
            CliError::Store(_) => "VEHICLE_CLI_STORE_ERROR",
            CliError::Logging(_) => "VEHICLE_CLI_LOGGING_ERROR",
            CliError::Json(_) | CliError::Io(_) => "VEHICLE_CLI_IO_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(
            CliError::ConfigInvalid("x".to_string()).code(),
            "VEHICLE_CLI_CONFIG_ERROR"
        );
        assert_eq!(
            CliError::Store(StoreError::LockPoisoned).code(),
            "VEHICLE_CLI_STORE_ERROR"
        );
        assert_eq!(
            CliError::from(io::Error::new(io::ErrorKind::AddrInUse, "in use")).code(),
            "VEHICLE_CLI_IO_ERROR"
        );
    }

    #[test]
    fn test_config_read_mentions_path() {
        let err = CliError::ConfigRead {
            path: PathBuf::from("/etc/vr.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/etc/vr.json"));
    }
}
