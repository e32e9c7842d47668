//! CLI module for the vehicle registry
//!
//! Provides command-line interface for:
//! - serve: Load config, open the store, run the HTTP server
//! - config: Print the effective configuration

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve, show_config};
pub use config::{LoggingConfig, ServiceConfig, StoreBackend, StoreConfig};
pub use errors::{CliError, CliResult};
