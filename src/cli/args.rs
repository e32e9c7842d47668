//! CLI argument definitions using clap
//!
//! Commands:
//! - vehicle-registry serve --config <path> [--port <port>] [--verbose]
//! - vehicle-registry config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vehicle registry - CRUD over vehicle records via HTTP
#[derive(Parser, Debug)]
#[command(name = "vehicle-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults are used if it is missing)
        #[arg(long, default_value = "./vehicle-registry.json")]
        config: PathBuf,

        /// Override the configured listen port
        #[arg(long)]
        port: Option<u16>,

        /// Enable debug logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the effective configuration and exit
    Config {
        /// Path to configuration file (defaults are used if it is missing)
        #[arg(long, default_value = "./vehicle-registry.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
