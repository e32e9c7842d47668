//! CLI command implementations

use std::path::Path;

use crate::http_server::HttpServer;
use crate::observability::init_logging;

use super::args::{Cli, Command};
use super::config::ServiceConfig;
use super::errors::CliResult;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            config,
            port,
            verbose,
        } => serve(&config, port, verbose),
        Command::Config { config } => show_config(&config),
    }
}

/// Load config, open the store and serve until shutdown
pub fn serve(config_path: &Path, port: Option<u16>, verbose: bool) -> CliResult<()> {
    let mut config = ServiceConfig::load_or_default(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
    }

    init_logging(verbose, config.logging.format())?;

    tracing::info!(
        config = %config_path.display(),
        backend = ?config.store.backend,
        "starting vehicle registry"
    );

    let store = config.store.open()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(HttpServer::new(config.server, store).start())?;

    Ok(())
}

/// Print the effective configuration
pub fn show_config(config_path: &Path) -> CliResult<()> {
    let config = ServiceConfig::load_or_default(config_path)?;
    println!("{}", render_config(&config)?);
    Ok(())
}

fn render_config(config: &ServiceConfig) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    use crate::cli::CliError;

    #[test]
    fn test_render_config_round_trips() {
        let config = ServiceConfig::default();
        let rendered = render_config(&config).unwrap();
        let parsed: ServiceConfig = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_show_config_with_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(show_config(&dir.path().join("absent.json")).is_ok());
    }

    #[test]
    fn test_serve_fails_fast_on_bad_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vehicle-registry.json");
        fs::write(&path, "not json").unwrap();

        let result = serve(&path, None, false);
        assert!(matches!(result, Err(CliError::ConfigParse { .. })));
    }
}
