//! Vehicle registry entry point
//!
//! Parses arguments and dispatches to the CLI module. Errors go to stderr
//! with their code and the process exits non-zero.

use vehicle_registry::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}: {}", e.code(), e);
        std::process::exit(1);
    }
}
