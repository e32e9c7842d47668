//! Log subscriber setup.
//!
//! One subscriber per process, installed by the binary before the server
//! starts. `RUST_LOG` always takes precedence over the built-in filter.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact human-readable lines
    Compact,
    /// One JSON object per line
    Json,
}

/// Filter directives used when `RUST_LOG` is unset
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "vehicle_registry=debug,tower_http=debug,info"
    } else {
        "vehicle_registry=info,tower_http=info"
    }
}

/// Install the global subscriber.
///
/// Fails if a subscriber has already been installed.
pub fn init_logging(verbose: bool, format: LogFormat) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(false),
            )
            .try_init(),
    }
}
