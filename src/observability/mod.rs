//! Observability for the vehicle registry
//!
//! Structured logging goes through `tracing`. This module only owns the
//! subscriber setup; request-level spans come from `tower_http`'s trace
//! layer in [`crate::http_server`].

mod logger;

pub use logger::{default_filter, init_logging, LogFormat};
