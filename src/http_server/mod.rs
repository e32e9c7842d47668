//! # HTTP Server Module
//!
//! Wires the vehicle REST API and the health check into one Axum server.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/vehicles`, `/api/vehicle` - Vehicle CRUD

pub mod config;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
