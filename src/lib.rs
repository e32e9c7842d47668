//! vehicle-registry - CRUD over vehicle records via HTTP
//!
//! The REST layer in [`rest_api`] talks to storage only through the
//! [`store::VehicleStore`] trait; [`http_server`] and [`cli`] assemble a
//! runnable service around it.

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod rest_api;
pub mod store;

pub use model::Vehicle;
pub use store::{StoreError, StoreResult, VehicleStore};
