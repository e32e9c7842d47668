//! # Vehicle REST API Module
//!
//! Provides HTTP endpoints for CRUD operations on vehicles, backed by a
//! [`VehicleStore`](crate::store::VehicleStore).
//!
//! | Method | Path                | Operation |
//! |--------|---------------------|-----------|
//! | GET    | `/api/vehicles`     | list      |
//! | GET    | `/api/vehicles/:id` | get       |
//! | POST   | `/api/vehicle`      | create    |
//! | PUT    | `/api/vehicle/:id`  | update    |
//! | DELETE | `/api/vehicle/:id`  | delete    |

pub mod errors;
pub mod handler;
pub mod server;

pub use errors::{ErrorResponse, RestError, RestResult};
pub use handler::VehicleHandler;
pub use server::RestServer;
