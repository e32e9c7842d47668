//! # REST API HTTP Server
//!
//! Axum routes for the vehicle endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use crate::model::Vehicle;
use crate::store::VehicleStore;

use super::errors::RestError;
use super::handler::VehicleHandler;

/// REST API server state
pub struct RestServer<S: VehicleStore + ?Sized> {
    handler: VehicleHandler<S>,
}

impl<S: VehicleStore + ?Sized + 'static> RestServer<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            handler: VehicleHandler::new(store),
        }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        let state = Arc::new(self);

        Router::new()
            .route("/api/vehicles", get(list_handler::<S>))
            .route("/api/vehicles/:id", get(get_handler::<S>))
            .route("/api/vehicle", post(create_handler::<S>))
            .route(
                "/api/vehicle/:id",
                put(update_handler::<S>).delete(delete_handler::<S>),
            )
            .with_state(state)
    }
}

/// List vehicles handler
async fn list_handler<S: VehicleStore + ?Sized + 'static>(
    State(server): State<Arc<RestServer<S>>>,
) -> Result<Json<Vec<Vehicle>>, RestError> {
    let vehicles = server.handler.list()?;
    Ok(Json(vehicles))
}

/// Get single vehicle handler
async fn get_handler<S: VehicleStore + ?Sized + 'static>(
    State(server): State<Arc<RestServer<S>>>,
    Path(id): Path<String>,
) -> Result<Json<Vehicle>, RestError> {
    let vehicle = server.handler.get(&id)?;
    Ok(Json(vehicle))
}

/// Create vehicle handler
async fn create_handler<S: VehicleStore + ?Sized + 'static>(
    State(server): State<Arc<RestServer<S>>>,
    body: Result<Json<Vehicle>, JsonRejection>,
) -> Result<Json<Vehicle>, RestError> {
    let Json(vehicle) = body?;
    let saved = server.handler.create(vehicle)?;
    Ok(Json(saved))
}

/// Update vehicle handler
async fn update_handler<S: VehicleStore + ?Sized + 'static>(
    State(server): State<Arc<RestServer<S>>>,
    Path(id): Path<String>,
    body: Result<Json<Vehicle>, JsonRejection>,
) -> Result<Json<Vehicle>, RestError> {
    let Json(vehicle) = body?;
    let saved = server.handler.update(&id, vehicle)?;
    Ok(Json(saved))
}

/// Delete vehicle handler
async fn delete_handler<S: VehicleStore + ?Sized + 'static>(
    State(server): State<Arc<RestServer<S>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, RestError> {
    server.handler.delete(&id)?;
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryVehicleStore;

    #[test]
    fn test_server_creation() {
        let server = RestServer::new(Arc::new(InMemoryVehicleStore::new()));
        let _router = server.router();
    }

    #[test]
    fn test_server_accepts_trait_object() {
        let store: Arc<dyn VehicleStore> = Arc::new(InMemoryVehicleStore::new());
        let _router = RestServer::new(store).router();
    }
}
