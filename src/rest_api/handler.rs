//! # REST API Handler
//!
//! Translates the five vehicle operations into calls on a [`VehicleStore`].
//!
//! Create and update both persist through [`VehicleStore::save`]; they are
//! kept as separate operations so the routing intent stays explicit.

use std::sync::Arc;

use crate::model::Vehicle;
use crate::store::VehicleStore;

use super::errors::{RestError, RestResult};

/// Request handler for vehicle operations
pub struct VehicleHandler<S: VehicleStore + ?Sized> {
    store: Arc<S>,
}

impl<S: VehicleStore + ?Sized> Clone for VehicleHandler<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: VehicleStore + ?Sized> VehicleHandler<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// List every stored vehicle
    pub fn list(&self) -> RestResult<Vec<Vehicle>> {
        tracing::debug!(op = "list", "handling vehicle request");
        Ok(self.store.find_all()?)
    }

    /// Get a single vehicle by id
    pub fn get(&self, id: &str) -> RestResult<Vehicle> {
        tracing::debug!(op = "get", id, "handling vehicle request");
        self.store
            .find_by_id(id)?
            .ok_or_else(|| RestError::NotFound(id.to_string()))
    }

    /// Persist a new vehicle as given
    pub fn create(&self, vehicle: Vehicle) -> RestResult<Vehicle> {
        tracing::debug!(op = "create", id = %vehicle.id, "handling vehicle request");
        Ok(self.store.save(vehicle)?)
    }

    /// Replace the vehicle at `id` with `vehicle`.
    ///
    /// The path id wins over whatever id the body carries. The target does
    /// not have to exist beforehand.
    pub fn update(&self, id: &str, vehicle: Vehicle) -> RestResult<Vehicle> {
        tracing::debug!(op = "update", id, "handling vehicle request");
        if vehicle.has_id() && vehicle.id != id {
            tracing::warn!(
                path_id = id,
                body_id = %vehicle.id,
                "body id differs from path id, using path id"
            );
        }
        Ok(self.store.save(vehicle.with_id(id))?)
    }

    /// Delete the vehicle at `id`. Deleting a missing id succeeds.
    pub fn delete(&self, id: &str) -> RestResult<()> {
        tracing::debug!(op = "delete", id, "handling vehicle request");
        self.store.delete_by_id(id)?;
        Ok(())
    }
}
