//! # Vehicle Store
//!
//! The persistence boundary consumed by the REST handler. Any engine that
//! can list, look up, upsert and delete vehicles by id can sit behind
//! [`VehicleStore`].

mod errors;
mod file;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use file::FileVehicleStore;
pub use memory::InMemoryVehicleStore;

use uuid::Uuid;

use crate::model::Vehicle;

/// Storage capability set for vehicle records
pub trait VehicleStore: Send + Sync {
    /// All vehicles, in storage order
    fn find_all(&self) -> StoreResult<Vec<Vehicle>>;

    /// Vehicle with the given id, if any
    fn find_by_id(&self, id: &str) -> StoreResult<Option<Vehicle>>;

    /// Insert or replace a vehicle keyed by its id.
    ///
    /// Returns the record as persisted, including any assigned id.
    fn save(&self, vehicle: Vehicle) -> StoreResult<Vehicle>;

    /// Remove the vehicle with the given id. Missing ids are not an error.
    fn delete_by_id(&self, id: &str) -> StoreResult<()>;
}

/// Give a vehicle without an id a fresh UUID
pub(crate) fn assign_id(mut vehicle: Vehicle) -> Vehicle {
    if !vehicle.has_id() {
        vehicle.id = Uuid::new_v4().to_string();
    }
    vehicle
}

/// Replace the record sharing `vehicle.id` in place, or append it
pub(crate) fn upsert(records: &mut Vec<Vehicle>, vehicle: Vehicle) {
    match records.iter_mut().find(|r| r.id == vehicle.id) {
        Some(existing) => *existing = vehicle,
        None => records.push(vehicle),
    }
}

/// Remove the record with `id`. Returns whether anything was removed.
pub(crate) fn remove(records: &mut Vec<Vehicle>, id: &str) -> bool {
    let before = records.len();
    records.retain(|r| r.id != id);
    records.len() != before
}
