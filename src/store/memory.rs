//! In-memory vehicle store.

use std::sync::RwLock;

use crate::model::Vehicle;

use super::{assign_id, remove, upsert, StoreResult, VehicleStore};

/// Vehicle store holding records in insertion order
#[derive(Debug, Default)]
pub struct InMemoryVehicleStore {
    records: RwLock<Vec<Vehicle>>,
}

impl InMemoryVehicleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `vehicles`
    pub fn with_vehicles(vehicles: Vec<Vehicle>) -> Self {
        let mut records = Vec::with_capacity(vehicles.len());
        for vehicle in vehicles {
            upsert(&mut records, assign_id(vehicle));
        }
        Self {
            records: RwLock::new(records),
        }
    }
}

impl VehicleStore for InMemoryVehicleStore {
    fn find_all(&self) -> StoreResult<Vec<Vehicle>> {
        Ok(self.records.read()?.clone())
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Option<Vehicle>> {
        Ok(self.records.read()?.iter().find(|r| r.id == id).cloned())
    }

    fn save(&self, vehicle: Vehicle) -> StoreResult<Vehicle> {
        let vehicle = assign_id(vehicle);
        upsert(&mut *self.records.write()?, vehicle.clone());
        Ok(vehicle)
    }

    fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        remove(&mut *self.records.write()?, id);
        Ok(())
    }
}
