//! JSON-file-backed vehicle store.
//!
//! Records live in memory and the full list is rewritten to disk after
//! every mutation. Writes go to a sibling temp file first and are then
//! renamed over the target, so a crash mid-write leaves the previous
//! contents intact.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::model::Vehicle;

use super::{assign_id, remove, upsert, StoreError, StoreResult, VehicleStore};

/// Vehicle store persisted as a pretty-printed JSON array
#[derive(Debug)]
pub struct FileVehicleStore {
    path: PathBuf,
    records: RwLock<Vec<Vehicle>>,
}

impl FileVehicleStore {
    /// Open the store at `path`, creating parent directories as needed.
    ///
    /// A missing file starts an empty store. A file that does not parse
    /// as a vehicle list is an error.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let records: Vec<Vehicle> = if path.exists() {
            let file = File::open(&path).map_err(|e| StoreError::io(&path, e))?;
            serde_json::from_reader(BufReader::new(file))
                .map_err(|e| StoreError::serialization(&path, e))?
        } else {
            Vec::new()
        };

        tracing::debug!(path = %path.display(), "opened vehicle store");

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, records: &[Vehicle]) -> StoreResult<()> {
        let tmp_path = self.path.with_extension("json.tmp");

        let file = File::create(&tmp_path).map_err(|e| StoreError::io(&tmp_path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, records)
            .map_err(|e| StoreError::serialization(&tmp_path, e))?;
        writer.flush().map_err(|e| StoreError::io(&tmp_path, e))?;
        drop(writer);

        fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::io(&self.path, e))
    }
}

impl VehicleStore for FileVehicleStore {
    fn find_all(&self) -> StoreResult<Vec<Vehicle>> {
        Ok(self.records.read()?.clone())
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Option<Vehicle>> {
        Ok(self.records.read()?.iter().find(|r| r.id == id).cloned())
    }

    fn save(&self, vehicle: Vehicle) -> StoreResult<Vehicle> {
        let vehicle = assign_id(vehicle);
        let mut records = self.records.write()?;
        let mut next = records.clone();
        upsert(&mut next, vehicle.clone());
        self.persist(&next)?;
        *records = next;
        Ok(vehicle)
    }

    fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        let mut records = self.records.write()?;
        let mut next = records.clone();
        if remove(&mut next, id) {
            self.persist(&next)?;
            *records = next;
        }
        Ok(())
    }
}
