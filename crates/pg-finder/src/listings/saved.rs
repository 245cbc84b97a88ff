use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracing::{info, warn};

use super::catalog::Catalog;
use super::domain::{Listing, ListingId};

/// Key under which the saved listing ids are stored.
pub const SAVED_LISTINGS_KEY: &str = "savedProperties";

/// Generic string-keyed JSON storage, the equivalent of browser local storage.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;
    fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;

    /// Replaces the value under `key` with `apply(current)` while holding the
    /// storage lock, so concurrent updates never overwrite each other.
    fn update(
        &self,
        key: &str,
        apply: &mut dyn FnMut(Option<Value>) -> Value,
    ) -> Result<(), StorageError>;
}

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, Value>>,
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let guard = self.values.lock().expect("storage mutex poisoned");
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let mut guard = self.values.lock().expect("storage mutex poisoned");
        guard.insert(key.to_string(), value);
        Ok(())
    }

    fn update(
        &self,
        key: &str,
        apply: &mut dyn FnMut(Option<Value>) -> Value,
    ) -> Result<(), StorageError> {
        let mut guard = self.values.lock().expect("storage mutex poisoned");
        let next = apply(guard.remove(key));
        guard.insert(key.to_string(), next);
        Ok(())
    }
}

/// Storage persisted as a single JSON object on disk. A missing file reads as
/// empty; every `set` rewrites the whole file.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, Value>, StorageError> {
        match std::fs::read(&self.path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_all(&self, values: &BTreeMap<String, Value>) -> Result<(), StorageError> {
        std::fs::write(&self.path, serde_json::to_vec_pretty(values)?)?;
        Ok(())
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let _guard = self.lock.lock().expect("storage mutex poisoned");
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let _guard = self.lock.lock().expect("storage mutex poisoned");
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value);
        self.write_all(&values)
    }

    fn update(
        &self,
        key: &str,
        apply: &mut dyn FnMut(Option<Value>) -> Value,
    ) -> Result<(), StorageError> {
        let _guard = self.lock.lock().expect("storage mutex poisoned");
        let mut values = self.read_all()?;
        let next = apply(values.remove(key));
        values.insert(key.to_string(), next);
        self.write_all(&values)
    }
}

/// Saved ("favourited") listing ids, kept in insertion order.
pub struct SavedListings<S: ?Sized> {
    storage: Arc<S>,
}

impl<S: KeyValueStorage + ?Sized> SavedListings<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// A stored value that is not a list of ids reads as empty.
    pub fn ids(&self) -> Result<Vec<ListingId>, StorageError> {
        Ok(decode_ids(self.storage.get(SAVED_LISTINGS_KEY)?))
    }

    pub fn is_saved(&self, id: ListingId) -> Result<bool, StorageError> {
        Ok(self.ids()?.contains(&id))
    }

    /// Adds or removes `id`, returning whether it is saved afterwards.
    pub fn toggle(&self, id: ListingId) -> Result<bool, StorageError> {
        let mut saved = false;
        self.storage.update(SAVED_LISTINGS_KEY, &mut |current| {
            let mut ids = decode_ids(current);
            if let Some(position) = ids.iter().position(|existing| *existing == id) {
                ids.remove(position);
                saved = false;
            } else {
                ids.push(id);
                saved = true;
            }
            encode_ids(&ids)
        })?;

        info!(listing_id = %id, saved, "saved listings updated");
        Ok(saved)
    }

    /// Catalog listings that are saved, in catalog order. Ids no longer in the
    /// catalog are skipped.
    pub fn details(&self, catalog: &Catalog) -> Result<Vec<Listing>, StorageError> {
        let ids = self.ids()?;
        Ok(catalog
            .listings()
            .iter()
            .filter(|listing| ids.contains(&listing.id))
            .cloned()
            .collect())
    }
}

fn decode_ids(value: Option<Value>) -> Vec<ListingId> {
    let Some(value) = value else {
        return Vec::new();
    };

    match serde_json::from_value::<Vec<ListingId>>(value) {
        Ok(ids) => ids,
        Err(err) => {
            warn!(error = %err, "ignoring malformed saved listings value");
            Vec::new()
        }
    }
}

fn encode_ids(ids: &[ListingId]) -> Value {
    Value::Array(ids.iter().map(|id| Value::from(id.0)).collect())
}
