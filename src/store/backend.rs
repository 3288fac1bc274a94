//! String key/value persistence, the shape of a browser's local storage.
//!
//! Stores hold serialized values only; serialization formats belong to
//! the stores themselves.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;

/// A persistent string key/value backend.
///
/// Implementations must treat `get` of an unknown key as `None`, never an
/// error; the stores above this layer handle absent data as empty state.
pub trait StorageBackend: Send {
    /// Read the value for `key`, if present and readable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, overwriting any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Remove `key`. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str);
}

/// File-backed storage: one file per key under a data directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Some(value),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read stored value");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(err) = fs::create_dir_all(&self.dir) {
            tracing::error!(error = %err, "failed to create data directory");
            return;
        }
        if let Err(err) = fs::write(self.path_for(key), value) {
            tracing::error!(key, error = %err, "failed to persist value");
        }
    }

    fn remove(&mut self, key: &str) {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => tracing::warn!(key, error = %err, "failed to remove stored value"),
        }
    }
}

/// In-memory storage for tests.
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, e.g. to simulate pre-existing (or corrupt) state.
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.values.lock().insert(key.to_string(), value.to_string());
        storage
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.lock().insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.lock().remove(key);
    }
}
