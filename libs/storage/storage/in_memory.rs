use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use crate::{Database, Storage, StorageBox, StorageConfig, StoreError, StoreResult};
use serde_derive::Deserialize;

/// This storage type is used for testing, data is not persisted to disk but
/// only present in memory
#[derive(Default)]
pub struct InMemoryStorage {
    db: Mutex<Database>,
    writes: AtomicUsize,
}

#[derive(Debug, Deserialize, Default)]
pub struct InMemoryStorageConfig {}

impl StorageConfig for InMemoryStorageConfig {
    type Storage = InMemoryStorage;

    fn to_storage(self) -> eyre::Result<StorageBox> {
        Ok(StorageBox::new(InMemoryStorage::new()))
    }
}

impl Storage for InMemoryStorage {
    fn debug_message(&self) -> String {
        "in memory storage".to_owned()
    }

    fn load_all(&self) -> Database {
        match self.db.lock() {
            Ok(db) => db.clone(),
            Err(_) => {
                tracing::warn!("in-memory store lock was poisoned, returning empty data");
                Database::new()
            }
        }
    }

    fn save_all(&self, db: &Database) -> StoreResult<()> {
        let mut guard = self.db.lock().map_err(|_| StoreError::Poisoned)?;
        *guard = db.clone();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn reset(&self) -> StoreResult<()> {
        self.save_all(&Database::new())
    }
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_database(db: Database) -> Self {
        InMemoryStorage {
            db: Mutex::new(db),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of `save_all` calls so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}
