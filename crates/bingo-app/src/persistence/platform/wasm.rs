//! `localStorage`-backed snapshot store for web builds.
use std::fmt;

use bingo_game::{MemoryStore, SnapshotStore, StoreError};

use crate::{STORAGE_KEY, state::BoxedStore};

/// Opens the browser's `localStorage`, falling back to memory if it is blocked.
pub(crate) fn open_store() -> BoxedStore {
    match LocalStorageStore::open(STORAGE_KEY) {
        Ok(store) => Box::new(store),
        Err(err) => {
            log::warn!("{err}, calls will not be saved");
            Box::new(MemoryStore::new())
        }
    }
}

pub(crate) struct LocalStorageStore {
    storage: web_sys::Storage,
    key: &'static str,
}

impl fmt::Debug for LocalStorageStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalStorageStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl LocalStorageStore {
    pub(crate) fn open(key: &'static str) -> Result<Self, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::unavailable("no window"))?;
        let storage = window
            .local_storage()
            .map_err(|_| StoreError::unavailable("localStorage access denied"))?
            .ok_or_else(|| StoreError::unavailable("localStorage not supported"))?;
        Ok(Self { storage, key })
    }
}

impl SnapshotStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(self.key)
            .map_err(|_| StoreError::unavailable("localStorage read failed"))
    }

    fn save(&mut self, snapshot: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(self.key, snapshot)
            .map_err(|_| StoreError::unavailable("localStorage write rejected"))
    }
}
