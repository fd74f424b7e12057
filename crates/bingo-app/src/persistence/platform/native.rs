//! File-backed snapshot store for desktop builds.
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use bingo_game::{MemoryStore, SnapshotStore, StoreError};

use crate::{APP_ID, STORAGE_KEY, state::BoxedStore};

/// Opens the snapshot file in the app's storage directory.
pub(crate) fn open_store() -> BoxedStore {
    match eframe::storage_dir(APP_ID) {
        Some(dir) => {
            let store = FileStore::new(dir.join(format!("{STORAGE_KEY}.json")));
            log::info!("saving calls to {}", store.path().display());
            Box::new(store)
        }
        None => {
            log::warn!("no storage directory available, calls will not be saved");
            Box::new(MemoryStore::new())
        }
    }
}

#[derive(Debug)]
pub(crate) struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    // Whole-file replace: write a sibling file, then rename it over the target.
    fn save(&mut self, snapshot: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, snapshot)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
