use std::{fmt, io};

/// Errors reported by a [`SnapshotStore`].
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum StoreError {
    /// Reading or writing the backing storage failed.
    #[display("storage I/O failed: {_0}")]
    Io(io::Error),
    /// The backing storage cannot be used in this environment.
    #[display("storage unavailable: {reason}")]
    #[from(ignore)]
    Unavailable {
        /// Why the storage is unavailable.
        reason: String,
    },
}

impl StoreError {
    /// Creates an [`StoreError::Unavailable`] error.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

/// A single durable slot holding the serialized snapshot.
///
/// Implementations must treat each [`save`](Self::save) as a whole-value
/// replacement: a later [`load`](Self::load) sees either the previous value or
/// the new one, never a partial write.
pub trait SnapshotStore: fmt::Debug {
    /// Reads the stored snapshot, or `None` if nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Replaces the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be written.
    fn save(&mut self, snapshot: &str) -> Result<(), StoreError>;
}

impl<S> SnapshotStore for Box<S>
where
    S: SnapshotStore + ?Sized,
{
    fn load(&self) -> Result<Option<String>, StoreError> {
        (**self).load()
    }

    fn save(&mut self, snapshot: &str) -> Result<(), StoreError> {
        (**self).save(snapshot)
    }
}

/// An in-memory store.
///
/// Used when no durable storage is available, and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        Self {
            slot: Some(snapshot.into()),
        }
    }

    /// Returns the stored snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, snapshot: &str) -> Result<(), StoreError> {
        self.slot = Some(snapshot.to_owned());
        Ok(())
    }
}
