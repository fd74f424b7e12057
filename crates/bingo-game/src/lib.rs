//! Bingo call tracking.
//!
//! This crate holds the game-state side of the bingo caller: the ledger of
//! called numbers, its durable snapshot form, and a session that ties the
//! ledger to an injected storage backend.
//!
//! # Overview
//!
//! - [`Ledger`]: Called numbers plus newest-first call history, with add, undo
//!   and clear transitions.
//! - [`Snapshot`]: The serialized record written after each transition.
//! - [`SnapshotStore`]: The load/save capability a [`Session`] persists through.
//! - [`Session`]: A ledger bound to a store, parsing operator input and saving
//!   after every change.
//!
//! # Examples
//!
//! ```
//! use bingo_game::{MemoryStore, Session};
//!
//! let mut session = Session::restore(MemoryStore::new());
//! session.submit("B12").unwrap();
//! session.submit("20").unwrap();
//! assert!(session.submit("b-12").is_err()); // already called
//!
//! assert_eq!(session.undo().map(|n| n.value()), Some(20));
//! assert_eq!(session.ledger().len(), 1);
//! ```

pub use self::{
    ledger::{DuplicateCall, Ledger},
    session::{CallError, Session},
    snapshot::Snapshot,
    store::{MemoryStore, SnapshotStore, StoreError},
};

mod ledger;
mod session;
mod snapshot;
mod store;
