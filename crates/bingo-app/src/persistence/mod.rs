//! Platform storage for the game snapshot.
//!
//! Native builds keep the snapshot in a JSON file under eframe's per-app
//! storage directory. Web builds keep it in `localStorage`. When neither is
//! usable the game falls back to an in-memory store and is lost on exit.

pub(crate) use self::platform::open_store;

mod platform;
