//! Shared library module for the Bingo Caller app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub const APP_ID: &str = "io.github.gifnksm.bingo-caller";
pub const APP_NAME: &str = "Bingo Caller";
pub const STORAGE_KEY: &str = "bingo-tracker-state";
pub const RECENT_CALLS_LEN: usize = 3;
pub const INITIAL_WINDOW_SIZE: (f32, f32) = (640.0, 720.0);
pub const MIN_WINDOW_SIZE: (f32, f32) = (360.0, 420.0);

pub use self::app::BingoApp;

pub mod action;
pub mod action_handler;
pub mod app;
pub mod persistence;
pub mod state;
pub mod ui;
pub mod version;
pub mod view_model_builder;
