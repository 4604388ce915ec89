//! huntset - Editing engine for treasure-hunt clue sets
//!
//! This library provides functionality to:
//! - Model hunt sets per level (primary clue, rows of secondary and tertiary pieces)
//! - Export sets to the TypeScript module format consumed by the game tooling
//! - Import such modules back, tolerating hand edits and legacy forms
//! - Edit sets through a pure reducer with bounded undo/redo and persistence

pub mod cli;
pub mod config;
pub mod editor;
pub mod exporter;
pub mod ids;
pub mod importer;
pub mod models;
pub mod reference;
pub mod storage;
pub mod template;

#[cfg(feature = "wasm")]
pub mod wasm;
