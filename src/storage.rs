//! Persistence of the editor state
//!
//! The whole [`EditorState`] is written as one JSON record under
//! [`STORAGE_KEY`]. Reading is tolerant: a missing, unparsable or partially
//! valid record is reconciled against [`EditorState::default`] field by field,
//! so a corrupt entry never prevents the editor from starting.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::editor::EditorState;
use crate::ids;
use crate::models::{HuntSet, Language, Level, LevelSettings};

/// Key of the persisted editor record.
pub const STORAGE_KEY: &str = "zeithheditor_v1";

/// Persistence write error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    /// File I/O error
    #[error("Failed to write state: {0}")]
    Io(#[from] io::Error),
    /// Serialization error
    #[error("Failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A string key-value store, the shape of browser local storage.
pub trait Storage: fmt::Debug {
    /// Read a value. Unreadable entries read as absent.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage, used by tests and the wasm surface.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    // Every write is a single map call, so a poisoned map is still whole
    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries().remove(key);
        Ok(())
    }
}

/// Directory-backed storage: one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable state file");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        // Write then rename so a crash never leaves a truncated record
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// Serialize and store the state under [`STORAGE_KEY`].
pub fn save_state(storage: &dyn Storage, state: &EditorState) -> Result<(), StorageError> {
    let raw = serde_json::to_string(state)?;
    storage.set(STORAGE_KEY, &raw)
}

/// Remove the persisted record.
pub fn clear_state(storage: &dyn Storage) -> Result<(), StorageError> {
    storage.remove(STORAGE_KEY)
}

/// Load the persisted state, falling back to the default on any problem.
///
/// Restored set ids are reported to [`ids::observe`].
pub fn load_state(storage: &dyn Storage) -> EditorState {
    match storage.get(STORAGE_KEY) {
        Some(raw) => parse_state(&raw),
        None => EditorState::default(),
    }
}

/// Parse a raw persisted record. Never fails.
pub fn parse_state(raw: &str) -> EditorState {
    let state = match serde_json::from_str::<Value>(raw) {
        Ok(value) => merge_with_default(&value),
        Err(e) => {
            warn!(error = %e, "corrupt persisted state, starting empty");
            EditorState::default()
        }
    };
    for id in state.all_ids() {
        ids::observe(id);
    }
    state
}

/// Reconcile a saved record against the default state, one field at a time.
///
/// Unknown level keys are dropped, a level whose set list does not parse
/// falls back to empty, and fields of the wrong type keep their defaults.
pub fn merge_with_default(saved: &Value) -> EditorState {
    let mut state = EditorState::default();
    let Some(saved) = saved.as_object() else {
        warn!("persisted state is not an object, starting empty");
        return state;
    };

    if let Some(level_sets) = saved.get("levelSets").and_then(Value::as_object) {
        for (key, value) in level_sets {
            let Some(level) = Level::from_key(key) else {
                debug!(level = %key, "dropping unknown level");
                continue;
            };
            let sets = match serde_json::from_value::<Vec<HuntSet>>(value.clone()) {
                Ok(mut sets) => {
                    for set in &mut sets {
                        set.normalize();
                    }
                    sets
                }
                Err(e) => {
                    warn!(level = %key, error = %e, "corrupt set list, level reset");
                    Vec::new()
                }
            };
            state.level_sets.insert(level, sets);
        }
    }

    if let Some(level_active) = saved.get("levelActive").and_then(Value::as_object) {
        for (key, value) in level_active {
            if let Some(level) = Level::from_key(key) {
                state.level_active.insert(level, value.as_u64());
            }
        }
    }

    if let Some(level) = saved
        .get("currentLevel")
        .and_then(Value::as_str)
        .and_then(Level::from_key)
    {
        state.current_level = level;
    }

    if let Some(dark) = saved.get("isDarkMode").and_then(Value::as_bool) {
        state.is_dark_mode = dark;
    }

    if let Some(language) = saved
        .get("language")
        .and_then(Value::as_str)
        .and_then(Language::from_key)
    {
        state.language = language;
    }

    if let Some(settings) = saved.get("levelSettings").and_then(Value::as_object) {
        for (key, value) in settings {
            let Some(level) = Level::from_key(key) else {
                continue;
            };
            match serde_json::from_value::<LevelSettings>(value.clone()) {
                Ok(s) => {
                    state.level_settings.insert(level, s);
                }
                Err(e) => debug!(level = %key, error = %e, "ignoring level settings"),
            }
        }
    }

    state
}
