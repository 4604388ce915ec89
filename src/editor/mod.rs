//! Editing engine
//!
//! [`reduce`] is the pure transition function. [`Editor`] wraps it with a
//! bounded undo/redo [`History`] and best-effort persistence through a
//! [`Storage`] backend.

mod action;
mod history;
mod reducer;
mod state;

pub use action::{Action, PieceField};
pub use history::{History, DEFAULT_CAPACITY};
pub use reducer::{move_item, reduce};
pub use state::EditorState;

use std::fmt;
use std::path::Path;

use tracing::{info, warn};

use crate::ids;
use crate::importer::{self, ImportError};
use crate::storage::{self, Storage};
use crate::template::{self, Template, TemplateError};

/// Editor session: current state, history and an optional storage backend.
pub struct Editor {
    state: EditorState,
    history: History<EditorState>,
    storage: Option<Box<dyn Storage>>,
}

impl Editor {
    /// An in-memory editor with the default history capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: EditorState::default(),
            history: History::new(capacity),
            storage: None,
        }
    }

    /// Open an editor on a storage backend, restoring the persisted state.
    pub fn open(storage: Box<dyn Storage>, capacity: usize) -> Self {
        let state = storage::load_state(storage.as_ref());
        Self {
            state,
            history: History::new(capacity),
            storage: Some(storage),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History<EditorState> {
        &self.history
    }

    /// Apply one action and persist the result.
    pub fn dispatch(&mut self, action: Action) -> &EditorState {
        match &action {
            Action::Undo => {
                if let Some(previous) = self.history.undo(&self.state) {
                    self.state = previous;
                }
            }
            Action::Redo => {
                if let Some(next) = self.history.redo(&self.state) {
                    self.state = next;
                }
            }
            _ => {
                if action.records_history() {
                    self.history.record(self.state.clone());
                }
                if let Action::ImportSets { sets } = &action {
                    for set in sets {
                        ids::observe(set.id);
                    }
                }
                self.state = reduce(&self.state, &action);
            }
        }

        if matches!(action, Action::ClearStorage) {
            self.history.clear();
            if let Some(storage) = &self.storage {
                if let Err(e) = storage::clear_state(storage.as_ref()) {
                    warn!(error = %e, "failed to clear persisted state");
                }
            }
        } else {
            self.persist();
        }

        &self.state
    }

    /// Import a file into the level in focus, replacing its sets.
    ///
    /// Returns the number of sets imported. The state is unchanged on error.
    pub fn import_file(&mut self, path: &Path) -> Result<usize, ImportError> {
        let sets = importer::import_file(path)?;
        let count = sets.len();
        info!(path = %path.display(), sets = count, level = %self.state.current_level, "importing");
        self.dispatch(Action::ImportSets { sets });
        Ok(count)
    }

    /// Load a template: switch to its level and replace that level's sets.
    ///
    /// Returns the number of sets loaded. The state is unchanged on error.
    pub fn load_template(&mut self, text: &str) -> Result<usize, TemplateError> {
        let template = template::parse_template(text)?;
        Ok(self.apply_template(template))
    }

    /// Dispatch an already parsed template.
    pub fn apply_template(&mut self, template: Template) -> usize {
        let count = template.sets.len();
        info!(level = %template.level, sets = count, "loading template");
        self.dispatch(Action::SetLevel {
            level: template.level,
        });
        self.dispatch(Action::ImportSets {
            sets: template.sets,
        });
        count
    }

    fn persist(&self) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage::save_state(storage.as_ref(), &self.state) {
                warn!(error = %e, "failed to persist state");
            }
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("current_level", &self.state.current_level)
            .field("undo", &self.history.undo_len())
            .field("redo", &self.history.redo_len())
            .field("storage", &self.storage)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Level;
    use crate::storage::{MemoryStorage, STORAGE_KEY};
    use std::sync::Arc;

    /// Shares one MemoryStorage between the editor and the test.
    #[derive(Debug, Clone, Default)]
    struct Shared(Arc<MemoryStorage>);

    impl Storage for Shared {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }
        fn set(&self, key: &str, value: &str) -> Result<(), storage::StorageError> {
            self.0.set(key, value)
        }
        fn remove(&self, key: &str) -> Result<(), storage::StorageError> {
            self.0.remove(key)
        }
    }

    fn mad_space_editor() -> Editor {
        let mut editor = Editor::new();
        editor.dispatch(Action::SetLevel {
            level: Level::MadSpace,
        });
        editor
    }

    #[test]
    fn test_undo_redo_add_set() {
        let mut editor = mad_space_editor();
        editor.dispatch(Action::AddSet);
        editor.dispatch(Action::AddSet);
        assert_eq!(editor.state().current_sets().len(), 2);

        editor.dispatch(Action::Undo);
        assert_eq!(editor.state().current_sets().len(), 1);
        editor.dispatch(Action::Undo);
        assert!(editor.state().current_sets().is_empty());
        assert!(!editor.can_undo());

        editor.dispatch(Action::Redo);
        editor.dispatch(Action::Redo);
        assert_eq!(editor.state().current_sets().len(), 2);
        assert!(!editor.can_redo());
    }

    #[test]
    fn test_selection_not_recorded() {
        let mut editor = mad_space_editor();
        editor.dispatch(Action::AddSet);
        editor.dispatch(Action::SelectSet { id: None });
        editor.dispatch(Action::ToggleDarkMode);
        assert_eq!(editor.history().undo_len(), 1);
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut editor = mad_space_editor();
        editor.dispatch(Action::AddSet);
        editor.dispatch(Action::Undo);
        assert!(editor.can_redo());
        editor.dispatch(Action::AddSet);
        assert!(!editor.can_redo());
    }

    #[test]
    fn test_history_capacity() {
        let mut editor = Editor::with_capacity(3);
        editor.dispatch(Action::SetLevel {
            level: Level::MadSpace,
        });
        for _ in 0..6 {
            editor.dispatch(Action::AddSet);
        }
        let mut undone = 0;
        while editor.can_undo() {
            editor.dispatch(Action::Undo);
            undone += 1;
        }
        assert_eq!(undone, 3);
        assert_eq!(editor.state().current_sets().len(), 3);
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut editor = mad_space_editor();
        let before = editor.state().clone();
        editor.dispatch(Action::Undo);
        editor.dispatch(Action::Redo);
        assert_eq!(editor.state(), &before);
    }

    #[test]
    fn test_persists_every_action() {
        let shared = Shared::default();
        let mut editor = Editor::open(Box::new(shared.clone()), 10);
        editor.dispatch(Action::SetLevel {
            level: Level::DryLagoon,
        });
        editor.dispatch(Action::AddSet);

        let reopened = Editor::open(Box::new(shared.clone()), 10);
        assert_eq!(reopened.state(), editor.state());
        assert_eq!(reopened.state().current_level, Level::DryLagoon);
    }

    /// Storage that rejects every write.
    #[derive(Debug)]
    struct ReadOnly;

    impl Storage for ReadOnly {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), storage::StorageError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }
        fn remove(&self, _key: &str) -> Result<(), storage::StorageError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    #[test]
    fn test_failed_writes_keep_memory_state() {
        let mut editor = Editor::open(Box::new(ReadOnly), 10);
        editor.dispatch(Action::SetLevel {
            level: Level::MadSpace,
        });
        let state = editor.dispatch(Action::AddSet);
        assert_eq!(state.current_level, Level::MadSpace);
        assert_eq!(state.current_sets().len(), 1);
        assert!(editor.can_undo());

        editor.dispatch(Action::Undo);
        assert!(editor.state().current_sets().is_empty());
        editor.dispatch(Action::ClearStorage);
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_clear_storage() {
        let shared = Shared::default();
        let mut editor = Editor::open(Box::new(shared.clone()), 10);
        editor.dispatch(Action::SetLevel {
            level: Level::MadSpace,
        });
        editor.dispatch(Action::AddSet);
        editor.dispatch(Action::ToggleDarkMode);
        assert!(shared.get(STORAGE_KEY).is_some());

        editor.dispatch(Action::ClearStorage);
        assert!(shared.get(STORAGE_KEY).is_none());
        assert!(!editor.can_undo());
        assert!(editor.state().is_dark_mode);
        assert_eq!(editor.state().current_level, Level::PumpkinHill);
    }

    #[test]
    fn test_load_template() {
        let mut editor = Editor::new();
        let count = editor
            .load_template(r#"{"level": "EggQuarters", "sets": [{"id": 9, "p1Name": "Egg"}]}"#)
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(editor.state().current_level, Level::EggQuarters);
        assert_eq!(editor.state().active_id(Level::EggQuarters), Some(9));
        // One undo step reverts the import
        editor.dispatch(Action::Undo);
        assert!(editor.state().sets(Level::EggQuarters).is_empty());
    }

    #[test]
    fn test_bad_template_leaves_state() {
        let mut editor = mad_space_editor();
        editor.dispatch(Action::AddSet);
        let before = editor.state().clone();
        assert!(editor.load_template(r#"{"sets": []}"#).is_err());
        assert_eq!(editor.state(), &before);
    }
}
