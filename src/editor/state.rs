//! Whole-application editor state

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::{HuntSet, Language, Level, LevelSettings};

/// Everything the editor persists: every level's sets and selection, the
/// level in focus, and UI preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    pub level_sets: BTreeMap<Level, Vec<HuntSet>>,
    /// Selected set id per level; may name a set that no longer exists.
    pub level_active: BTreeMap<Level, Option<u64>>,
    pub current_level: Level,
    pub is_dark_mode: bool,
    pub language: Language,
    pub level_settings: BTreeMap<Level, LevelSettings>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            level_sets: Level::ALL.into_iter().map(|l| (l, Vec::new())).collect(),
            level_active: Level::ALL.into_iter().map(|l| (l, None)).collect(),
            current_level: Level::default(),
            is_dark_mode: false,
            language: Language::default(),
            level_settings: BTreeMap::new(),
        }
    }
}

impl EditorState {
    /// Sets of a level, in display order.
    pub fn sets(&self, level: Level) -> &[HuntSet] {
        self.level_sets.get(&level).map_or(&[], Vec::as_slice)
    }

    /// Sets of the level in focus.
    pub fn current_sets(&self) -> &[HuntSet] {
        self.sets(self.current_level)
    }

    pub fn active_id(&self, level: Level) -> Option<u64> {
        self.level_active.get(&level).copied().flatten()
    }

    /// The selected set of the level in focus, if it still exists.
    pub fn active_set(&self) -> Option<&HuntSet> {
        let id = self.active_id(self.current_level)?;
        self.current_sets().iter().find(|s| s.id == id)
    }

    pub fn find_set(&self, id: u64) -> Option<&HuntSet> {
        self.current_sets().iter().find(|s| s.id == id)
    }

    /// Non-empty primary names used in the level in focus.
    pub fn used_p1s(&self) -> HashSet<String> {
        self.current_sets()
            .iter()
            .filter(|s| !s.p1_name.is_empty())
            .map(|s| s.p1_name.clone())
            .collect()
    }

    pub fn settings(&self, level: Level) -> Option<&LevelSettings> {
        self.level_settings.get(&level)
    }

    /// Every set id across all levels.
    pub fn all_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.level_sets.values().flatten().map(|s| s.id)
    }

    pub(crate) fn current_sets_mut(&mut self) -> &mut Vec<HuntSet> {
        self.level_sets.entry(self.current_level).or_default()
    }

    pub(crate) fn set_active(&mut self, id: Option<u64>) {
        self.level_active.insert(self.current_level, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_every_level() {
        let state = EditorState::default();
        assert_eq!(state.level_sets.len(), Level::ALL.len());
        assert_eq!(state.level_active.len(), Level::ALL.len());
        assert_eq!(state.current_level, Level::PumpkinHill);
        assert!(state.active_set().is_none());
    }

    #[test]
    fn test_persisted_shape() {
        let json = serde_json::to_value(EditorState::default()).unwrap();
        assert!(json["levelSets"]["PumpkinHillNG"].is_array());
        assert!(json["levelActive"]["MadSpace"].is_null());
        assert_eq!(json["currentLevel"], "PumpkinHill");
        assert_eq!(json["isDarkMode"], false);
        assert_eq!(json["language"], "spa");
    }
}
