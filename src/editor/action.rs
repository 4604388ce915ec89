//! Editing actions
//!
//! Actions are serde-tagged so a browser front end can dispatch them as JSON,
//! e.g. `{"type": "REORDER_ROWS", "id": 3, "fromRi": 0, "toRi": 2}`.

use serde::{Deserialize, Serialize};

use crate::models::{Column, ConfirmField, HuntSet, Language, Level, LevelSettings};

/// Which piece of a row a tag toggle targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceField {
    P2,
    P3,
}

/// One logical edit. Row (`ri`), piece (`pi`) and confirm (`ci`) indices are
/// zero-based positions inside the set identified by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    SetLevel { level: Level },
    SelectSet { id: Option<u64> },
    AddSet,
    DeleteSet { id: u64 },
    ClearLevel,
    ClearStorage,
    ImportSets { sets: Vec<HuntSet> },
    ReorderSets { from_index: usize, to_index: usize },
    SetLanguage { lang: Language },
    SetLevelSettings { level: Level, settings: LevelSettings },
    ClearAllLevelSettings,
    SetP1Name { id: u64, value: String },
    SetBorderColor { id: u64, color: String },
    SetColumn { id: u64, column: Column },
    MoveSetToColumn { id: u64, column: Column },
    AddRow { id: u64 },
    DeleteRow { id: u64, ri: usize },
    ReorderRows { id: u64, from_ri: usize, to_ri: usize },
    ReorderP3s { id: u64, ri: usize, from_pi: usize, to_pi: usize },
    SetP2Text { id: u64, ri: usize, value: String },
    AddP3 { id: u64, ri: usize },
    DeleteP3 { id: u64, ri: usize, pi: usize },
    SetP3Text { id: u64, ri: usize, pi: usize, value: String },
    ToggleTag { id: u64, ri: usize, field: PieceField, pi: usize, tag: String },
    AddConfirm { id: u64 },
    SetConfirmField { id: u64, ci: usize, field: ConfirmField, value: String },
    DeleteConfirm { id: u64, ci: usize },
    ToggleDarkMode,
    Undo,
    Redo,
}

impl Action {
    /// Whether the state before this action is snapshotted for undo.
    ///
    /// Navigation, history itself, resets and settings-only edits are not.
    pub fn records_history(&self) -> bool {
        !matches!(
            self,
            Action::SetLevel { .. }
                | Action::SelectSet { .. }
                | Action::ToggleDarkMode
                | Action::Undo
                | Action::Redo
                | Action::ClearStorage
                | Action::ClearLevel
                | Action::SetLanguage { .. }
                | Action::SetLevelSettings { .. }
                | Action::ClearAllLevelSettings
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_tags() {
        let action: Action =
            serde_json::from_str(r#"{"type": "REORDER_P3S", "id": 1, "ri": 0, "fromPi": 2, "toPi": 0}"#)
                .unwrap();
        assert_eq!(
            action,
            Action::ReorderP3s {
                id: 1,
                ri: 0,
                from_pi: 2,
                to_pi: 0
            }
        );

        let json = serde_json::to_value(Action::SetP2Text {
            id: 4,
            ri: 1,
            value: "x".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "SET_P2_TEXT");
        assert_eq!(json["ri"], 1);
    }

    #[test]
    fn test_unit_actions() {
        let action: Action = serde_json::from_str(r#"{"type": "ADD_SET"}"#).unwrap();
        assert_eq!(action, Action::AddSet);
        let action: Action = serde_json::from_str(r#"{"type": "TOGGLE_DARK_MODE"}"#).unwrap();
        assert_eq!(action, Action::ToggleDarkMode);
    }

    #[test]
    fn test_tag_toggle_field() {
        let action: Action = serde_json::from_str(
            r#"{"type": "TOGGLE_TAG", "id": 1, "ri": 0, "field": "p3", "pi": 1, "tag": "disambiguation"}"#,
        )
        .unwrap();
        assert!(matches!(action, Action::ToggleTag { field: PieceField::P3, pi: 1, .. }));
    }

    #[test]
    fn test_history_eligibility() {
        assert!(Action::AddSet.records_history());
        assert!(Action::ImportSets { sets: vec![] }.records_history());
        assert!(!Action::SelectSet { id: None }.records_history());
        assert!(!Action::ClearLevel.records_history());
        assert!(!Action::Undo.records_history());
        assert!(!Action::ClearAllLevelSettings.records_history());
    }
}
