//! Pure state transitions
//!
//! [`reduce`] maps a state and one action to the next state. It never fails:
//! unknown ids and out-of-range indices leave the state unchanged. History
//! and persistence live in [`super::Editor`], not here.

use crate::ids;
use crate::models::{Confirm, ConfirmField, HuntSet, Piece, PieceRow, NO_BORDER};
use crate::reference;

use super::action::{Action, PieceField};
use super::state::EditorState;

/// Remove the item at `from` and reinsert it at `to`.
///
/// Dropping an item on its own position, or an out-of-range `from`, is a
/// no-op; `to` past the end appends.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() {
        return;
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
}

/// Apply `f` to the set with `id` in the level in focus.
fn update_set(state: &mut EditorState, id: u64, f: impl FnOnce(&mut HuntSet)) {
    if let Some(set) = state.current_sets_mut().iter_mut().find(|s| s.id == id) {
        f(set);
    }
}

/// Apply `f` to row `ri` of the set with `id`.
fn update_row(state: &mut EditorState, id: u64, ri: usize, f: impl FnOnce(&mut PieceRow)) {
    update_set(state, id, |set| {
        if let Some(row) = set.rows.get_mut(ri) {
            f(row);
        }
    });
}

fn border_from(color: &str) -> Option<String> {
    if color.is_empty() || color == NO_BORDER {
        None
    } else {
        Some(color.to_string())
    }
}

/// A fresh set for the level in focus.
///
/// Levels with a P1 list get the first unused name in reference order and
/// its canonical border color.
fn new_set(state: &EditorState) -> HuntSet {
    let level = state.current_level;
    let mut set = HuntSet::new(ids::next_set_id());

    if reference::uses_predefined_p1(level) {
        let used = state.used_p1s();
        if let Some(entry) = reference::p1_list(level)
            .iter()
            .find(|e| !used.contains(e.p1))
        {
            set.p1_name = entry.p1.to_string();
            if let Some(color) = reference::color_for_p1(level, entry.p1) {
                set.border_color = border_from(color);
            }
        }
    }
    set
}

/// Compute the next state.
pub fn reduce(state: &EditorState, action: &Action) -> EditorState {
    let mut next = state.clone();
    let level = state.current_level;

    match action {
        Action::SetLevel { level } => next.current_level = *level,

        Action::SelectSet { id } => next.set_active(*id),

        Action::AddSet => {
            let set = new_set(state);
            let id = set.id;
            next.current_sets_mut().push(set);
            next.set_active(Some(id));
        }

        Action::DeleteSet { id } => {
            let sets = next.current_sets_mut();
            sets.retain(|s| s.id != *id);
            let last = sets.last().map(|s| s.id);
            if state.active_id(level) == Some(*id) {
                next.set_active(last);
            }
        }

        Action::ClearLevel => {
            next.current_sets_mut().clear();
            next.set_active(None);
        }

        Action::ClearStorage => {
            next = EditorState {
                is_dark_mode: state.is_dark_mode,
                language: state.language,
                ..EditorState::default()
            };
        }

        Action::ImportSets { sets } => {
            let mut sets = sets.clone();
            for set in &mut sets {
                set.normalize();
            }
            let last = sets.last().map(|s| s.id);
            *next.current_sets_mut() = sets;
            next.set_active(last);
        }

        Action::ReorderSets {
            from_index,
            to_index,
        } => move_item(next.current_sets_mut(), *from_index, *to_index),

        Action::SetLanguage { lang } => next.language = *lang,

        Action::SetLevelSettings { level, settings } => {
            next.level_settings.insert(*level, settings.clone());
        }

        Action::ClearAllLevelSettings => next.level_settings.clear(),

        Action::SetP1Name { id, value } => update_set(&mut next, *id, |set| {
            set.p1_name = value.clone();
            if reference::uses_predefined_p1(level) {
                if let Some(color) = reference::color_for_p1(level, value) {
                    if color != NO_BORDER {
                        set.border_color = Some(color.to_string());
                    }
                }
            }
        }),

        Action::SetBorderColor { id, color } => {
            update_set(&mut next, *id, |set| set.border_color = border_from(color))
        }

        Action::SetColumn { id, column } | Action::MoveSetToColumn { id, column } => {
            update_set(&mut next, *id, |set| set.column = *column)
        }

        Action::AddRow { id } => update_set(&mut next, *id, |set| set.rows.push(PieceRow::default())),

        Action::DeleteRow { id, ri } => update_set(&mut next, *id, |set| {
            if set.rows.len() > 1 && *ri < set.rows.len() {
                set.rows.remove(*ri);
            }
        }),

        Action::ReorderRows { id, from_ri, to_ri } => {
            update_set(&mut next, *id, |set| move_item(&mut set.rows, *from_ri, *to_ri))
        }

        Action::ReorderP3s {
            id,
            ri,
            from_pi,
            to_pi,
        } => update_row(&mut next, *id, *ri, |row| {
            move_item(&mut row.p3s, *from_pi, *to_pi)
        }),

        Action::SetP2Text { id, ri, value } => update_row(&mut next, *id, *ri, |row| {
            row.p2.text = value.clone();
            if reference::has_predefined_p2p3(level) {
                if let Some(color) = reference::color_for_p2(level, value) {
                    row.p2.color = Some(color.to_string());
                }
            }
        }),

        Action::AddP3 { id, ri } => {
            update_row(&mut next, *id, *ri, |row| row.p3s.push(Piece::default()))
        }

        Action::DeleteP3 { id, ri, pi } => update_row(&mut next, *id, *ri, |row| {
            // The last P3 of a row cannot be deleted
            if row.p3s.len() > 1 && *pi < row.p3s.len() {
                row.p3s.remove(*pi);
            }
        }),

        Action::SetP3Text { id, ri, pi, value } => update_row(&mut next, *id, *ri, |row| {
            if let Some(p3) = row.p3s.get_mut(*pi) {
                p3.text = value.clone();
                if reference::has_predefined_p2p3(level) {
                    if let Some(color) = reference::color_for_p3(level, value) {
                        p3.color = Some(color.to_string());
                    }
                }
            }
        }),

        Action::ToggleTag {
            id,
            ri,
            field,
            pi,
            tag,
        } => update_row(&mut next, *id, *ri, |row| match field {
            PieceField::P2 => row.p2.toggle_tag(tag),
            PieceField::P3 => {
                if let Some(p3) = row.p3s.get_mut(*pi) {
                    p3.toggle_tag(tag);
                }
            }
        }),

        Action::AddConfirm { id } => {
            update_set(&mut next, *id, |set| set.confirms.push(Confirm::default()))
        }

        Action::SetConfirmField {
            id,
            ci,
            field,
            value,
        } => update_set(&mut next, *id, |set| {
            if let Some(confirm) = set.confirms.get_mut(*ci) {
                match field {
                    ConfirmField::Confirmed => confirm.confirmed = value.clone(),
                    ConfirmField::ConfirmedBy => confirm.confirmed_by = value.clone(),
                }
            }
        }),

        Action::DeleteConfirm { id, ci } => update_set(&mut next, *id, |set| {
            if *ci < set.confirms.len() {
                set.confirms.remove(*ci);
            }
        }),

        Action::ToggleDarkMode => next.is_dark_mode = !state.is_dark_mode,

        // Served by the history wrapper
        Action::Undo | Action::Redo => {}
    }

    next
}
