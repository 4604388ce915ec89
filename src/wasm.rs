//! WASM API module for browser/JS interop
//!
//! The browser editor keeps its state as JSON and calls into these functions
//! for the parts that must behave exactly like the command line: export,
//! import, state transitions and tolerant loading of a saved record.

use wasm_bindgen::prelude::*;

use crate::editor::{reduce, Action, EditorState};
use crate::models::HuntSet;
use crate::{exporter, importer, storage};

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn parse_sets(sets_json: &str) -> Result<Vec<HuntSet>, String> {
    serde_json::from_str(sets_json).map_err(|e| format!("invalid sets: {}", e))
}

/// Serialize a JSON array of sets to the TypeScript export format.
#[wasm_bindgen]
pub fn export_sets(sets_json: &str) -> Result<String, String> {
    Ok(exporter::export_sets(&parse_sets(sets_json)?))
}

/// Names of the named sets still in the default column.
#[wasm_bindgen]
pub fn unplaced_sets(sets_json: &str) -> Result<Vec<String>, String> {
    let sets = parse_sets(sets_json)?;
    Ok(exporter::unplaced_sets(&sets)
        .into_iter()
        .map(|s| s.p1_name.clone())
        .collect())
}

/// Recover sets from an exported TypeScript module, as a JSON array.
#[wasm_bindgen]
pub fn import_sets(text: &str) -> Result<String, String> {
    serde_json::to_string(&importer::parse_content(text)).map_err(|e| e.to_string())
}

/// Apply one action to a state; both are JSON, the new state is returned.
///
/// `UNDO` and `REDO` are left to the caller's history.
#[wasm_bindgen]
pub fn reduce_state(state_json: &str, action_json: &str) -> Result<String, String> {
    let state: EditorState =
        serde_json::from_str(state_json).map_err(|e| format!("invalid state: {}", e))?;
    let action: Action =
        serde_json::from_str(action_json).map_err(|e| format!("invalid action: {}", e))?;
    serde_json::to_string(&reduce(&state, &action)).map_err(|e| e.to_string())
}

/// Reconcile a raw saved record (possibly corrupt) into a complete state.
#[wasm_bindgen]
pub fn load_state(raw: &str) -> String {
    let state = storage::parse_state(raw);
    serde_json::to_string(&state).unwrap_or_default()
}
