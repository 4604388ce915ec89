//! Clear command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::editor::Action;
use crate::models::Level;

use super::{resolve_config, Session, EXIT_SUCCESS};

/// Execute the clear command
pub fn run_clear(
    config_path: Option<&Path>,
    level: Option<Level>,
    all: bool,
    state: Option<&Path>,
) -> ExitCode {
    let config = match resolve_config(config_path, state, level) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let mut session = Session::open(config, level);

    if all {
        session.editor.dispatch(Action::ClearStorage);
        println!("Cleared saved state");
    } else {
        session.focus();
        let count = session.editor.state().current_sets().len();
        session.editor.dispatch(Action::ClearLevel);
        println!("Cleared {} sets from {}", count, session.level.label());
    }
    ExitCode::from(EXIT_SUCCESS)
}
