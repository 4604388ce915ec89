//! Import and template command implementations

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use crate::models::Level;

use super::{resolve_config, Session, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the import command
pub fn run_import(
    config_path: Option<&Path>,
    file: &Path,
    level: Option<Level>,
    state: Option<&Path>,
) -> ExitCode {
    if !file.exists() {
        eprintln!("Error: Cannot open input file '{}'", file.display());
        return ExitCode::from(EXIT_INVALID_ARGS);
    }
    let config = match resolve_config(config_path, state, level) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let mut session = Session::open(config, level);
    session.focus();

    match session.editor.import_file(file) {
        Ok(0) => {
            eprintln!("Warning: no sets found in '{}'", file.display());
            println!("Imported 0 sets into {}", session.level.label());
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(count) => {
            println!("Imported {} sets into {}", count, session.level.label());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Execute the template command
pub fn run_template(config_path: Option<&Path>, file: &Path, state: Option<&Path>) -> ExitCode {
    let text = match fs::read_to_string(file) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: Cannot open template '{}': {}", file.display(), e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };
    let config = match resolve_config(config_path, state, None) {
        Ok(c) => c,
        Err(code) => return code,
    };
    // Saved ids must be observed before the template takes replacement ids
    let mut session = Session::open(config, None);
    let template = match crate::template::parse_template(&text) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let level = template.level;
    session.level = level;
    session.focus();

    let count = session.editor.apply_template(template);
    println!("Loaded template: {} sets for {}", count, level.label());
    ExitCode::from(EXIT_SUCCESS)
}
