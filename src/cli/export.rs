//! Export and convert command implementations

use std::path::Path;
use std::process::ExitCode;

use crate::exporter::{export_sets, unplaced_sets};
use crate::importer::import_file;
use crate::models::{HuntSet, Level};

use super::{resolve_config, write_output, Session, EXIT_ERROR, EXIT_INVALID_ARGS};

/// Report named sets still in the default column.
///
/// Returns false when `strict` turns the warning into an error.
fn check_unplaced(sets: &[HuntSet], strict: bool) -> bool {
    let unplaced = unplaced_sets(sets);
    if unplaced.is_empty() {
        return true;
    }
    let names: Vec<&str> = unplaced.iter().map(|s| s.p1_name.as_str()).collect();
    let label = if strict { "Error" } else { "Warning" };
    eprintln!(
        "{}: {} set(s) not placed in a column: {}",
        label,
        unplaced.len(),
        names.join(", ")
    );
    !strict
}

/// Execute the export command
pub fn run_export(
    config_path: Option<&Path>,
    level: Option<Level>,
    state: Option<&Path>,
    output: Option<&Path>,
    strict: bool,
) -> ExitCode {
    let config = match resolve_config(config_path, state, level) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let session = Session::open(config, level);
    let sets = session.editor.state().sets(session.level);

    if sets.iter().all(HuntSet::is_unnamed) {
        eprintln!("Warning: no named sets in {}", session.level.label());
    }
    if !check_unplaced(sets, strict) {
        return ExitCode::from(EXIT_ERROR);
    }

    write_output(output, &export_sets(sets))
}

/// Execute the convert command
pub fn run_convert(file: &Path, output: Option<&Path>) -> ExitCode {
    if !file.exists() {
        eprintln!("Error: Cannot open input file '{}'", file.display());
        return ExitCode::from(EXIT_INVALID_ARGS);
    }
    let sets = match import_file(file) {
        Ok(sets) => sets,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    check_unplaced(&sets, false);
    write_output(output, &export_sets(&sets))
}
