//! Show and levels command implementations (terminal display)

use std::fmt::Write as _;
use std::path::Path;
use std::process::ExitCode;

use crate::models::{HuntSet, Level, Piece};
use crate::reference;

use super::{resolve_config, Session, EXIT_SUCCESS};

fn piece_label(piece: &Piece) -> String {
    let mut label = if piece.text.is_empty() {
        "(empty)".to_string()
    } else {
        piece.text.clone()
    };
    if !piece.tags.is_empty() {
        let _ = write!(label, " [{}]", piece.tags.join(", "));
    }
    if let Some(color) = &piece.color {
        let _ = write!(label, " {}", color);
    }
    label
}

/// Render a set as an indented text block.
pub(crate) fn format_set(set: &HuntSet, active: bool) -> String {
    let mut out = String::new();
    let marker = if active { "*" } else { " " };
    let name = if set.is_unnamed() { "(unnamed)" } else { set.p1_name.as_str() };
    let _ = writeln!(
        out,
        "{} {} [{}] border={} id={}",
        marker,
        name,
        set.column,
        set.border_color.as_deref().unwrap_or("none"),
        set.id
    );
    for row in &set.rows {
        let p3s: Vec<String> = row.p3s.iter().map(piece_label).collect();
        let _ = writeln!(out, "    {} -> {}", piece_label(&row.p2), p3s.join(" | "));
    }
    for confirm in &set.confirms {
        let _ = writeln!(out, "    confirms {} / {}", confirm.confirmed, confirm.confirmed_by);
    }
    out
}

/// Execute the show command
pub fn run_show(config_path: Option<&Path>, level: Option<Level>, state: Option<&Path>) -> ExitCode {
    let config = match resolve_config(config_path, state, level) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let session = Session::open(config, level);
    let state = session.editor.state();
    let sets = state.sets(session.level);
    let active = state.active_id(session.level);

    println!("{} ({} sets)", session.level.label(), sets.len());
    for set in sets {
        print!("{}", format_set(set, active == Some(set.id)));
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the levels command
pub fn run_levels() -> ExitCode {
    for level in Level::ALL {
        let data = if reference::level_reference(level).is_some() {
            "reference"
        } else {
            "free text"
        };
        println!(
            "{:<14} {:<20} {:?}, {}",
            level.key(),
            level.label(),
            reference::level_group(level),
            data
        );
    }
    ExitCode::from(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Column, Confirm};

    #[test]
    fn test_format_set() {
        let mut set = HuntSet::new(3);
        set.p1_name = "Rocks".to_string();
        set.column = Column::Left;
        set.rows[0].p2 = Piece::new("a").with_color("#fff");
        set.rows[0].p3s = vec![Piece::new("b").with_tag("disambiguation"), Piece::new("c")];
        set.confirms.push(Confirm {
            confirmed: "X".to_string(),
            confirmed_by: "Y".to_string(),
        });

        let text = format_set(&set, true);
        assert!(text.starts_with("* Rocks [left] border=none id=3\n"));
        assert!(text.contains("    a #fff -> b [disambiguation] | c\n"));
        assert!(text.contains("confirms X / Y"));
    }

    #[test]
    fn test_format_unnamed_set() {
        let text = format_set(&HuntSet::new(1), false);
        assert!(text.starts_with("  (unnamed) [default]"));
        assert!(text.contains("(empty) -> (empty)"));
    }
}
