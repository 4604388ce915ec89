//! Tolerant set-file reader
//!
//! Recovers sets from exported (or hand-edited, or older-generation) set
//! files. This is a pattern recognizer over a known shape, not a parser for
//! the host language: each declaration `sets.addSet("name", new PieceSet(..))`
//! is located, the chained `.op(..)` suffixes that follow it are collected,
//! and every argument is classified by shape. Anything odd degrades to empty
//! or default values; only unreadable files are errors.

use std::fs;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::exporter::TAG_PREFIX;
use crate::ids;
use crate::models::{Column, Confirm, HuntSet, Piece, PieceRow, NO_BORDER};
use crate::reference::css_color_from_bootstrap;

/// Error for files that cannot be read as text.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("'{path}' is not a text file")]
    NotText { path: PathBuf },
}

/// A string literal body, with backslash escapes.
const STR: &str = r#""((?:[^"\\]|\\.)*)""#;

lazy_static! {
    static ref DECLARATION: Regex =
        Regex::new(&format!(r"sets\.addSet\s*\(\s*{STR}\s*,\s*new\s+PieceSet\s*\(")).unwrap();
    static ref CHAIN_OP: Regex = Regex::new(r"^\s*\.\s*(\w+)\s*\(").unwrap();
    static ref PIECE_TEXT: Regex = Regex::new(&format!(r"piece\s*:\s*{STR}")).unwrap();
    static ref NEW_PIECE: Regex =
        Regex::new(&format!(r"^newPiece\s*\(\s*{STR}\s*,\s*{STR}\s*\)")).unwrap();
    static ref NEW_PIECES: Regex =
        Regex::new(&format!(r"(?s)^newPieces\s*\(\s*\[(.*?)\]\s*,\s*{STR}\s*\)")).unwrap();
    static ref DISAMBIGUATION: Regex = Regex::new(r"isDisambiguation\s*:").unwrap();
    static ref STRING_LITERAL: Regex = Regex::new(&format!(r"(?s)^{STR}$")).unwrap();
    static ref STRING_ARG: Regex = Regex::new(&format!(r"^\s*{STR}")).unwrap();
    static ref STRING_PAIR: Regex = Regex::new(&format!(r"^\s*{STR}\s*,\s*{STR}")).unwrap();

    // Legacy `.setStyle(a, b, c, { border: "danger" })`: the 4th argument carries a border class
    static ref LEGACY_STYLE: Regex =
        Regex::new(r#"^[^,]*,\s*[^,]*,\s*[^,]*,\s*[^,]*:\s*"([^"]*)""#).unwrap();
}

/// Undo the escapes written by the exporter. Unknown escapes keep the
/// escaped character.
pub fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Bracket depth and string state for a left-to-right scan.
#[derive(Debug, Default)]
struct ScanState {
    depth: i32,
    quote: Option<char>,
    escape_next: bool,
}

impl ScanState {
    /// Feed one character; returns true when it is structural (outside strings).
    fn feed(&mut self, ch: char) -> bool {
        if self.escape_next {
            self.escape_next = false;
            return false;
        }
        match self.quote {
            Some(_) if ch == '\\' => {
                self.escape_next = true;
                false
            }
            Some(q) => {
                if ch == q {
                    self.quote = None;
                }
                false
            }
            None => {
                match ch {
                    '"' | '\'' => {
                        self.quote = Some(ch);
                        return false;
                    }
                    '(' | '[' | '{' => self.depth += 1,
                    ')' | ']' | '}' => self.depth -= 1,
                    _ => {}
                }
                true
            }
        }
    }
}

/// Split an argument list on top-level commas.
///
/// Commas nested in parentheses, brackets or braces, or inside a quoted
/// string (escapes honored), do not split. A trailing blank element is
/// dropped.
///
/// ```
/// use huntset::importer::split_top_level_args;
///
/// let args = split_top_level_args(r#"a("x,y"), [1,2,3], {k: "v,w"}"#);
/// assert_eq!(args, vec![r#"a("x,y")"#, " [1,2,3]", r#" {k: "v,w"}"#]);
/// ```
pub fn split_top_level_args(s: &str) -> Vec<&str> {
    let mut args = Vec::new();
    let mut state = ScanState::default();
    let mut start = 0;

    for (i, ch) in s.char_indices() {
        if state.feed(ch) && ch == ',' && state.depth == 0 {
            args.push(&s[start..i]);
            start = i + 1;
        }
    }

    let rest = &s[start..];
    if !rest.trim().is_empty() {
        args.push(rest);
    }
    args
}

/// Byte index of the `)` closing a parenthesis opened just before `from`.
fn find_closing_paren(text: &str, from: usize) -> Option<usize> {
    let mut state = ScanState {
        depth: 1,
        ..ScanState::default()
    };
    for (i, ch) in text[from..].char_indices() {
        if state.feed(ch) && ch == ')' && state.depth == 0 {
            return Some(from + i);
        }
    }
    None
}

fn clean_tag(raw: &str) -> String {
    raw.trim().replace(TAG_PREFIX, "").to_lowercase()
}

/// A string value with its quotes removed.
fn string_value(value: &str) -> String {
    let value = value.trim();
    match STRING_LITERAL.captures(value) {
        Some(c) => unescape(&c[1]),
        None => value.replace('"', ""),
    }
}

/// Read `{ piece: "..", tags: [..], color: ".." }` one field at a time, so
/// keys inside quoted values are never mistaken for fields.
fn parse_piece_literal(s: &str) -> Piece {
    let body = s.strip_prefix('{').unwrap_or(s);
    let body = body.strip_suffix('}').unwrap_or(body);

    let mut piece = Piece::default();
    for field in split_top_level_args(body) {
        let Some((key, value)) = field.split_once(':') else {
            continue;
        };
        match key.trim().trim_matches('"') {
            "piece" => piece.text = string_value(value),
            "tags" => {
                let list = value.trim();
                let list = list.strip_prefix('[').unwrap_or(list);
                let list = list.strip_suffix(']').unwrap_or(list);
                piece.tags = split_top_level_args(list)
                    .into_iter()
                    .map(clean_tag)
                    .filter(|t| !t.is_empty())
                    .collect();
            }
            "color" => piece.color = Some(string_value(value)).filter(|c| !c.is_empty()),
            other => debug!(key = other, "ignoring piece field"),
        }
    }
    piece
}

/// Classify a single piece argument.
///
/// Shapes are tried in order: structured literal, legacy `newPiece(text,
/// color)`, legacy disambiguation object, then a bare string.
pub fn parse_piece_arg(arg: &str) -> Piece {
    let s = arg.trim();

    if s.starts_with('{') {
        return parse_piece_literal(s);
    }

    if s.starts_with("newPiece") {
        return match NEW_PIECE.captures(s) {
            Some(c) => Piece::new(unescape(&c[1])).with_color(unescape(&c[2])),
            None => {
                debug!(arg = s, "unrecognized newPiece call");
                Piece::default()
            }
        };
    }

    if DISAMBIGUATION.is_match(s) {
        let text = PIECE_TEXT
            .captures(s)
            .map(|c| unescape(&c[1]))
            .unwrap_or_default();
        return Piece::new(text).with_tag("disambiguation");
    }

    match STRING_LITERAL.captures(s) {
        Some(c) => Piece::new(unescape(&c[1])),
        None => Piece::new(s.replace('"', "")),
    }
}

/// Expand legacy `newPieces(["a", "b"], color)`.
fn parse_shared_color(s: &str) -> Option<Vec<Piece>> {
    let c = NEW_PIECES.captures(s)?;
    let color = unescape(&c[2]);
    Some(
        split_top_level_args(&c[1])
            .into_iter()
            .map(|t| {
                let t = t.trim();
                let text = match STRING_LITERAL.captures(t) {
                    Some(lit) => unescape(&lit[1]),
                    None => t.replace('"', ""),
                };
                Piece::new(text).with_color(color.clone())
            })
            .collect(),
    )
}

/// Classify a tertiary (P3) argument: a list of pieces, a shared-color
/// helper, or a single piece.
pub fn parse_p3_arg(arg: &str) -> Vec<Piece> {
    let s = arg.trim();

    if let Some(body) = s.strip_prefix('[') {
        let inner = body.strip_suffix(']').unwrap_or(body).trim();
        if inner.starts_with("newPieces") {
            if let Some(pieces) = parse_shared_color(inner) {
                return pieces;
            }
        }
        return split_top_level_args(inner)
            .into_iter()
            .map(parse_piece_arg)
            .collect();
    }

    if s.starts_with("newPieces") {
        if let Some(pieces) = parse_shared_color(s) {
            return pieces;
        }
    }

    vec![parse_piece_arg(s)]
}

/// Build a row from a `(p2, p3s)` argument list; fewer than two arguments
/// yields nothing.
fn parse_row(args: &str) -> Option<PieceRow> {
    let parts = split_top_level_args(args);
    if parts.len() < 2 {
        debug!(args, "row with fewer than two arguments skipped");
        return None;
    }
    Some(PieceRow::new(parse_piece_arg(parts[0]), parse_p3_arg(parts[1])))
}

/// One chained `.name(args)` suffix.
struct ChainOp<'a> {
    name: &'a str,
    args: &'a str,
}

/// Collect the contiguous run of chained suffixes starting at `pos`.
///
/// Returns the operations and the position just past the last one.
fn read_chain(content: &str, mut pos: usize) -> (Vec<ChainOp<'_>>, usize) {
    let mut ops = Vec::new();
    while let Some(c) = CHAIN_OP.captures(&content[pos..]) {
        let open_end = pos + c.get(0).map_or(0, |m| m.end());
        let Some(close) = find_closing_paren(content, open_end) else {
            break;
        };
        let name_span = c.get(1).map_or(0..0, |m| pos + m.start()..pos + m.end());
        ops.push(ChainOp {
            name: &content[name_span],
            args: &content[open_end..close],
        });
        pos = close + 1;
    }
    (ops, pos)
}

fn apply_chain(set: &mut HuntSet, ops: &[ChainOp<'_>]) {
    let mut border: Option<String> = None;
    let mut legacy_border: Option<String> = None;
    let mut column: Option<Column> = None;

    for op in ops {
        match op.name {
            "addPieces" => {
                if let Some(row) = parse_row(op.args) {
                    set.rows.push(row);
                }
            }
            "addConfirm" => {
                if let Some(c) = STRING_PAIR.captures(op.args) {
                    set.confirms.push(Confirm {
                        confirmed: unescape(&c[1]),
                        confirmed_by: unescape(&c[2]),
                    });
                }
            }
            "setBorderColor" if border.is_none() => {
                border = STRING_ARG.captures(op.args).map(|c| unescape(&c[1]));
            }
            "setColumn" if column.is_none() => {
                if let Some(c) = STRING_ARG.captures(op.args) {
                    let key = unescape(&c[1]);
                    column = Some(Column::from_key(&key).unwrap_or_else(|| {
                        debug!(column = %key, "unknown column, using default");
                        Column::Unplaced
                    }));
                }
            }
            "setStyle" if legacy_border.is_none() => {
                legacy_border = LEGACY_STYLE
                    .captures(op.args)
                    .map(|c| css_color_from_bootstrap(&c[1]));
            }
            _ => {}
        }
    }

    // The legacy style only applies when no current-format setter is present
    if let Some(color) = border.or(legacy_border) {
        set.border_color = Some(color).filter(|c| !c.is_empty() && c != NO_BORDER);
    }
    if let Some(column) = column {
        set.column = column;
    }
}

/// Recover every set declared in `content`, in order of appearance.
///
/// Recovered sets get fresh import ids. A set whose constructor arguments
/// are missing or unusable is still returned, with no rows.
pub fn parse_content(content: &str) -> Vec<HuntSet> {
    let mut sets = Vec::new();
    let mut pos = 0;

    while let Some(c) = DECLARATION.captures_at(content, pos) {
        let head_end = c.get(0).map_or(pos, |m| m.end());
        let mut set = HuntSet {
            id: ids::next_import_id(),
            p1_name: unescape(&c[1]),
            rows: Vec::new(),
            ..HuntSet::default()
        };

        let Some(close) = find_closing_paren(content, head_end) else {
            debug!(p1 = %set.p1_name, "unterminated declaration");
            sets.push(set);
            pos = head_end;
            continue;
        };

        if let Some(row) = parse_row(&content[head_end..close]) {
            set.rows.push(row);
        }

        // Closing paren of addSet(...)
        let mut after = close + 1;
        let rest = &content[after..];
        let trimmed = rest.trim_start();
        if trimmed.starts_with(')') {
            after += rest.len() - trimmed.len() + 1;
        }

        let (ops, end) = read_chain(content, after);
        apply_chain(&mut set, &ops);
        sets.push(set);
        pos = end;
    }

    sets
}

/// Read a set file and recover its sets.
///
/// Fails only when the file cannot be read or is not text.
pub fn import_file(path: &Path) -> Result<Vec<HuntSet>, ImportError> {
    let bytes = fs::read(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|_| ImportError::NotText {
        path: path.to_path_buf(),
    })?;
    if content.contains('\0') {
        return Err(ImportError::NotText {
            path: path.to_path_buf(),
        });
    }
    Ok(parse_content(&content))
}
