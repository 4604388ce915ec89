//! Per-level reference data.
//!
//! Static lookup tables mapping known primary (P1), secondary (P2) and
//! tertiary (P3) clue texts to their canonical colors, plus the tag
//! vocabularies and color palettes offered for each level. A level with
//! reference tables constrains its inputs to the listed entries; a level
//! without them accepts free text.

mod pumpkin_hill;

use std::collections::HashSet;

use crate::models::{Level, LevelSettings};

/// A predefined primary clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct P1Entry {
    pub p1: &'static str,
    pub color: &'static str,
}

/// A predefined secondary clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct P2Entry {
    pub p2: &'static str,
    pub color: &'static str,
}

/// A predefined tertiary clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct P3Entry {
    pub p3: &'static str,
    pub color: &'static str,
    pub is_emoji: bool,
}

/// The reference tables owned by one level.
#[derive(Debug, Clone, Copy)]
pub struct LevelReference {
    pub p1s: &'static [P1Entry],
    pub p2s: &'static [P2Entry],
    pub p3s: &'static [P3Entry],
}

static PUMPKIN_HILL: LevelReference = LevelReference {
    p1s: pumpkin_hill::P1_LIST,
    p2s: pumpkin_hill::P2_LIST,
    p3s: pumpkin_hill::P3_LIST,
};

/// Returns the reference tables of a level, or None for free-text levels.
pub fn level_reference(level: Level) -> Option<&'static LevelReference> {
    match level {
        // NG has the same clue set, only the hunt conditions differ
        Level::PumpkinHill | Level::PumpkinHillNg => Some(&PUMPKIN_HILL),
        _ => None,
    }
}

/// True when new sets pick their P1 from the reference list.
pub fn uses_predefined_p1(level: Level) -> bool {
    level_reference(level).is_some_and(|r| !r.p1s.is_empty())
}

/// True when P2/P3 texts get canonical colors from the reference lists.
pub fn has_predefined_p2p3(level: Level) -> bool {
    level_reference(level).is_some_and(|r| !r.p2s.is_empty() || !r.p3s.is_empty())
}

/// Predefined P1 entries in reference order.
pub fn p1_list(level: Level) -> &'static [P1Entry] {
    level_reference(level).map_or(&[], |r| r.p1s)
}

pub fn p2_list(level: Level) -> &'static [P2Entry] {
    level_reference(level).map_or(&[], |r| r.p2s)
}

pub fn p3_list(level: Level) -> &'static [P3Entry] {
    level_reference(level).map_or(&[], |r| r.p3s)
}

/// Canonical border color for a primary clue.
pub fn color_for_p1(level: Level, p1: &str) -> Option<&'static str> {
    p1_list(level).iter().find(|e| e.p1 == p1).map(|e| e.color)
}

/// Canonical color for a secondary clue.
pub fn color_for_p2(level: Level, p2: &str) -> Option<&'static str> {
    p2_list(level).iter().find(|e| e.p2 == p2).map(|e| e.color)
}

/// Canonical color for a tertiary clue.
pub fn color_for_p3(level: Level, p3: &str) -> Option<&'static str> {
    p3_list(level).iter().find(|e| e.p3 == p3).map(|e| e.color)
}

pub fn is_emoji_p3(level: Level, p3: &str) -> bool {
    p3_list(level).iter().any(|e| e.p3 == p3 && e.is_emoji)
}

/// Tag vocabulary offered for a level.
pub fn tags_for_level(level: Level) -> &'static [&'static str] {
    match level {
        Level::PumpkinHill | Level::PumpkinHillNg => &["disambiguation", "dangerousmaterial"],
        Level::EggQuarters | Level::EggQuartersNg => {
            &["disambiguation", "darksonicblue", "darksonicaltar"]
        }
        _ => &["disambiguation"],
    }
}

/// A selectable color with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorEntry {
    /// Value stored in the model (`"none"` / `""` mean no color)
    pub value: &'static str,
    pub label: &'static str,
    /// CSS swatch, if the entry is drawn
    pub css: Option<&'static str>,
}

const fn color(value: &'static str, label: &'static str, css: Option<&'static str>) -> ColorEntry {
    ColorEntry { value, label, css }
}

pub const BORDER_COLORS: &[ColorEntry] = &[
    color("none", "Sin color", Some("#ddd")),
    color("red", "Rojo", Some("red")),
    color("#ff6666", "Rojo claro", Some("#ff6666")),
    color("blue", "Azul", Some("blue")),
    color("#5599ff", "Azul celeste", Some("#5599ff")),
    color("green", "Verde", Some("green")),
    color("#55cc55", "Verde claro", Some("#55cc55")),
    color("purple", "Morado", Some("purple")),
    color("#bb66ff", "Morado claro", Some("#bb66ff")),
    color("#804000", "Café", Some("#804000")),
    color("#cc7722", "Café claro", Some("#cc7722")),
    color("orange", "Naranja", Some("orange")),
    color("#ffcc44", "Amarillo", Some("#ffcc44")),
];

pub const GENERIC_PIECE_COLORS: &[ColorEntry] = &[
    color("", "Ninguno", None),
    color("red", "Rojo", Some("red")),
    color("#ff6666", "Rojo claro", Some("#ff6666")),
    color("blue", "Azul", Some("blue")),
    color("#5599ff", "Azul celeste", Some("#5599ff")),
    color("green", "Verde", Some("green")),
    color("#55cc55", "Verde claro", Some("#55cc55")),
    color("purple", "Morado", Some("purple")),
    color("#bb66ff", "Morado claro", Some("#bb66ff")),
    color("#804000", "Café", Some("#804000")),
    color("#cc7722", "Café claro", Some("#cc7722")),
    color("orange", "Naranja", Some("orange")),
    color("#ffcc44", "Amarillo", Some("#ffcc44")),
];

pub const PUMPKIN_HILL_PIECE_COLORS: &[ColorEntry] = &[
    color("", "Ninguno", None),
    color("#1155cc", "Azul oscuro", Some("#1155cc")),
    color("#3c78d8", "Azul", Some("#3c78d8")),
    color("#6d9eeb", "Azul claro", Some("#6d9eeb")),
    color("#a4c2f4", "Azul pastel", Some("#a4c2f4")),
    color("#f4cccc", "Rosa claro", Some("#f4cccc")),
    color("#ead1dc", "Rosa medio", Some("#ead1dc")),
    color("#dd7e6b", "Rojo", Some("#dd7e6b")),
    color("#d9ead3", "Verde claro", Some("#d9ead3")),
    color("#b6d7a8", "Verde medio", Some("#b6d7a8")),
    color("#93c47d", "Verde oscuro", Some("#93c47d")),
];

/// Piece color palette offered for a level.
pub fn piece_colors(level: Level) -> &'static [ColorEntry] {
    match level {
        Level::PumpkinHill | Level::PumpkinHillNg => PUMPKIN_HILL_PIECE_COLORS,
        _ => GENERIC_PIECE_COLORS,
    }
}

/// Map a legacy Bootstrap border class to a CSS color.
///
/// Unknown classes pass through unchanged.
pub fn css_color_from_bootstrap(border_class: &str) -> String {
    match border_class {
        "danger" => "red",
        "primary" => "blue",
        "success" => "green",
        "warning" => "orange",
        "purple" => "purple",
        "brown" => "#804000",
        other => other,
    }
    .to_string()
}

/// Sidebar grouping of levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelGroup {
    Hero,
    Dark,
}

pub fn level_group(level: Level) -> LevelGroup {
    match level {
        Level::PumpkinHill
        | Level::PumpkinHillNg
        | Level::AquaticMine
        | Level::DeathChamber
        | Level::MeteorHerd => LevelGroup::Hero,
        _ => LevelGroup::Dark,
    }
}

/// Accent color used to highlight a level.
pub fn level_accent(level: Level) -> &'static str {
    match level {
        Level::PumpkinHill => "#e06666",
        Level::PumpkinHillNg => "#ea9999",
        Level::AquaticMine => "#7c7ee0",
        Level::DeathChamber => "#e69138",
        Level::MeteorHerd => "#a0a0b0",
        Level::DryLagoon => "#6aa84f",
        Level::EggQuarters => "#e844a0",
        Level::EggQuartersNg => "#f48fb1",
        Level::SecurityHall => "#f1c232",
        Level::MadSpace => "#9c27b0",
    }
}

/// Coarse area classification of Pumpkin Hill primary clues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum P1Group {
    Church,
    GhostTrain,
    Pumpkin,
}

impl P1Group {
    pub fn label(self) -> &'static str {
        match self {
            P1Group::Church => "Church",
            P1Group::GhostTrain => "Ghost Train",
            P1Group::Pumpkin => "Pumpkin",
        }
    }
}

/// Classify a primary clue by its canonical color.
///
/// Blue shades are Church, green shades Ghost Train, everything else Pumpkin.
pub fn p1_group(color: &str) -> P1Group {
    match color {
        "#6d9eeb" | "#3c78d8" | "#a4c2f4" | "#a4c2ec" => P1Group::Church,
        "#b6d7a8" | "#93c47d" => P1Group::GhostTrain,
        _ => P1Group::Pumpkin,
    }
}

pub fn level_has_p1_groups(level: Level) -> bool {
    matches!(level, Level::PumpkinHill | Level::PumpkinHillNg)
}

/// Suggested hidden P1s when a level has no saved settings.
pub fn default_hidden_p1s(level: Level) -> &'static [&'static str] {
    match level {
        Level::PumpkinHill | Level::PumpkinHillNg => &["La calavera indica el lugar."],
        _ => &[],
    }
}

/// Effective hidden P1 names: saved settings win over the suggested defaults.
pub fn hidden_p1s(level: Level, settings: Option<&LevelSettings>) -> HashSet<String> {
    match settings {
        Some(s) => s.hidden_p1s.iter().cloned().collect(),
        None => default_hidden_p1s(level).iter().map(|s| s.to_string()).collect(),
    }
}

/// Pickable P1 entries for a set selector.
///
/// Keeps reference order and drops hidden names and names already used by
/// other sets of the level.
pub fn p1_options(
    level: Level,
    settings: Option<&LevelSettings>,
    used: &HashSet<String>,
) -> Vec<&'static P1Entry> {
    let hidden = hidden_p1s(level, settings);
    p1_list(level)
        .iter()
        .filter(|e| !hidden.contains(e.p1) && !used.contains(e.p1))
        .collect()
}
