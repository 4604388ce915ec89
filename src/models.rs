//! Data models for the hunting-set editor (pieces, rows, sets, levels)
//!
//! The serde shape matches the persisted JSON record and the template format:
//! camelCase field names, `""` for a piece without color and `"none"` for a
//! set without border color.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Border color sentinel meaning "no border color".
pub const NO_BORDER: &str = "none";

/// One atomic clue: label, tags and an optional display color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Piece {
    pub text: String,
    pub tags: Vec<String>,
    #[serde(with = "empty_as_none")]
    pub color: Option<String>,
}

impl Piece {
    /// Create an untagged, uncolored piece.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tags: Vec::new(),
            color: None,
        }
    }

    /// Set the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        let color = color.into();
        self.color = if color.is_empty() { None } else { Some(color) };
        self
    }

    /// Add a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// True when the piece carries neither tags nor color.
    pub fn is_plain(&self) -> bool {
        self.tags.is_empty() && self.color.is_none()
    }

    /// Add the tag if absent, remove it otherwise.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
    }
}

/// One secondary piece (P2) paired with one or more tertiary pieces (P3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceRow {
    pub p2: Piece,
    pub p3s: Vec<Piece>,
}

impl PieceRow {
    pub fn new(p2: Piece, p3s: Vec<Piece>) -> Self {
        Self { p2, p3s }
    }
}

impl Default for PieceRow {
    /// An empty row always has one empty tertiary piece.
    fn default() -> Self {
        Self {
            p2: Piece::default(),
            p3s: vec![Piece::default()],
        }
    }
}

/// A confirmation pair between two primary clues of the same level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Confirm {
    pub confirmed: String,
    pub confirmed_by: String,
}

/// Which of the two names of a [`Confirm`] an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfirmField {
    Confirmed,
    ConfirmedBy,
}

/// Column placement of a set in the exported layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Column {
    /// Not placed yet (`"default"`).
    #[default]
    Unplaced,
    Left,
    Center,
    Right,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::Unplaced, Column::Left, Column::Center, Column::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Column::Unplaced => "default",
            Column::Left => "left",
            Column::Center => "center",
            Column::Right => "right",
        }
    }

    /// Parse a column name, `None` for anything unknown.
    pub fn from_key(key: &str) -> Option<Column> {
        match key {
            "default" => Some(Column::Unplaced),
            "left" => Some(Column::Left),
            "center" => Some(Column::Center),
            "right" => Some(Column::Right),
            _ => None,
        }
    }
}

impl From<String> for Column {
    /// Unknown names fall back to the unplaced bucket.
    fn from(value: String) -> Self {
        Column::from_key(&value).unwrap_or_default()
    }
}

impl From<Column> for String {
    fn from(value: Column) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The top-level editable unit: a primary clue (P1) with its rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HuntSet {
    pub id: u64,
    pub p1_name: String,
    #[serde(with = "none_as_none")]
    pub border_color: Option<String>,
    pub column: Column,
    #[serde(rename = "pieces")]
    pub rows: Vec<PieceRow>,
    pub confirms: Vec<Confirm>,
}

impl HuntSet {
    /// A blank set with one empty row.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            p1_name: String::new(),
            border_color: None,
            column: Column::Unplaced,
            rows: vec![PieceRow::default()],
            confirms: Vec::new(),
        }
    }

    /// True when the set would be skipped on export.
    pub fn is_unnamed(&self) -> bool {
        self.p1_name.trim().is_empty()
    }

    /// Restore the one-row / one-P3 minimums.
    pub fn normalize(&mut self) {
        if self.rows.is_empty() {
            self.rows.push(PieceRow::default());
        }
        for row in &mut self.rows {
            if row.p3s.is_empty() {
                row.p3s.push(Piece::default());
            }
        }
    }
}

impl Default for HuntSet {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Error for an unknown level or language key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{key}'")]
pub struct UnknownKey {
    pub kind: &'static str,
    pub key: String,
}

/// The ten known game locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    PumpkinHill,
    #[serde(rename = "PumpkinHillNG")]
    PumpkinHillNg,
    AquaticMine,
    DeathChamber,
    MeteorHerd,
    DryLagoon,
    EggQuarters,
    #[serde(rename = "EggQuartersNG")]
    EggQuartersNg,
    SecurityHall,
    MadSpace,
}

impl Level {
    pub const ALL: [Level; 10] = [
        Level::PumpkinHill,
        Level::PumpkinHillNg,
        Level::AquaticMine,
        Level::DeathChamber,
        Level::MeteorHerd,
        Level::DryLagoon,
        Level::EggQuarters,
        Level::EggQuartersNg,
        Level::SecurityHall,
        Level::MadSpace,
    ];

    /// Storage / template key.
    pub fn key(self) -> &'static str {
        match self {
            Level::PumpkinHill => "PumpkinHill",
            Level::PumpkinHillNg => "PumpkinHillNG",
            Level::AquaticMine => "AquaticMine",
            Level::DeathChamber => "DeathChamber",
            Level::MeteorHerd => "MeteorHerd",
            Level::DryLagoon => "DryLagoon",
            Level::EggQuarters => "EggQuarters",
            Level::EggQuartersNg => "EggQuartersNG",
            Level::SecurityHall => "SecurityHall",
            Level::MadSpace => "MadSpace",
        }
    }

    /// Human readable name.
    pub fn label(self) -> &'static str {
        match self {
            Level::PumpkinHill => "Pumpkin Hill",
            Level::PumpkinHillNg => "Pumpkin Hill NG",
            Level::AquaticMine => "Aquatic Mine",
            Level::DeathChamber => "Death Chamber",
            Level::MeteorHerd => "Meteor Herd",
            Level::DryLagoon => "Dry Lagoon",
            Level::EggQuarters => "Egg Quarters",
            Level::EggQuartersNg => "Egg Quarters NG",
            Level::SecurityHall => "Security Hall",
            Level::MadSpace => "Mad Space",
        }
    }

    pub fn from_key(key: &str) -> Option<Level> {
        Level::ALL.into_iter().find(|l| l.key() == key)
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::PumpkinHill
    }
}

impl FromStr for Level {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::from_key(s).ok_or_else(|| UnknownKey {
            kind: "level",
            key: s.to_string(),
        })
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// UI language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Spa,
    Eng,
}

impl Language {
    pub fn from_key(key: &str) -> Option<Language> {
        match key {
            "spa" => Some(Language::Spa),
            "eng" => Some(Language::Eng),
            _ => None,
        }
    }
}

impl FromStr for Language {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_key(s).ok_or_else(|| UnknownKey {
            kind: "language",
            key: s.to_string(),
        })
    }
}

/// Per-level auxiliary configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LevelSettings {
    /// Primary clue names hidden from selection lists.
    pub hidden_p1s: Vec<String>,
}

/// `""` on the wire is `None` in memory.
mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let value = Option::<String>::deserialize(d)?;
        Ok(value.filter(|v| !v.is_empty()))
    }
}

/// `"none"` (or `""`) on the wire is `None` in memory.
mod none_as_none {
    use super::NO_BORDER;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.as_deref().unwrap_or(NO_BORDER))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let value = Option::<String>::deserialize(d)?;
        Ok(value.filter(|v| !v.is_empty() && v != NO_BORDER))
    }
}
