//! Level templates
//!
//! A template is a JSON (or JSON5) document naming a level and the sets to
//! load into it:
//!
//! ```json5
//! {
//!   level: "PumpkinHill",
//!   sets: [{ id: 1, p1Name: "Familia de calabazas.", column: "left", pieces: [] }],
//! }
//! ```

use std::collections::HashSet;

use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::ids;
use crate::models::{HuntSet, Level};

/// Template loading error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TemplateError {
    /// The document is not valid JSON/JSON5
    #[error("Failed to parse template: {0}")]
    Parse(String),
    /// Required fields are missing or have the wrong type
    #[error("Invalid template: {0}")]
    InvalidShape(String),
    /// The level key is not one of the known levels
    #[error("Unknown level in template: {0}")]
    UnknownLevel(String),
}

/// A parsed template, ready to dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub level: Level,
    pub sets: Vec<HuntSet>,
}

/// Parse a template document.
///
/// Sets keep their ids unless the id is missing (0) or repeated, in which
/// case a fresh import id is assigned. Kept ids are reported to
/// [`ids::observe`].
pub fn parse_template(text: &str) -> Result<Template, TemplateError> {
    let value: Value = json5::from_str(text).map_err(|e| TemplateError::Parse(e.to_string()))?;

    let Some(object) = value.as_object() else {
        return Err(TemplateError::InvalidShape(
            "template must be an object".to_string(),
        ));
    };

    let level_key = match object.get("level") {
        Some(Value::String(s)) if !s.is_empty() => s.as_str(),
        _ => {
            return Err(TemplateError::InvalidShape(
                "template must have \"level\" and \"sets\"".to_string(),
            ))
        }
    };
    let Some(Value::Array(raw_sets)) = object.get("sets") else {
        return Err(TemplateError::InvalidShape(
            "template must have \"level\" and \"sets\"".to_string(),
        ));
    };
    let level =
        Level::from_key(level_key).ok_or_else(|| TemplateError::UnknownLevel(level_key.to_string()))?;

    let mut seen = HashSet::new();
    let mut sets = Vec::with_capacity(raw_sets.len());
    for (i, raw) in raw_sets.iter().enumerate() {
        let mut set: HuntSet = serde_json::from_value(raw.clone())
            .map_err(|e| TemplateError::InvalidShape(format!("set {}: {}", i, e)))?;
        if set.id == 0 || !seen.insert(set.id) {
            set.id = ids::next_import_id();
            seen.insert(set.id);
        } else {
            ids::observe(set.id);
        }
        set.normalize();
        sets.push(set);
    }

    info!(level = %level, sets = sets.len(), "template parsed");
    Ok(Template { level, sets })
}
