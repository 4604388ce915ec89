//! Configuration schema types for `hset.toml`
//!
//! Every field is optional; a missing file or section means defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::editor::DEFAULT_CAPACITY;
use crate::models::{Language, Level};

/// Where the editor state is persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the state record
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

fn default_dir() -> PathBuf {
    PathBuf::from(".hset")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

/// Editing session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Number of undo steps kept
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    /// Level used when a command names none
    #[serde(default = "default_level")]
    pub default_level: String,
    /// UI language (spa or eng)
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_history_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_level() -> String {
    Level::default().key().to_string()
}

fn default_language() -> String {
    "spa".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            default_level: default_level(),
            language: default_language(),
        }
    }
}

/// Root `hset.toml` document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HsetConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub editor: EditorConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "editor.default_level")
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hset.toml: '{}' {}", self.field, self.message)
    }
}

impl HsetConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.editor.history_capacity == 0 {
            errors.push(ConfigValidationError {
                field: "editor.history_capacity".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        if Level::from_key(&self.editor.default_level).is_none() {
            errors.push(ConfigValidationError {
                field: "editor.default_level".to_string(),
                message: format!("unknown level '{}'", self.editor.default_level),
            });
        }

        if Language::from_key(&self.editor.language).is_none() {
            errors.push(ConfigValidationError {
                field: "editor.language".to_string(),
                message: "must be 'spa' or 'eng'".to_string(),
            });
        }

        if self.storage.dir.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "storage.dir".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// The configured default level; falls back to the built-in default.
    pub fn level(&self) -> Level {
        Level::from_key(&self.editor.default_level).unwrap_or_default()
    }

    pub fn language(&self) -> Language {
        Language::from_key(&self.editor.language).unwrap_or_default()
    }
}
