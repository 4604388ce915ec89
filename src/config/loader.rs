//! Configuration loading and discovery for `hset.toml`

use super::schema::HsetConfig;
use crate::models::Level;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up by [`find_config`].
pub const CONFIG_FILE: &str = "hset.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse hset.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override the state directory
    pub state_dir: Option<PathBuf>,
    /// Override the default level
    pub level: Option<Level>,
}

/// Find hset.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for hset.toml
/// 2. Check XDG_CONFIG_HOME/huntset/hset.toml (or ~/.config/huntset/hset.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find hset.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("huntset").join(CONFIG_FILE);
    config_path.exists().then_some(config_path)
}

/// Find hset.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from an hset.toml file.
///
/// With no path, the file is discovered with [`find_config`]; when none is
/// found the defaults are returned. A relative `storage.dir` is resolved
/// against the directory holding the config file.
pub fn load_config(path: Option<&Path>) -> Result<HsetConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(HsetConfig::default()),
    }
}

fn load_config_file(path: &Path) -> Result<HsetConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let mut config: HsetConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    if let Some(root) = path.parent() {
        config.storage.dir = resolve_path(root, &config.storage.dir);
    }
    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut HsetConfig, overrides: &CliOverrides) {
    if let Some(ref dir) = overrides.state_dir {
        config.storage.dir = dir.clone();
    }
    if let Some(level) = overrides.level {
        config.editor.default_level = level.key().to_string();
    }
}

/// Resolve a path relative to the project root.
pub fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() || project_root.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join("hset.toml");
        fs::write(&config_path, "[editor]\nlanguage = \"eng\"").expect("should write config");

        let subdir = temp.path().join("hunts").join("pumpkin");
        fs::create_dir_all(&subdir).expect("should create subdirectories");

        assert_eq!(find_config_from(subdir), Some(config_path));
    }

    #[test]
    fn test_find_config_not_found() {
        let temp = TempDir::new().expect("should create temp dir");
        assert_eq!(find_config_from(temp.path().to_path_buf()), None);
    }

    #[test]
    fn test_load_config_resolves_storage_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join("hset.toml");
        fs::write(&config_path, "[storage]\ndir = \"saved\"\n").expect("should write config");

        let config = load_config(Some(&config_path)).expect("should load valid config");
        assert_eq!(config.storage.dir, temp.path().join("saved"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let result = load_config(Some(&temp.path().join("nonexistent.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join("hset.toml");
        fs::write(&config_path, "this is not valid toml {{{").expect("should write config");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_validation_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join("hset.toml");
        fs::write(&config_path, "[editor]\nhistory_capacity = 0\n").expect("should write config");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Validation(ref e)) if e.len() == 1));
    }

    #[test]
    fn test_merge_cli_overrides() {
        let mut config = HsetConfig::default();
        let overrides = CliOverrides {
            state_dir: Some(PathBuf::from("elsewhere")),
            level: Some(Level::MeteorHerd),
        };

        merge_cli_overrides(&mut config, &overrides);
        assert_eq!(config.storage.dir, PathBuf::from("elsewhere"));
        assert_eq!(config.level(), Level::MeteorHerd);
    }

    #[test]
    fn test_merge_empty_overrides_keeps_config() {
        let mut config = HsetConfig::default();
        merge_cli_overrides(&mut config, &CliOverrides::default());
        assert_eq!(config, HsetConfig::default());
    }
}
