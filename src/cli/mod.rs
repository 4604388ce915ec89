//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod clear;
mod export;
mod import;
mod show;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::{load_config, merge_cli_overrides, CliOverrides, HsetConfig};
use crate::editor::{Action, Editor};
use crate::models::Level;
use crate::storage::{FileStorage, Storage, STORAGE_KEY};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// hset - Edit, import and export treasure-hunt sets
#[derive(Parser)]
#[command(name = "hset")]
#[command(about = "hset - Edit, import and export treasure-hunt sets")]
#[command(version)]
pub struct Cli {
    /// Path to hset.toml (default: discovered from the working directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log library events to stderr (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export the sets of a level as a TypeScript module
    Export {
        /// Level to export (default: the level in focus)
        #[arg(long)]
        level: Option<Level>,

        /// State directory (overrides storage.dir)
        #[arg(long)]
        state: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail when a named set is still in the default column
        #[arg(long)]
        strict: bool,
    },

    /// Import an exported TypeScript file, replacing the level's sets
    Import {
        /// File produced by `hset export` or a hand-written module
        file: PathBuf,

        /// Level to import into (default: the level in focus)
        #[arg(long)]
        level: Option<Level>,

        /// State directory (overrides storage.dir)
        #[arg(long)]
        state: Option<PathBuf>,
    },

    /// Import a TypeScript file and re-export it without touching the state
    Convert {
        file: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load a JSON template ({"level": ..., "sets": [...]})
    Template {
        file: PathBuf,

        /// State directory (overrides storage.dir)
        #[arg(long)]
        state: Option<PathBuf>,
    },

    /// Print the sets of a level
    Show {
        /// Level to show (default: the level in focus)
        #[arg(long)]
        level: Option<Level>,

        /// State directory (overrides storage.dir)
        #[arg(long)]
        state: Option<PathBuf>,
    },

    /// List the known levels
    Levels,

    /// Remove the sets of one level, or the whole saved state
    Clear {
        /// Level to clear (default: the level in focus)
        #[arg(long, conflicts_with = "all")]
        level: Option<Level>,

        /// Remove the saved state entirely
        #[arg(long)]
        all: bool,

        /// State directory (overrides storage.dir)
        #[arg(long)]
        state: Option<PathBuf>,
    },
}

/// An editor opened on the configured state directory.
pub(crate) struct Session {
    pub editor: Editor,
    /// Level the command works on
    pub level: Level,
    /// No saved state existed before this run
    pub fresh: bool,
    config: HsetConfig,
}

impl Session {
    /// Open the state directory and pick the target level: the explicit one,
    /// else the saved level in focus, else the configured default.
    pub fn open(config: HsetConfig, level: Option<Level>) -> Self {
        let storage = FileStorage::new(&config.storage.dir);
        let fresh = storage.get(STORAGE_KEY).is_none();
        debug!(dir = %storage.dir().display(), fresh, "opening state");

        let editor = Editor::open(Box::new(storage), config.editor.history_capacity);
        let level = level.unwrap_or_else(|| {
            if fresh {
                config.level()
            } else {
                editor.state().current_level
            }
        });
        Self {
            editor,
            level,
            fresh,
            config,
        }
    }

    /// Bring the editor to the target level before an edit; a fresh state
    /// also takes the configured language.
    pub fn focus(&mut self) {
        if self.fresh {
            self.editor.dispatch(Action::SetLanguage {
                lang: self.config.language(),
            });
            self.fresh = false;
        }
        if self.editor.state().current_level != self.level {
            self.editor.dispatch(Action::SetLevel { level: self.level });
        }
    }
}

/// Load hset.toml and apply the command's overrides.
///
/// Prints the error and returns the exit code on failure.
pub(crate) fn resolve_config(
    path: Option<&Path>,
    state: Option<&Path>,
    level: Option<Level>,
) -> Result<HsetConfig, ExitCode> {
    let mut config = match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Err(ExitCode::from(EXIT_ERROR));
        }
    };
    let overrides = CliOverrides {
        state_dir: state.map(Path::to_path_buf),
        level,
    };
    merge_cli_overrides(&mut config, &overrides);
    Ok(config)
}

/// Write command output to a file, or stdout when no path is given.
pub(crate) fn write_output(output: Option<&Path>, content: &str) -> ExitCode {
    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, content) {
                eprintln!("Error: Failed to write '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{}", content),
    }
    ExitCode::from(EXIT_SUCCESS)
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "huntset=info",
        _ => "huntset=debug",
    };
    let filter = if verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    } else {
        EnvFilter::new(default)
    };
    // A second init (tests driving run() twice) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Parse arguments and run the selected command
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Export { level, state, output, strict } => {
            export::run_export(config_path, level, state.as_deref(), output.as_deref(), strict)
        }
        Commands::Import { file, level, state } => {
            import::run_import(config_path, &file, level, state.as_deref())
        }
        Commands::Convert { file, output } => export::run_convert(&file, output.as_deref()),
        Commands::Template { file, state } => {
            import::run_template(config_path, &file, state.as_deref())
        }
        Commands::Show { level, state } => show::run_show(config_path, level, state.as_deref()),
        Commands::Levels => show::run_levels(),
        Commands::Clear { level, all, state } => {
            clear::run_clear(config_path, level, all, state.as_deref())
        }
    }
}
