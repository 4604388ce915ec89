//! hset - Command-line editor for treasure-hunt clue sets

use std::process::ExitCode;

use huntset::cli;

fn main() -> ExitCode {
    cli::run()
}
