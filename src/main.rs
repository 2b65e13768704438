//! tilefill - Command-line tool for running tiled flood-fill scenes

use std::process::ExitCode;

use tilefill::cli;

fn main() -> ExitCode {
    cli::run()
}
