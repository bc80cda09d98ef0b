//! Mazebound - a terminal maze navigation game.
//!
//! A rectangular maze is loaded from a text file, the player token starts at
//! the `S` cell, and single-step directional moves (WASD / arrow keys) walk
//! the maze until the `E` cell is reached or the user quits.
//!
//! # Architecture
//! The application follows a modular architecture:
//! - `maze/`: maze file loading, validation, and the grid data model
//! - `game/`: movement validation, key mapping, and session state
//! - `app/`: the terminal shell (rendering loop and raw-mode handling)
//!
//! # Exit codes
//! - `0`: the player won or quit normally
//! - `1`: bad command-line arguments
//! - `2`: the maze file could not be read, or terminal I/O failed
//! - `3`: the maze file failed validation

#![warn(missing_docs)]

pub mod app;
pub mod game;
pub mod maze;

use std::path::PathBuf;
use std::process::{self, ExitCode};

use clap::Parser;

use crate::maze::loader::{self, LoadError};

/// Exit code for bad command-line arguments.
const EXIT_USAGE: u8 = 1;
/// Exit code for file or terminal I/O failure.
const EXIT_IO: u8 = 2;
/// Exit code for maze validation failure.
const EXIT_INVALID_MAZE: u8 = 3;

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "mazebound", version)]
#[command(about = "A terminal maze navigation game")]
struct Cli {
    /// Path to the maze file to play.
    maze: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders its own usage/help text; --help and --version
            // arrive here too and are not usage errors.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let grid = match loader::load_file(&cli.maze) {
        Ok(grid) => grid,
        Err(err @ LoadError::Io(_)) => {
            eprintln!("mazebound: {err}");
            return ExitCode::from(EXIT_IO);
        }
        Err(err) => {
            eprintln!("mazebound: invalid maze: {err}");
            return ExitCode::from(EXIT_INVALID_MAZE);
        }
    };

    // Ctrl+C inside raw mode arrives as a key event and is handled by the
    // session loop; this covers a SIGINT delivered from outside, which would
    // otherwise leave the terminal in raw mode.
    let _ = ctrlc::set_handler(|| {
        app::terminal::restore();
        process::exit(0);
    });

    match app::run(grid) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("mazebound: terminal error: {err}");
            ExitCode::from(EXIT_IO)
        }
    }
}
