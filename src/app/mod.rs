//! Interactive shell wiring the core into a terminal session.
//!
//! The session is strictly sequential: load once (done by `main` before this
//! module is entered), then loop render → read one key → step → render. The
//! core never touches the terminal and never terminates the process; this
//! module owns all I/O and reports the final [`Outcome`] back to `main`.
//!
//! # Module Structure
//!
//! - [`terminal`]: raw mode / alternate screen setup with RAII restore
//! - The session loop itself lives here in [`run`]

pub mod terminal;

use std::io::{self, Stdout, Write};

use crossterm::QueueableCommand;
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use crate::game::keys::{self, GameKey};
use crate::game::movement::MoveResult;
use crate::game::{GameState, Outcome};
use crate::maze::grid::Grid;

const HELP_LINE: &str = "Move with WASD or the arrow keys. Press q to quit.";

/// Runs one interactive session to completion.
///
/// Returns the terminal outcome (won or quit) once the loop ends; terminal
/// I/O errors propagate to `main`, which maps them to an exit code.
pub fn run(grid: Grid) -> io::Result<Outcome> {
    let _guard = terminal::TerminalGuard::enter()?;
    let mut out = io::stdout();
    let mut state = GameState::new(grid);
    let mut feedback = String::from(HELP_LINE);

    while !state.is_over() {
        draw(&mut out, &state, &feedback)?;

        let Some(key_event) = next_key_press()? else {
            continue;
        };
        match keys::key_event_to_game_key(&key_event) {
            Some(GameKey::Quit) => state.quit(),
            Some(key) => {
                if let Some(direction) = key.direction() {
                    feedback = describe(state.step(direction));
                }
            }
            None => feedback = format!("Unknown key. {HELP_LINE}"),
        }
    }

    if state.outcome() == Outcome::Won {
        feedback = format!(
            "Congratulations! You've reached the exit in {} steps. Press any key.",
            state.steps()
        );
        draw(&mut out, &state, &feedback)?;
        wait_for_key_press()?;
    }

    Ok(state.outcome())
}

/// Draws one frame: the projected grid, a step counter, and a feedback line.
fn draw(out: &mut Stdout, state: &GameState, feedback: &str) -> io::Result<()> {
    out.queue(Clear(ClearType::All))?;
    for (row, line) in state.render().iter().enumerate() {
        out.queue(MoveTo(0, row as u16))?.queue(Print(line))?;
    }

    let status_row = state.grid().height() as u16 + 1;
    out.queue(MoveTo(0, status_row))?
        .queue(Print(format!("Steps: {}", state.steps())))?;
    out.queue(MoveTo(0, status_row + 1))?
        .queue(Print(feedback))?;
    out.flush()
}

/// Blocks until the next key press event.
///
/// Returns `None` for events the loop does not care about (releases,
/// repeats, resizes); the caller redraws and reads again.
fn next_key_press() -> io::Result<Option<KeyEvent>> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

fn wait_for_key_press() -> io::Result<()> {
    while next_key_press()?.is_none() {}
    Ok(())
}

/// User-facing feedback for a move result.
///
/// Rejections are expected outcomes, so they produce a status line rather
/// than an error.
fn describe(result: MoveResult) -> String {
    match result {
        MoveResult::Accepted { won: true, .. } => String::from("You found the exit!"),
        MoveResult::Accepted { .. } => String::new(),
        MoveResult::RejectedWall => String::from("Blocked by a wall."),
        MoveResult::RejectedOutOfBounds => String::from("You can't leave the maze that way."),
    }
}
