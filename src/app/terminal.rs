//! Terminal setup and teardown for the interactive session.

use std::io::{self, stdout};

use crossterm::ExecutableCommand;
use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};

/// RAII guard that puts the terminal into game mode and restores it on drop.
///
/// Game mode is raw mode plus the alternate screen with the cursor hidden.
/// Restoration is idempotent, so it is also safe to call [`restore`] from
/// the SIGINT handler while a guard is alive.
pub struct TerminalGuard;

impl TerminalGuard {
    /// Enables raw mode and enters the alternate screen.
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?.execute(Hide)?;
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
    }
}

/// Best-effort restoration of the terminal to its normal state.
///
/// Failures are ignored: this runs on every exit path, including panics and
/// signal handlers, where there is nothing useful left to do with an error.
pub fn restore() {
    let mut out = stdout();
    let _ = out.execute(Show);
    let _ = out.execute(LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}
