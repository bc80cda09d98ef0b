//! Game session state management.
//!
//! This module defines the [`GameState`] struct, which owns all mutable
//! state for one session: the loaded grid, the player's position, the
//! derived outcome, and a step counter. The grid itself never changes after
//! loading; the movement engine in [`movement`] is the only thing allowed to
//! move the player.

pub mod keys;
pub mod movement;

use self::movement::{Direction, MoveResult, attempt_move};
use crate::maze::grid::{Coordinate, Grid};

/// Tri-state signal driving whether the interactive loop continues.
///
/// Recomputed after every move attempt; derived state that owns nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The session continues.
    InProgress,
    /// The player reached the exit cell.
    Won,
    /// The user requested early termination.
    Quit,
}

/// The entire mutable state of one game session.
pub struct GameState {
    grid: Grid,
    player: Coordinate,
    outcome: Outcome,
    steps: u32,
}

impl GameState {
    /// Creates a session with the player at the grid's start cell.
    pub fn new(grid: Grid) -> Self {
        let player = grid.start();
        Self {
            grid,
            player,
            outcome: Outcome::InProgress,
            steps: 0,
        }
    }

    /// The loaded maze.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The player's current position.
    pub fn player(&self) -> Coordinate {
        self.player
    }

    /// The current session outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Number of accepted moves so far.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Whether the session has reached a terminal outcome.
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    /// Attempts one directional move and applies it if legal.
    ///
    /// Accepted moves update the player's position and the step counter, and
    /// flip the outcome to [`Outcome::Won`] when the move lands on the exit.
    /// Rejected moves leave everything unchanged. The result is returned
    /// either way so the shell can report feedback.
    pub fn step(&mut self, direction: Direction) -> MoveResult {
        let result = attempt_move(&self.grid, self.player, direction);
        if let MoveResult::Accepted { position, won } = result {
            self.player = position;
            self.steps += 1;
            if won {
                self.outcome = Outcome::Won;
            }
        }
        result
    }

    /// Ends the session at the user's request.
    pub fn quit(&mut self) {
        if self.outcome == Outcome::InProgress {
            self.outcome = Outcome::Quit;
        }
    }

    /// Renders the grid with the player marker overlaid.
    pub fn render(&self) -> Vec<String> {
        self.grid.render(self.player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::loader::load_str;

    const SAMPLE: &str = "5 5\n#####\n#S  #\n# # #\n#  E#\n#####";

    fn new_session() -> GameState {
        GameState::new(load_str(SAMPLE).unwrap())
    }

    #[test]
    fn session_starts_at_the_start_cell() {
        let state = new_session();
        assert_eq!(state.player(), state.grid().start());
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.steps(), 0);
    }

    #[test]
    fn rejected_moves_change_nothing() {
        let mut state = new_session();
        let before = state.player();

        assert_eq!(state.step(Direction::Up), MoveResult::RejectedWall);
        assert_eq!(state.step(Direction::Left), MoveResult::RejectedWall);

        assert_eq!(state.player(), before);
        assert_eq!(state.steps(), 0);
        assert_eq!(state.outcome(), Outcome::InProgress);
    }

    #[test]
    fn accepted_moves_advance_player_and_counter() {
        let mut state = new_session();
        state.step(Direction::Right);
        state.step(Direction::Right);

        assert_eq!(state.player(), Coordinate::new(1, 3));
        assert_eq!(state.steps(), 2);
        assert!(!state.is_over());
    }

    /// Walking S → E through the sample maze ends the session with a win.
    #[test]
    fn reaching_the_exit_wins() {
        let mut state = new_session();
        for direction in [
            Direction::Down,
            Direction::Down,
            Direction::Right,
            Direction::Right,
        ] {
            assert!(matches!(
                state.step(direction),
                MoveResult::Accepted { .. }
            ));
        }

        assert_eq!(state.outcome(), Outcome::Won);
        assert!(state.is_over());
        assert_eq!(state.player(), state.grid().exit());
        assert_eq!(state.steps(), 4);
    }

    #[test]
    fn quit_ends_the_session() {
        let mut state = new_session();
        state.quit();
        assert_eq!(state.outcome(), Outcome::Quit);
        assert!(state.is_over());
    }

    #[test]
    fn quit_does_not_override_a_win() {
        let mut state = new_session();
        for direction in [
            Direction::Down,
            Direction::Down,
            Direction::Right,
            Direction::Right,
        ] {
            state.step(direction);
        }
        state.quit();
        assert_eq!(state.outcome(), Outcome::Won);
    }
}
