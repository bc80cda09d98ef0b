//! Movement validation for single-step player moves.
//!
//! [`attempt_move`] is a pure function of the grid, the current position,
//! and the requested direction. Rejected moves are normal, expected
//! outcomes reported back for user feedback; they are never errors and they
//! never change the player's position.

use crate::maze::grid::{Coordinate, Grid};

/// One unit of player movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Row − 1.
    Up,
    /// Row + 1.
    Down,
    /// Column − 1.
    Left,
    /// Column + 1.
    Right,
}

impl Direction {
    /// Row/column delta for this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction that undoes this one.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Outcome of one movement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The move is legal; `won` is set when the new position is the exit.
    Accepted {
        /// The position after the move.
        position: Coordinate,
        /// Whether the move landed on the exit cell.
        won: bool,
    },
    /// The candidate cell lies outside the grid; position is unchanged.
    RejectedOutOfBounds,
    /// The candidate cell is a wall; position is unchanged.
    RejectedWall,
}

/// Validates a single step from `position` in `direction`.
///
/// The candidate cell is the current position translated by the direction's
/// unit vector. Out-of-bounds candidates are rejected before the grid is
/// consulted, walls are rejected after, and anything else is accepted, with
/// the win flag set exactly when the candidate is the grid's exit cell.
pub fn attempt_move(grid: &Grid, position: Coordinate, direction: Direction) -> MoveResult {
    let (drow, dcol) = direction.delta();
    let row = position.row as isize + drow;
    let col = position.col as isize + dcol;

    if row < 0 || col < 0 || row >= grid.height() as isize || col >= grid.width() as isize {
        return MoveResult::RejectedOutOfBounds;
    }

    let candidate = Coordinate::new(row as usize, col as usize);
    if !grid.cell(candidate).is_walkable() {
        return MoveResult::RejectedWall;
    }

    MoveResult::Accepted {
        position: candidate,
        won: candidate == grid.exit(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::loader::load_str;

    const SAMPLE: &str = "5 5\n#####\n#S  #\n# # #\n#  E#\n#####";

    fn sample_grid() -> Grid {
        load_str(SAMPLE).unwrap()
    }

    #[test]
    fn accepts_step_onto_open_path() {
        let grid = sample_grid();
        let result = attempt_move(&grid, Coordinate::new(1, 1), Direction::Right);
        assert_eq!(
            result,
            MoveResult::Accepted {
                position: Coordinate::new(1, 2),
                won: false,
            }
        );
    }

    /// Stepping off the grid is rejected before any wall check applies.
    #[test]
    fn rejects_step_out_of_bounds() {
        let grid = sample_grid();
        let top_left = Coordinate::new(0, 0);
        assert_eq!(
            attempt_move(&grid, top_left, Direction::Up),
            MoveResult::RejectedOutOfBounds
        );
        assert_eq!(
            attempt_move(&grid, top_left, Direction::Left),
            MoveResult::RejectedOutOfBounds
        );

        let bottom_right = Coordinate::new(4, 4);
        assert_eq!(
            attempt_move(&grid, bottom_right, Direction::Down),
            MoveResult::RejectedOutOfBounds
        );
        assert_eq!(
            attempt_move(&grid, bottom_right, Direction::Right),
            MoveResult::RejectedOutOfBounds
        );
    }

    #[test]
    fn rejects_step_into_wall() {
        let grid = sample_grid();
        // (2,2) is the interior wall.
        let result = attempt_move(&grid, Coordinate::new(1, 2), Direction::Down);
        assert_eq!(result, MoveResult::RejectedWall);
    }

    /// The boundary row is a wall, so moving up from the start cell is a
    /// wall rejection, not an out-of-bounds one; the candidate (0,1) is
    /// still inside the grid.
    #[test]
    fn boundary_walls_reject_as_walls() {
        let grid = sample_grid();
        let result = attempt_move(&grid, Coordinate::new(1, 1), Direction::Up);
        assert_eq!(result, MoveResult::RejectedWall);
    }

    #[test]
    fn landing_on_exit_signals_won() {
        let grid = sample_grid();
        let result = attempt_move(&grid, Coordinate::new(3, 2), Direction::Right);
        assert_eq!(
            result,
            MoveResult::Accepted {
                position: Coordinate::new(3, 3),
                won: true,
            }
        );
    }

    #[test]
    fn only_the_exit_cell_signals_won() {
        let grid = sample_grid();
        for direction in [Direction::Right, Direction::Down] {
            if let MoveResult::Accepted { position, won } =
                attempt_move(&grid, Coordinate::new(1, 1), direction)
            {
                assert_eq!(won, position == grid.exit());
            }
        }
    }

    /// Identical inputs always produce identical results.
    #[test]
    fn attempt_move_is_pure() {
        let grid = sample_grid();
        let position = Coordinate::new(1, 1);
        let first = attempt_move(&grid, position, Direction::Right);
        for _ in 0..10 {
            assert_eq!(attempt_move(&grid, position, Direction::Right), first);
        }
    }

    /// Moving and then moving back returns to the origin on open terrain.
    #[test]
    fn accepted_moves_round_trip() {
        let grid = sample_grid();
        let origin = Coordinate::new(1, 1);
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let MoveResult::Accepted { position, .. } = attempt_move(&grid, origin, direction)
            else {
                continue;
            };
            let back = attempt_move(&grid, position, direction.opposite());
            assert_eq!(
                back,
                MoveResult::Accepted {
                    position: origin,
                    won: false,
                }
            );
        }
    }

    #[test]
    fn accepted_position_is_always_in_bounds() {
        let grid = sample_grid();
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                let from = Coordinate::new(row, col);
                for direction in [
                    Direction::Up,
                    Direction::Down,
                    Direction::Left,
                    Direction::Right,
                ] {
                    if let MoveResult::Accepted { position, .. } =
                        attempt_move(&grid, from, direction)
                    {
                        assert!(grid.contains(position));
                    }
                }
            }
        }
    }

    #[test]
    fn opposite_is_an_involution() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }
}
