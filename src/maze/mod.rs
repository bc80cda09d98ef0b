//! Maze loading, validation, and grid representation.
//!
//! This module owns the read-only half of the game: [`grid`] defines the
//! validated maze layout and the rendering projection, and [`loader`] parses
//! a textual maze file into it, enforcing the structural invariants
//! (dimension range, rectangular rows, character set, unique start/exit).

pub mod grid;
pub mod loader;
