//! Maze file parsing and validation.
//!
//! The accepted layout is the explicit header form: the first line carries
//! `<height> <width>`, followed by `height` rows of exactly `width`
//! characters. Line endings are normalized before validation (a trailing
//! `\r` is stripped from every line, and trailing blank lines are ignored),
//! so CRLF files and files without a final newline both load.
//!
//! Every violation is fatal to the load attempt and carries enough context
//! (row/column index or the offending value) for an actionable message.
//! Nothing here is retried and nothing here terminates the process; errors
//! propagate to the caller.

use std::fmt;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::maze::grid::{Cell, Coordinate, Grid, MAX_DIMENSION, MIN_DIMENSION};

/// Which of the two unique markers a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// The start cell, `S`.
    Start,
    /// The exit cell, `E`.
    Exit,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Start => write!(f, "start marker 'S'"),
            Marker::Exit => write!(f, "exit marker 'E'"),
        }
    }
}

/// Reasons a maze source fails to load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read maze file: {0}")]
    Io(#[from] std::io::Error),

    /// The first line is not a `<height> <width>` pair of integers.
    #[error("expected a `<height> <width>` header line, found {0:?}")]
    InvalidHeader(String),

    /// A dimension falls outside the allowed range.
    #[error("maze {axis} must be between 5 and 100, got {value}")]
    DimensionOutOfRange {
        /// Which dimension is out of range, `"height"` or `"width"`.
        axis: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// The number of grid rows does not match the header height.
    #[error("expected {expected} maze rows, found {found}")]
    RowCountMismatch {
        /// Row count announced by the header.
        expected: usize,
        /// Row count actually present.
        found: usize,
    },

    /// A row's length does not match the header width.
    #[error("row {row} has {found} characters, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Column count announced by the header.
        expected: usize,
        /// Column count actually present.
        found: usize,
    },

    /// A character outside the maze alphabet `{'#', ' ', 'S', 'E'}`.
    #[error("invalid character {ch:?} at row {row}, column {col}")]
    InvalidCharacter {
        /// Zero-based row of the offending character.
        row: usize,
        /// Zero-based column of the offending character.
        col: usize,
        /// The character itself.
        ch: char,
    },

    /// The maze contains no start or no exit cell.
    #[error("maze has no {0}")]
    MissingMarker(Marker),

    /// The maze contains more than one start or exit cell.
    #[error("maze has more than one {0}")]
    DuplicateMarker(Marker),
}

/// Reads and validates a maze file.
pub fn load_file(path: &Path) -> Result<Grid, LoadError> {
    let text = fs::read_to_string(path)?;
    load_str(&text)
}

/// Parses and validates maze text into a [`Grid`].
///
/// On success the returned grid carries the resolved start and exit
/// coordinates; see the module docs for the accepted layout and the
/// validation rules.
pub fn load_str(source: &str) -> Result<Grid, LoadError> {
    let mut lines: Vec<&str> = source
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    // A trailing newline (or stray blank lines at the end) is not part of
    // the grid.
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let (header, rows) = lines
        .split_first()
        .ok_or_else(|| LoadError::InvalidHeader(String::new()))?;
    let (height, width) = parse_header(header)?;
    check_dimension("height", height)?;
    check_dimension("width", width)?;

    if rows.len() != height {
        return Err(LoadError::RowCountMismatch {
            expected: height,
            found: rows.len(),
        });
    }

    let mut cells = Vec::with_capacity(height * width);
    let mut start = None;
    let mut exit = None;

    for (row, line) in rows.iter().enumerate() {
        let found = line.chars().count();
        if found != width {
            return Err(LoadError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }

        for (col, ch) in line.chars().enumerate() {
            let cell =
                Cell::from_char(ch).ok_or(LoadError::InvalidCharacter { row, col, ch })?;
            match cell {
                Cell::Start => place_marker(&mut start, Marker::Start, row, col)?,
                Cell::Exit => place_marker(&mut exit, Marker::Exit, row, col)?,
                _ => {}
            }
            cells.push(cell);
        }
    }

    let start = start.ok_or(LoadError::MissingMarker(Marker::Start))?;
    let exit = exit.ok_or(LoadError::MissingMarker(Marker::Exit))?;

    Ok(Grid::new(height, width, cells, start, exit))
}

/// Parses the `<height> <width>` header line.
fn parse_header(header: &str) -> Result<(usize, usize), LoadError> {
    let mut parts = header.split_whitespace();
    let height = parts.next().and_then(|s| s.parse().ok());
    let width = parts.next().and_then(|s| s.parse().ok());
    match (height, width, parts.next()) {
        (Some(height), Some(width), None) => Ok((height, width)),
        _ => Err(LoadError::InvalidHeader(header.to_string())),
    }
}

fn check_dimension(axis: &'static str, value: usize) -> Result<(), LoadError> {
    if (MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
        Ok(())
    } else {
        Err(LoadError::DimensionOutOfRange { axis, value })
    }
}

/// Records a unique marker position, rejecting a second occurrence.
fn place_marker(
    slot: &mut Option<Coordinate>,
    marker: Marker,
    row: usize,
    col: usize,
) -> Result<(), LoadError> {
    if slot.is_some() {
        return Err(LoadError::DuplicateMarker(marker));
    }
    *slot = Some(Coordinate::new(row, col));
    Ok(())
}
