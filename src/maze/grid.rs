//! Maze grid data model and rendering projection.
//!
//! The grid is built once by the loader and never mutated afterwards; the
//! only state that changes during play is the player's [`Coordinate`], which
//! lives in the game session. Cells are stored in a single row-major buffer
//! sized exactly `height * width`.

/// Character drawn at the player's position when rendering.
pub const PLAYER_MARKER: char = '@';

/// Minimum allowed maze height and width.
pub const MIN_DIMENSION: usize = 5;

/// Maximum allowed maze height and width.
pub const MAX_DIMENSION: usize = 100;

/// A `(row, column)` pair identifying one grid cell.
///
/// Rows grow downward and columns grow rightward, matching the order the
/// maze file is read in. Compared by equality; cheap to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Coordinate {
    /// Creates a new coordinate from row and column indices.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One symbolic unit of the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Impassable wall (`#`).
    Wall,
    /// Open path (` `).
    Path,
    /// The player's starting cell (`S`), exactly one per maze.
    Start,
    /// The exit cell (`E`), exactly one per maze.
    Exit,
}

impl Cell {
    /// Maps a maze-file character to a cell kind.
    ///
    /// Returns `None` for any character outside the maze alphabet; the
    /// loader turns that into a validation error with position context.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '#' => Some(Cell::Wall),
            ' ' => Some(Cell::Path),
            'S' => Some(Cell::Start),
            'E' => Some(Cell::Exit),
            _ => None,
        }
    }

    /// The character this cell renders as.
    pub fn as_char(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Path => ' ',
            Cell::Start => 'S',
            Cell::Exit => 'E',
        }
    }

    /// Whether the player may stand on this cell.
    pub fn is_walkable(self) -> bool {
        !matches!(self, Cell::Wall)
    }
}

/// The validated rectangular maze layout.
///
/// Construction goes through the loader, so a `Grid` value always satisfies
/// the structural invariants: dimensions within
/// [`MIN_DIMENSION`]..=[`MAX_DIMENSION`], every row exactly `width` cells,
/// and exactly one start and one exit cell whose coordinates are resolved
/// and stored here.
#[derive(Debug, Clone)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
    start: Coordinate,
    exit: Coordinate,
}

impl Grid {
    /// Assembles a grid from loader output.
    ///
    /// The loader has already validated the parts; this only wires them
    /// together.
    pub(crate) fn new(
        height: usize,
        width: usize,
        cells: Vec<Cell>,
        start: Coordinate,
        exit: Coordinate,
    ) -> Self {
        debug_assert_eq!(cells.len(), height * width);
        Self {
            height,
            width,
            cells,
            start,
            exit,
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Coordinate of the unique start cell.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// Coordinate of the unique exit cell.
    pub fn exit(&self) -> Coordinate {
        self.exit
    }

    /// Whether a coordinate lies inside the grid.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// The cell at a coordinate.
    ///
    /// Callers check [`contains`](Self::contains) first; indexing an
    /// out-of-bounds coordinate panics.
    pub fn cell(&self, coord: Coordinate) -> Cell {
        self.cells[coord.row * self.width + coord.col]
    }

    /// Projects the grid plus the player marker into printable lines.
    ///
    /// Every cell renders as its own character except the player's cell,
    /// which renders as [`PLAYER_MARKER`], overriding whatever is beneath it
    /// (including the exit). Pure projection; mutates nothing.
    pub fn render(&self, player: Coordinate) -> Vec<String> {
        (0..self.height)
            .map(|row| {
                (0..self.width)
                    .map(|col| {
                        let coord = Coordinate::new(row, col);
                        if coord == player {
                            PLAYER_MARKER
                        } else {
                            self.cell(coord).as_char()
                        }
                    })
                    .collect()
            })
            .collect()
    }
}
