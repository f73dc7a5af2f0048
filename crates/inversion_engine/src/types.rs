//! Core domain types for inversion tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Width and height of the square grid.
pub const BOARD_SIZE: usize = 10;

/// Length of a run of identical marks that loses the game.
pub const LOSS_RUN: usize = 5;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X.
    #[display("X")]
    X,
    /// Mark O.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Character used when drawing this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Character used when drawing this cell (`-` when empty).
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Occupied(mark) => mark.symbol(),
        }
    }
}

/// Fixed 10x10 grid, addressed by zero-based column and row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    /// Cells in row-major order: `cells[row][column]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Returns the cell at the given indices, or `None` outside the grid.
    pub fn get(&self, column: usize, row: usize) -> Option<Cell> {
        self.cells.get(row)?.get(column).copied()
    }

    /// Like [`Grid::get`] but takes signed indices, for walking lines.
    pub(crate) fn get_signed(&self, column: isize, row: isize) -> Option<Cell> {
        let column = usize::try_from(column).ok()?;
        let row = usize::try_from(row).ok()?;
        self.get(column, row)
    }

    /// Checks whether the cell is on the grid and empty.
    pub fn is_empty(&self, column: usize, row: usize) -> bool {
        matches!(self.get(column, row), Some(Cell::Empty))
    }

    /// Writes a cell without validation. Callers check bounds first.
    pub(crate) fn set(&mut self, column: usize, row: usize, cell: Cell) {
        self.cells[row][column] = cell;
    }

    /// Rows from top (row 1) to bottom (row 10).
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells()
            .filter(|cell| *cell == Cell::Occupied(mark))
            .count()
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells().filter(|cell| *cell != Cell::Empty).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
