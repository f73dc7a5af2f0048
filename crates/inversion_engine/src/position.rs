//! Grid coordinates and their `a1`..`j10` labels.

use crate::types::BOARD_SIZE;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Column labels, left to right.
pub const COLUMN_LABELS: [char; BOARD_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j'];

/// A requested cell, as zero-based column and row indices.
///
/// A position may lie outside the grid. The engine rejects such a
/// request with [`MoveError::OutOfBounds`](crate::MoveError::OutOfBounds)
/// instead of making it unrepresentable, so drivers can pass whatever the
/// player typed straight through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column index, `0` is `a`.
    pub column: usize,
    /// Row index, `0` is row `1`.
    pub row: usize,
}

impl Position {
    /// Creates a position from indices.
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Whether both indices fall inside the grid.
    pub fn in_bounds(self) -> bool {
        self.column < BOARD_SIZE && self.row < BOARD_SIZE
    }

    /// Every position on the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |column| Position::new(column, row)))
    }

    /// Human-readable label such as `e1` or `j10`.
    ///
    /// Columns past `z` and rows past `usize::MAX - 1` fall back to `?`.
    pub fn label(self) -> String {
        let column = u8::try_from(self.column)
            .ok()
            .filter(|index| *index < 26)
            .map_or('?', |index| char::from(b'a' + index));
        let row = self
            .row
            .checked_add(1)
            .map_or_else(|| "?".to_string(), |number| number.to_string());
        format!("{}{}", column, row)
    }

    /// Parses a label like `a10`, case-insensitively.
    ///
    /// The column letter may run past `j` (`k`..`z`) and the row number past
    /// `10`. Such labels are well formed and yield an out-of-bounds position.
    #[instrument]
    pub fn parse_label(label: &str) -> Result<Self, ParsePositionError> {
        let label = label.trim();
        let mut chars = label.chars();
        let letter = chars
            .next()
            .ok_or(ParsePositionError::Empty)?
            .to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return Err(ParsePositionError::BadColumn(letter));
        }
        let column = usize::from(letter as u8 - b'a');

        let digits = chars.as_str();
        if digits.is_empty() {
            return Err(ParsePositionError::MissingRow);
        }
        // Plain decimal only: no sign, no leading zero.
        let bad_row = || ParsePositionError::BadRow(digits.to_string());
        if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad_row());
        }
        let row: usize = digits.parse().map_err(|_| bad_row())?;

        Ok(Self::new(column, row - 1))
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error parsing a position label.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParsePositionError {
    /// Nothing was entered.
    #[display("no position given")]
    Empty,

    /// The first character is not a column letter.
    #[display("'{}' is not a column letter", _0)]
    BadColumn(char),

    /// A column letter with no row number after it.
    #[display("missing row number")]
    MissingRow,

    /// The row part is not a number from 1 upwards.
    #[display("'{}' is not a row number", _0)]
    BadRow(String),
}

impl std::error::Error for ParsePositionError {}
