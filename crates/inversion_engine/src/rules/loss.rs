//! Loss-line detection around the last move.
//!
//! Only the four lines through the just-played cell are scanned, and only
//! within `LOSS_RUN - 1` cells either side of it. Any run that includes
//! the played cell must fit inside that window.

use crate::position::Position;
use crate::types::{Cell, Grid, LOSS_RUN, Mark};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{instrument, trace};

/// Farthest offset from the played cell that can still share a run with it.
const REACH: isize = LOSS_RUN as isize - 1;

/// A line through a cell.
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
)]
pub enum Direction {
    /// Along a row.
    #[display("horizontal")]
    Horizontal,
    /// Along a column.
    #[display("vertical")]
    Vertical,
    /// Column and row both increasing.
    #[display("main diagonal")]
    MainDiagonal,
    /// Column increasing while row decreases.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Direction {
    /// Column and row step for one cell along this line.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::MainDiagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// Collects the cells along `direction` within the scan window around `origin`.
///
/// Offsets that fall off the grid are skipped, so windows near an edge are
/// shorter. The two diagonals are built independently and may differ in
/// length. An origin off the grid yields an empty window.
#[instrument(skip(grid))]
pub fn scan_window(grid: &Grid, origin: Position, direction: Direction) -> Vec<Cell> {
    let (Ok(column), Ok(row)) = (isize::try_from(origin.column), isize::try_from(origin.row)) else {
        return Vec::new();
    };
    let (column_step, row_step) = direction.step();

    (-REACH..=REACH)
        .filter_map(|offset| grid.get_signed(column + offset * column_step, row + offset * row_step))
        .collect()
}

/// Length of the longest contiguous run of `mark` in `cells`.
pub fn longest_run(cells: &[Cell], mark: Mark) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for cell in cells {
        if *cell == Cell::Occupied(mark) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Finds the first line through `origin` holding `LOSS_RUN` or more
/// consecutive `mark`s.
#[instrument(skip(grid))]
pub fn find_loss_line(grid: &Grid, origin: Position, mark: Mark) -> Option<Direction> {
    Direction::iter().find(|direction| {
        let window = scan_window(grid, origin, *direction);
        let run = longest_run(&window, mark);
        trace!(%direction, window_len = window.len(), run, "Scanned line");
        run >= LOSS_RUN
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(mark: Mark, positions: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new();
        for &(column, row) in positions {
            grid.set(column, row, Cell::Occupied(mark));
        }
        grid
    }

    #[test]
    fn test_window_is_clamped_at_edges() {
        let grid = Grid::new();
        assert_eq!(scan_window(&grid, Position::new(0, 0), Direction::Horizontal).len(), 5);
        assert_eq!(scan_window(&grid, Position::new(4, 4), Direction::Horizontal).len(), 9);
        assert_eq!(scan_window(&grid, Position::new(9, 5), Direction::Horizontal).len(), 5);
        assert_eq!(scan_window(&grid, Position::new(2, 7), Direction::Vertical).len(), 7);
    }

    #[test]
    fn test_diagonal_windows_differ_near_edges() {
        let grid = Grid::new();
        // (1, 8): main diagonal runs (0,7)..(2,9), anti-diagonal (0,9)..(5,4).
        let origin = Position::new(1, 8);
        assert_eq!(scan_window(&grid, origin, Direction::MainDiagonal).len(), 3);
        assert_eq!(scan_window(&grid, origin, Direction::AntiDiagonal).len(), 6);
    }

    #[test]
    fn test_window_off_grid_is_empty() {
        let grid = Grid::new();
        assert!(scan_window(&grid, Position::new(usize::MAX, 0), Direction::Vertical).is_empty());
    }

    #[test]
    fn test_longest_run_requires_contiguity() {
        let x = Cell::Occupied(Mark::X);
        let o = Cell::Occupied(Mark::O);
        let e = Cell::Empty;
        assert_eq!(longest_run(&[x, x, e, x, x, x], Mark::X), 3);
        assert_eq!(longest_run(&[x, x, o, x, x, x, x], Mark::X), 4);
        assert_eq!(longest_run(&[x, x, x, x, x], Mark::X), 5);
        assert_eq!(longest_run(&[x, x, x, x, x], Mark::O), 0);
        assert_eq!(longest_run(&[], Mark::O), 0);
    }

    #[test]
    fn test_five_scattered_is_not_a_loss() {
        // X X - X X X on row 1: five Xs in the window, never five in a row.
        let grid = grid_with(Mark::X, &[(0, 0), (1, 0), (3, 0), (4, 0), (5, 0)]);
        assert_eq!(find_loss_line(&grid, Position::new(3, 0), Mark::X), None);
    }

    #[test]
    fn test_each_direction_detected() {
        let cases = [
            (Direction::Horizontal, [(2, 3), (3, 3), (4, 3), (5, 3), (6, 3)]),
            (Direction::Vertical, [(7, 0), (7, 1), (7, 2), (7, 3), (7, 4)]),
            (Direction::MainDiagonal, [(1, 1), (2, 2), (3, 3), (4, 4), (5, 5)]),
            (Direction::AntiDiagonal, [(0, 9), (1, 8), (2, 7), (3, 6), (4, 5)]),
        ];
        for (direction, cells) in cases {
            let grid = grid_with(Mark::O, &cells);
            let (column, row) = cells[2];
            assert_eq!(
                find_loss_line(&grid, Position::new(column, row), Mark::O),
                Some(direction)
            );
        }
    }

    #[test]
    fn test_overline_counts() {
        let grid = grid_with(Mark::X, &[(0, 2), (1, 2), (2, 2), (3, 2), (4, 2), (5, 2)]);
        assert_eq!(
            find_loss_line(&grid, Position::new(5, 2), Mark::X),
            Some(Direction::Horizontal)
        );
    }
}
