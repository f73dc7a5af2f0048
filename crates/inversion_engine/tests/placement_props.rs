//! Property tests for move validation.

use inversion_engine::{BOARD_SIZE, Cell, GameSetup, Grid, Mark, MoveError, Position, place};
use proptest::prelude::*;

fn in_bounds() -> impl Strategy<Value = Position> {
    (0..BOARD_SIZE, 0..BOARD_SIZE).prop_map(|(column, row)| Position::new(column, row))
}

fn out_of_bounds() -> impl Strategy<Value = Position> {
    let index = prop_oneof![0..BOARD_SIZE * 3, Just(usize::MAX), BOARD_SIZE..=usize::MAX];
    let off = prop_oneof![BOARD_SIZE..BOARD_SIZE * 3, Just(usize::MAX), BOARD_SIZE..=usize::MAX];
    prop_oneof![(off.clone(), index.clone()), (index, off)]
        .prop_map(|(column, row)| Position::new(column, row))
}

fn mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::X), Just(Mark::O)]
}

proptest! {
    #[test]
    fn out_of_bounds_rejected(pos in out_of_bounds(), mark in mark()) {
        let mut game = GameSetup::new().start(mark);
        let before = game.clone();

        prop_assert_eq!(game.play(pos), Err(MoveError::OutOfBounds(pos)));
        prop_assert_eq!(game, before);
        let err = place(&Grid::new(), pos, mark).unwrap_err();
        prop_assert!(err.to_string().ends_with("is outside the board"));
        prop_assert_eq!(err, MoveError::OutOfBounds(pos));
    }

    #[test]
    fn occupied_cell_rejected(pos in in_bounds(), first in mark(), second in mark()) {
        let grid = place(&Grid::new(), pos, first).unwrap();
        prop_assert_eq!(place(&grid, pos, second), Err(MoveError::CellOccupied(pos)));

        let mut game = GameSetup::new().start(first);
        game.play(pos).unwrap();
        let before = game.clone();
        prop_assert_eq!(game.play(pos), Err(MoveError::CellOccupied(pos)));
        prop_assert_eq!(game, before);
    }

    #[test]
    fn empty_cell_placement_changes_only_that_cell(pos in in_bounds(), mark in mark()) {
        let grid = Grid::new();
        let next = place(&grid, pos, mark).unwrap();
        for other in Position::all() {
            let expected = if other == pos { Cell::Occupied(mark) } else { Cell::Empty };
            prop_assert_eq!(next.get(other.column, other.row), Some(expected));
        }
    }
}
