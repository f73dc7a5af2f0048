//! Outcome evaluation: inversion rule, scan window, diagonals and draws.

use inversion_engine::{
    BOARD_SIZE, Direction, GameSetup, GameState, Grid, Mark, MoveError, Outcome, Position,
    evaluate_outcome, find_loss_line, place,
};

fn at(label: &str) -> Position {
    label.parse().expect("valid label")
}

fn grid_with(marks: &[(Mark, &str)]) -> Grid {
    marks.iter().fold(Grid::new(), |grid, (mark, label)| {
        place(&grid, at(label), *mark).expect("empty cell")
    })
}

/// Two columns of one mark, then two of the other, shifted by one per row.
/// No line of any direction holds more than two in a row.
fn draw_pattern(position: Position) -> Mark {
    if (position.column / 2 + position.row) % 2 == 0 {
        Mark::X
    } else {
        Mark::O
    }
}

#[test]
fn test_completing_five_loses() {
    let mut game = GameSetup::new().start(Mark::X);
    let moves = ["a1", "a3", "b1", "b3", "c1", "c3", "d1", "d3"];
    for label in moves {
        assert_eq!(game.play(at(label)), Ok(Outcome::InProgress));
    }

    assert_eq!(game.play(at("e1")), Ok(Outcome::WonBy(Mark::O)));
    assert_eq!(game.outcome().winner(), Some(Mark::O));
    assert_eq!(game.play(at("j10")), Err(MoveError::GameOver));
}

#[test]
fn test_inversion_applies_to_o() {
    let grid = grid_with(&[
        (Mark::O, "c2"),
        (Mark::O, "c3"),
        (Mark::O, "c4"),
        (Mark::O, "c5"),
        (Mark::O, "c6"),
    ]);
    assert_eq!(evaluate_outcome(&grid, at("c4"), Mark::O), Outcome::WonBy(Mark::X));
}

#[test]
fn test_run_from_left_edge_detected() {
    let grid = grid_with(&[
        (Mark::X, "e5"),
        (Mark::X, "d5"),
        (Mark::X, "c5"),
        (Mark::X, "b5"),
        (Mark::X, "a5"),
    ]);
    assert_eq!(evaluate_outcome(&grid, at("a5"), Mark::X), Outcome::WonBy(Mark::O));
}

#[test]
fn test_run_beyond_window_ignored() {
    // f1..j1 already hold five Xs, but they lie outside a1's window.
    let grid = grid_with(&[
        (Mark::X, "f1"),
        (Mark::X, "g1"),
        (Mark::X, "h1"),
        (Mark::X, "i1"),
        (Mark::X, "j1"),
        (Mark::X, "b1"),
        (Mark::X, "c1"),
        (Mark::X, "d1"),
        (Mark::X, "a1"),
    ]);
    assert_eq!(evaluate_outcome(&grid, at("a1"), Mark::X), Outcome::InProgress);
}

#[test]
fn test_four_in_a_row_is_safe() {
    let grid = grid_with(&[
        (Mark::X, "a1"),
        (Mark::X, "b1"),
        (Mark::X, "c1"),
        (Mark::X, "d1"),
        (Mark::O, "e1"),
        (Mark::X, "f1"),
    ]);
    assert_eq!(evaluate_outcome(&grid, at("d1"), Mark::X), Outcome::InProgress);
}

#[test]
fn test_anti_diagonal_independent_of_main() {
    // Anti-diagonal through e6: a10 b9 c8 d7 e6 (column up, row down).
    // Main diagonal through e6 is mixed.
    let grid = grid_with(&[
        (Mark::X, "a10"),
        (Mark::X, "b9"),
        (Mark::X, "c8"),
        (Mark::X, "d7"),
        (Mark::O, "d5"),
        (Mark::X, "f7"),
        (Mark::O, "g8"),
        (Mark::X, "e6"),
    ]);
    assert_eq!(
        find_loss_line(&grid, at("e6"), Mark::X),
        Some(Direction::AntiDiagonal)
    );
    assert_eq!(evaluate_outcome(&grid, at("e6"), Mark::X), Outcome::WonBy(Mark::O));
}

#[test]
fn test_main_diagonal_near_corner() {
    let grid = grid_with(&[
        (Mark::O, "f6"),
        (Mark::O, "g7"),
        (Mark::O, "h8"),
        (Mark::O, "i9"),
        (Mark::O, "j10"),
    ]);
    assert_eq!(
        find_loss_line(&grid, at("j10"), Mark::O),
        Some(Direction::MainDiagonal)
    );
}

#[test]
fn test_full_grid_without_run_is_draw() {
    let grid = Position::all().fold(Grid::new(), |grid, pos| {
        place(&grid, pos, draw_pattern(pos)).expect("empty cell")
    });
    let last = Position::new(BOARD_SIZE - 1, BOARD_SIZE - 1);
    assert_eq!(evaluate_outcome(&grid, last, draw_pattern(last)), Outcome::Draw);
}

#[test]
fn test_full_match_ends_in_draw() {
    let xs: Vec<_> = Position::all().filter(|p| draw_pattern(*p) == Mark::X).collect();
    let os: Vec<_> = Position::all().filter(|p| draw_pattern(*p) == Mark::O).collect();
    assert_eq!(xs.len(), os.len());

    let moves: Vec<_> = xs.iter().zip(&os).flat_map(|(x, o)| [*x, *o]).collect();
    let game = GameState::replay(Mark::X, &moves).expect("legal moves");

    assert_eq!(game.outcome(), Outcome::Draw);
    assert!(game.outcome().is_draw());
    assert!(game.valid_moves().is_empty());
}
