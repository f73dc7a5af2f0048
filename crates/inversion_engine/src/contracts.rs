//! Contract-based validation for moves.
//!
//! A contract pairs the preconditions a move must meet before it touches
//! the grid with the postconditions the match must satisfy afterwards.

use crate::action::{Move, MoveError};
use crate::game::GameState;
use crate::invariants::{InvariantSet, MatchInvariants};
use crate::position::Position;
use crate::types::Grid;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the position lies on the grid.
pub struct InBounds;

impl InBounds {
    /// Fails with [`MoveError::OutOfBounds`] off the grid.
    pub fn check(position: Position) -> Result<(), MoveError> {
        if position.in_bounds() {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds(position))
        }
    }
}

/// Precondition: the target cell holds no mark.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] on a marked cell.
    #[instrument(skip(grid))]
    pub fn check(grid: &Grid, position: Position) -> Result<(), MoveError> {
        if grid.is_empty(position.column, position.row) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(position))
        }
    }
}

/// Precondition: the match has not ended.
pub struct NotFinished;

impl NotFinished {
    /// Fails with [`MoveError::GameOver`] on a terminal match.
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.outcome().is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it is the moving mark's turn.
pub struct MarksTurn;

impl MarksTurn {
    /// Fails with [`MoveError::WrongMark`] out of turn.
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if mov.mark != game.to_move() {
            Err(MoveError::WrongMark(mov.mark))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for a legal move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, match-level checks first.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        NotFinished::check(game)?;
        MarksTurn::check(mov, game)?;
        InBounds::check(mov.position)?;
        CellIsEmpty::check(game.grid(), mov.position)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: match in progress, mark's turn, position on the grid,
/// cell empty.
///
/// Postconditions: the grid only grew by the history, marks alternate from
/// the starting mark, and history length matches occupied cells.
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), MoveError> {
        MatchInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameSetup;
    use crate::types::{Cell, Mark};

    #[test]
    fn test_precondition_empty_cell() {
        let game = GameSetup::new().start(Mark::X);
        let action = Move::new(Mark::X, Position::new(4, 4));
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut game = GameSetup::new().start(Mark::X);
        game.play(Position::new(4, 4)).unwrap();

        let action = Move::new(Mark::O, Position::new(4, 4));
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::CellOccupied(_))
        ));
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = GameSetup::new().start(Mark::X);
        let action = Move::new(Mark::O, Position::new(4, 4));
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WrongMark(Mark::O))
        );
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let game = GameSetup::new().start(Mark::X);
        let action = Move::new(Mark::X, Position::new(10, 10));
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::OutOfBounds(_))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameSetup::new().start(Mark::X);
        let mut after = before.clone();
        after.play(Position::new(1, 1)).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameSetup::new().start(Mark::X);
        let mut after = before.clone();
        after.play(Position::new(1, 1)).unwrap();

        after.grid.set(0, 0, Cell::Occupied(Mark::O));
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
