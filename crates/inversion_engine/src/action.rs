//! Moves as first-class values.
//!
//! A move is the player's intent: which mark goes where. It can be
//! validated before it touches the grid and kept in the match history.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }

    /// Returns the mark being placed.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the target position.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// Error that can occur when validating or applying a move.
///
/// Every variant is recoverable. The grid is left untouched whenever one is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Column or row lies outside the grid.
    #[display("position {} is outside the board", _0)]
    OutOfBounds(Position),

    /// The cell already holds a mark.
    #[display("cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The match has already ended.
    #[display("the game is already over")]
    GameOver,

    /// It's not this mark's turn.
    #[display("it's not {}'s turn", _0)]
    WrongMark(Mark),

    /// An invariant was violated (postcondition failure).
    #[display("invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
