//! Inversion tic-tac-toe engine.
//!
//! A two-player game on a fixed 10x10 grid where completing a line of
//! five identical marks loses: the opposing mark is declared the winner.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Cell`] and the fixed-size [`Grid`]
//! - **Rules**: loss-line scanning around the last move and draw detection
//! - **Game**: [`GameSetup`] and [`GameState`] for one match
//! - **Contracts / invariants**: move preconditions and state properties
//!   re-checked after every move in debug builds
//!
//! The engine performs no I/O. A driving loop owns the [`GameState`] for one
//! match and calls into it once per turn.
//!
//! # Example
//!
//! ```
//! use inversion_engine::{GameSetup, Mark, Outcome, Position};
//!
//! let mut game = GameSetup::new().start(Mark::X);
//! for column in 0..4 {
//!     game.play(Position::new(column, 0))?; // X along row 1
//!     game.play(Position::new(column, 5))?; // O along row 6
//! }
//! // X completes five in a row and loses.
//! assert_eq!(game.play(Position::new(4, 0))?, Outcome::WonBy(Mark::O));
//! # Ok::<(), inversion_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod invariants;
mod outcome;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, LegalMove, MoveContract};
pub use game::{GameSetup, GameState, choose_starting_mark, place};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MatchInvariants, MonotonicGridInvariant,
};
pub use outcome::Outcome;
pub use position::{COLUMN_LABELS, ParsePositionError, Position};
pub use rules::{Direction, evaluate_outcome, find_loss_line, is_full, longest_run, scan_window};
pub use types::{BOARD_SIZE, Cell, Grid, LOSS_RUN, Mark};
