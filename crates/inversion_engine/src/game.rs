//! Match lifecycle: setup, play, and the pure placement operation.

use crate::action::{Move, MoveError};
use crate::contracts::{CellIsEmpty, Contract, InBounds, MoveContract};
use crate::outcome::Outcome;
use crate::position::Position;
use crate::rules::evaluate_outcome;
use crate::types::{Cell, Grid, Mark};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Returns a copy of `grid` with `mark` placed at `position`.
///
/// Fails with [`MoveError::OutOfBounds`] or [`MoveError::CellOccupied`];
/// the input grid is never modified.
#[instrument(skip(grid))]
pub fn place(grid: &Grid, position: Position, mark: Mark) -> Result<Grid, MoveError> {
    InBounds::check(position)?;
    CellIsEmpty::check(grid, position)?;

    let mut next = grid.clone();
    next.set(position.column, position.row, Cell::Occupied(mark));
    Ok(next)
}

/// Picks the mark that moves first, 50/50 from the given source.
///
/// Call once per match so every replay re-rolls.
#[instrument(skip(rng))]
pub fn choose_starting_mark<R: Rng + ?Sized>(rng: &mut R) -> Mark {
    let mark = if rng.gen_bool(0.5) { Mark::X } else { Mark::O };
    debug!(%mark, "Starting mark chosen");
    mark
}

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// A match that has not started yet. The grid is always empty.
#[derive(Debug, Clone, Default)]
pub struct GameSetup {
    grid: Grid,
}

impl GameSetup {
    /// Creates a new match in setup phase.
    #[instrument]
    pub fn new() -> Self {
        Self { grid: Grid::new() }
    }

    /// Returns the (empty) grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Starts the match with `first` to move.
    #[instrument(skip(self))]
    pub fn start(self, first: Mark) -> GameState {
        info!(%first, "Match started");
        GameState {
            grid: self.grid,
            to_move: first,
            starting_mark: first,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Starts the match with a randomly chosen first mark.
    #[instrument(skip(self, rng))]
    pub fn start_random<R: Rng + ?Sized>(self, rng: &mut R) -> GameState {
        let first = choose_starting_mark(rng);
        self.start(first)
    }
}

// ─────────────────────────────────────────────────────────────
//  Match State
// ─────────────────────────────────────────────────────────────

/// State of one match: grid, whose turn it is, and how it stands.
///
/// Once the outcome is terminal every further move fails with
/// [`MoveError::GameOver`]. A new match needs a fresh [`GameSetup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) grid: Grid,
    pub(crate) to_move: Mark,
    pub(crate) starting_mark: Mark,
    pub(crate) outcome: Outcome,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Places the current mark at `position`.
    ///
    /// On success the turn passes to the other mark unless the match ended.
    pub fn play(&mut self, position: Position) -> Result<Outcome, MoveError> {
        self.apply(Move::new(self.to_move, position))
    }

    /// Applies a move after checking it against the match state.
    ///
    /// Preconditions are checked always; postconditions in debug builds.
    /// Nothing changes when an error is returned from a precondition.
    #[instrument(skip(self), fields(mark = %action.mark, position = %action.position))]
    pub fn apply(&mut self, action: Move) -> Result<Outcome, MoveError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        self.grid = place(&self.grid, action.position, action.mark)?;
        self.history.push(action);
        self.outcome = evaluate_outcome(&self.grid, action.position, action.mark);
        if !self.outcome.is_terminal() {
            self.to_move = action.mark.opponent();
        }

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(self.outcome)
    }

    /// Replays `positions` in order from an empty grid.
    ///
    /// Fails on the first illegal move, including any move after the match
    /// has ended.
    #[instrument(skip(positions), fields(moves = positions.len()))]
    pub fn replay(starting_mark: Mark, positions: &[Position]) -> Result<Self, MoveError> {
        let mut game = GameSetup::new().start(starting_mark);
        for position in positions {
            game.play(*position)?;
        }
        Ok(game)
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the mark whose turn it is. After the match ends this is the
    /// mark that moved last.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the mark that moved first.
    pub fn starting_mark(&self) -> Mark {
        self.starting_mark
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns every empty position.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::all()
            .filter(|pos| self.grid.is_empty(pos.column, pos.row))
            .collect()
    }
}
