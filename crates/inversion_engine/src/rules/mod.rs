//! Game rules for inversion tic-tac-toe.
//!
//! Pure functions over a [`Grid`]. Rules are kept apart from match state so
//! they can be tested on hand-built grids.

mod draw;
mod loss;

pub use draw::is_full;
pub use loss::{Direction, find_loss_line, longest_run, scan_window};

use crate::outcome::Outcome;
use crate::position::Position;
use crate::types::{Grid, Mark};
use tracing::{debug, info, instrument};

/// Decides how the game stands after `last_mark` was placed at `last_position`.
///
/// A loss line of the mover hands the win to the other mark. Without one,
/// a full grid is a draw and anything else is still in progress.
#[instrument(skip(grid))]
pub fn evaluate_outcome(grid: &Grid, last_position: Position, last_mark: Mark) -> Outcome {
    if let Some(direction) = find_loss_line(grid, last_position, last_mark) {
        let winner = last_mark.opponent();
        info!(loser = %last_mark, %winner, %direction, at = %last_position, "Loss line completed");
        return Outcome::WonBy(winner);
    }

    if is_full(grid) {
        info!("Grid full without a loss line");
        return Outcome::Draw;
    }

    debug!("Game continues");
    Outcome::InProgress
}
