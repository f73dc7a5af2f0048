//! History consistency invariant: one occupied cell per move.

use super::Invariant;
use crate::game::GameState;
use crate::types::Mark;

/// Invariant: history length equals the number of occupied cells, and the
/// per-mark counts never drift more than one apart.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let grid = game.grid();
        grid.occupied() == game.history().len() && grid.count(Mark::X).abs_diff(grid.count(Mark::O)) <= 1
    }

    fn description() -> &'static str {
        "History length matches occupied cells"
    }
}
