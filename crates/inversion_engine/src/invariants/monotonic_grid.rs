//! Monotonic grid invariant: cells never change once marked.

use super::Invariant;
use crate::game::{GameState, place};
use crate::types::Grid;

/// Invariant: replaying the history onto an empty grid reproduces the
/// current grid, with every move landing on an empty cell.
pub struct MonotonicGridInvariant;

impl Invariant<GameState> for MonotonicGridInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Grid::new();
        for mov in game.history() {
            match place(&reconstructed, mov.position, mov.mark) {
                Ok(next) => reconstructed = next,
                Err(_) => return false,
            }
        }
        reconstructed == *game.grid()
    }

    fn description() -> &'static str {
        "Grid cells are monotonic (never overwritten)"
    }
}
