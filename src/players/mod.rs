//! Player trait and implementations.

mod human;
mod scripted;

pub use human::HumanPlayer;
pub use scripted::ScriptedPlayer;

use crate::console::Prompt;
use anyhow::Result;
use inversion_engine::{GameState, MoveError, Position};

/// A source of moves.
pub trait Player {
    /// Gets the next position for the mark to move.
    ///
    /// Returns `None` when the player has no more moves to give, which
    /// abandons the match.
    fn request_move(&mut self, game: &GameState, console: &mut dyn Prompt) -> Result<Option<Position>>;

    /// Called when the engine rejects a position this player gave.
    ///
    /// The orchestrator asks again afterwards unless this returns an error.
    fn rejected(&mut self, _error: &MoveError) -> Result<()> {
        Ok(())
    }

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
