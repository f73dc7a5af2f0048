//! Player that replays a fixed list of moves.

use super::Player;
use crate::console::Prompt;
use anyhow::{Result, bail};
use inversion_engine::{GameState, MoveError, Position};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Plays queued positions in order, then runs out.
#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    name: String,
    moves: VecDeque<Position>,
}

impl ScriptedPlayer {
    /// Creates a scripted player.
    pub fn new(name: impl Into<String>, moves: impl IntoIterator<Item = Position>) -> Self {
        Self {
            name: name.into(),
            moves: moves.into_iter().collect(),
        }
    }

    /// Splits one alternating move list into the first and second player's
    /// moves.
    pub fn pair(moves: &[Position]) -> (Self, Self) {
        let first = moves.iter().copied().step_by(2);
        let second = moves.iter().copied().skip(1).step_by(2);
        (Self::new("First", first), Self::new("Second", second))
    }

    /// Moves not yet played.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Player for ScriptedPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    fn request_move(&mut self, _game: &GameState, _console: &mut dyn Prompt) -> Result<Option<Position>> {
        let next = self.moves.pop_front();
        debug!(position = ?next, remaining = self.moves.len(), "Scripted move");
        Ok(next)
    }

    fn rejected(&mut self, error: &MoveError) -> Result<()> {
        bail!("{} played an illegal move: {}", self.name, error)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
