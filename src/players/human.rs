//! Human player typing positions like `a10`.

use super::Player;
use crate::console::Prompt;
use anyhow::Result;
use inversion_engine::{GameState, Position};
use tracing::{debug, instrument};

/// Human player reading positions from the console.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    #[instrument(skip_all, fields(player = %self.name, mark = %game.to_move()))]
    fn request_move(&mut self, game: &GameState, console: &mut dyn Prompt) -> Result<Option<Position>> {
        let question = format!(
            "Player \"{}\", your turn (for example, a10): ",
            game.to_move()
        );
        loop {
            let Some(answer) = console.ask(&question)? else {
                return Ok(None);
            };
            match answer.parse::<Position>() {
                Ok(position) => {
                    debug!(%position, "Position entered");
                    return Ok(Some(position));
                }
                Err(e) => {
                    debug!(answer = %answer, error = %e, "Unreadable position");
                    console.say(&format!("Wrong value: {}. Please, try again.", e))?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
