//! Match orchestration between two players.

use crate::config::GameConfig;
use crate::console::Prompt;
use crate::players::Player;
use crate::render::render_grid;
use anyhow::Result;
use inversion_engine::{GameSetup, GameState, Mark, Outcome};
use rand::Rng;
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// How a match stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEnd {
    /// The match reached a terminal outcome.
    Finished(GameState),
    /// A player ran out of moves before the end.
    Abandoned(GameState),
}

impl MatchEnd {
    /// The state the match stopped in.
    pub fn state(&self) -> &GameState {
        match self {
            MatchEnd::Finished(game) | MatchEnd::Abandoned(game) => game,
        }
    }
}

/// Runs matches between two players over a console.
///
/// The first player picks a mark at the start of each match; the second
/// gets the other one. Who moves first is drawn from `rng` every match.
pub struct Orchestrator<P, G> {
    console: P,
    rng: G,
    config: GameConfig,
    first_player: Box<dyn Player>,
    second_player: Box<dyn Player>,
}

impl<P: Prompt, G: Rng> Orchestrator<P, G> {
    /// Creates a new orchestrator.
    pub fn new(
        console: P,
        rng: G,
        config: GameConfig,
        first_player: Box<dyn Player>,
        second_player: Box<dyn Player>,
    ) -> Self {
        Self {
            console,
            rng,
            config,
            first_player,
            second_player,
        }
    }

    /// Returns the console.
    pub fn into_console(self) -> P {
        self.console
    }

    /// Plays matches until the players decline a replay or input ends.
    ///
    /// Returns the outcome of every finished match.
    #[instrument(skip(self))]
    pub fn run_session(&mut self) -> Result<Vec<Outcome>> {
        let mut outcomes = Vec::new();
        loop {
            match self.play_match()? {
                Some(MatchEnd::Finished(game)) => outcomes.push(game.outcome()),
                Some(MatchEnd::Abandoned(_)) | None => break,
            }
            if !self.ask_replay()? {
                break;
            }
            self.console
                .clear(*self.config.clear_style(), *self.config.clear_lines())?;
        }
        info!(matches = outcomes.len(), "Session over");
        Ok(outcomes)
    }

    /// Plays one interactive match from a fresh game.
    ///
    /// Returns `None` if input ended before marks were chosen.
    #[instrument(skip(self))]
    pub fn play_match(&mut self) -> Result<Option<MatchEnd>> {
        self.console.say("Welcome to Tic Tac Toe!")?;

        let Some(first_player_mark) = self.choose_marker()? else {
            return Ok(None);
        };

        let game = GameSetup::new().start_random(&mut self.rng);
        self.console
            .say(&format!("Player with mark \"{}\" goes first.", game.to_move()))?;

        self.run_turns(game, first_player_mark).map(Some)
    }

    /// Drives `game` turn by turn until it ends or a player runs out.
    ///
    /// A rejected position is reported and the same player is asked again.
    #[instrument(skip(self, game), fields(first_player_mark = %first_player_mark))]
    pub fn run_turns(&mut self, mut game: GameState, first_player_mark: Mark) -> Result<MatchEnd> {
        loop {
            self.console.say(&render_grid(game.grid()))?;
            let mark = game.to_move();
            self.console
                .say(&format!("Turn of the player with the mark \"{}\":", mark))?;

            let player = if mark == first_player_mark {
                &mut self.first_player
            } else {
                &mut self.second_player
            };

            let outcome = loop {
                let Some(position) = player.request_move(&game, &mut self.console)? else {
                    info!(player = player.name(), "Player out of moves, match abandoned");
                    return Ok(MatchEnd::Abandoned(game));
                };
                match game.play(position) {
                    Ok(outcome) => break outcome,
                    Err(e) => {
                        warn!(player = player.name(), %position, error = %e, "Move rejected");
                        player.rejected(&e)?;
                        self.console
                            .say(&format!("Wrong value: {}. Please, try again.", e))?;
                    }
                }
            };

            match outcome {
                Outcome::InProgress => debug!(next = %game.to_move(), "Turn passes"),
                Outcome::WonBy(winner) => {
                    self.console
                        .say(&format!("The player with the mark \"{}\" wins!", winner))?;
                    return Ok(MatchEnd::Finished(game));
                }
                Outcome::Draw => {
                    self.console.say("The game ended in a draw.")?;
                    return Ok(MatchEnd::Finished(game));
                }
            }
        }
    }

    /// Writes the final grid and how the match ended to the console.
    pub fn report(&mut self, end: &MatchEnd) -> Result<()> {
        self.console.say(&render_grid(end.state().grid()))?;
        match end {
            MatchEnd::Finished(game) => self.console.say(&format!("Result: {}", game.outcome())),
            MatchEnd::Abandoned(game) => self.console.say(&format!(
                "Match not finished after {} moves; \"{}\" to move.",
                game.history().len(),
                game.to_move()
            )),
        }
    }

    fn choose_marker(&mut self) -> Result<Option<Mark>> {
        loop {
            let Some(answer) = self.console.ask("Please, choose your marker: X or O: ")? else {
                return Ok(None);
            };
            if let Ok(mark) = Mark::from_str(answer.trim()) {
                info!(%mark, player = self.first_player.name(), "Marker chosen");
                return Ok(Some(mark));
            }
        }
    }

    fn ask_replay(&mut self) -> Result<bool> {
        loop {
            let Some(answer) = self
                .console
                .ask("Would you like to play again? Type \"y\" or \"n\"")?
            else {
                return Ok(false);
            };
            match answer.trim().to_ascii_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => continue,
            }
        }
    }
}
