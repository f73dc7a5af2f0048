//! Inversion tic-tac-toe - console game.

use anyhow::Result;
use clap::Parser;
use inversion_tictactoe::cli::{Cli, Command};
use inversion_tictactoe::{
    Console, GameConfig, GameSetup, HumanPlayer, Mark, Orchestrator, Position, ScriptedPlayer,
    logging,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    }
    .with_seed(cli.seed)
    .with_log_file(cli.log_file.clone());

    logging::init(config.log_filter(), config.log_file().as_deref())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(config),
        Command::Replay { first, moves } => run_replay(config, first, &moves),
    }
}

/// Randomness for the starting-mark draw.
fn rng_for(config: &GameConfig) -> ChaCha8Rng {
    match config.seed() {
        Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Interactive session on stdin/stdout.
#[instrument(skip(config))]
fn run_play(config: GameConfig) -> Result<()> {
    info!("Starting interactive session");
    let rng = rng_for(&config);
    let mut orchestrator = Orchestrator::new(
        Console::stdio(),
        rng,
        config,
        Box::new(HumanPlayer::new("Player 1")),
        Box::new(HumanPlayer::new("Player 2")),
    );
    orchestrator.run_session()?;
    Ok(())
}

/// Plays `moves` from an empty grid and prints where the match stopped.
#[instrument(skip(config, moves), fields(moves = moves.len()))]
fn run_replay(config: GameConfig, first: Mark, moves: &[Position]) -> Result<()> {
    let rng = rng_for(&config);
    let (first_player, second_player) = ScriptedPlayer::pair(moves);
    let mut orchestrator = Orchestrator::new(
        Console::stdio(),
        rng,
        config,
        Box::new(first_player),
        Box::new(second_player),
    );

    let end = orchestrator.run_turns(GameSetup::new().start(first), first)?;
    orchestrator.report(&end)
}
