//! Command-line interface for inversion_tictactoe.

use clap::{Parser, Subcommand};
use inversion_engine::{Mark, Position};
use std::path::PathBuf;

/// Inversion tic-tac-toe on a 10x10 grid: whoever completes five in a row loses
#[derive(Parser, Debug)]
#[command(name = "inversion_tictactoe")]
#[command(about = "Inversion tic-tac-toe: five in a row loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for choosing the starting mark (overrides the config file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively, two players sharing the keyboard
    Play,

    /// Play a fixed list of moves and print the result
    Replay {
        /// Mark that moves first
        #[arg(long, default_value = "X")]
        first: Mark,

        /// Moves in play order, e.g. `a1 b2 c3`
        #[arg(required = true)]
        moves: Vec<Position>,
    },
}
