//! Inversion tic-tac-toe: the console driver around [`inversion_engine`].
//!
//! # Architecture
//!
//! - **Engine**: grid, move validation and loss detection live in
//!   `inversion_engine` and are re-exported here
//! - **Players**: sources of moves ([`HumanPlayer`] reads lines,
//!   [`ScriptedPlayer`] replays a fixed list)
//! - **Orchestrator**: the match loop, replay prompt and screen clearing
//! - **Render**: the grid as text
//! - **Config / logging**: TOML settings and the tracing subscriber

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod console;
pub mod logging;
mod orchestrator;
mod players;
mod render;

pub use config::{ClearStyle, ConfigError, GameConfig};
pub use console::{Console, Prompt};
pub use orchestrator::{MatchEnd, Orchestrator};
pub use players::{HumanPlayer, Player, ScriptedPlayer};
pub use render::render_grid;

// Crate-level exports - engine types
pub use inversion_engine::{GameSetup, GameState, Mark, MoveError, Outcome, Position};
