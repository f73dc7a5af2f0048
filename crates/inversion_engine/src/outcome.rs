//! Match outcome.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// How a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No terminal condition yet.
    #[default]
    InProgress,
    /// The given mark won because the other one completed a loss line.
    WonBy(Mark),
    /// The grid filled up without a loss line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::WonBy(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the match has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns true if the match was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::WonBy(mark) => write!(f, "Mark {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
