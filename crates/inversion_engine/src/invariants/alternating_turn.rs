//! Alternating turn invariant: marks alternate from the starting mark.

use super::Invariant;
use crate::game::GameState;

/// Invariant: the history starts with the starting mark and alternates.
///
/// While the match is in progress the mark to move is the one after the
/// last move. Once it has ended, the last mover keeps the turn.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        let Some(first) = history.first() else {
            return game.to_move() == game.starting_mark();
        };

        if first.mark != game.starting_mark() {
            return false;
        }
        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        let last = history[history.len() - 1].mark;
        let expected = if game.outcome().is_terminal() {
            last
        } else {
            last.opponent()
        };
        game.to_move() == expected
    }

    fn description() -> &'static str {
        "Marks alternate turns from the starting mark"
    }
}
