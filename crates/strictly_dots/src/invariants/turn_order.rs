//! Turn order invariant: the extra-turn rule is respected throughout.

use super::super::{Match, MatchStatus, PlayedMove, PlayerId};
use super::Invariant;

/// Invariant: player 1 opens; a player who completes a box moves again,
/// otherwise the turn passes; the match is over exactly when the board is
/// full.
pub struct TurnOrderInvariant;

/// Who should move after `played`.
fn next_after(played: &PlayedMove) -> PlayerId {
    if played.completed > 0 {
        played.player
    } else {
        played.player.opponent()
    }
}

impl Invariant<Match> for TurnOrderInvariant {
    fn holds(game: &Match) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != PlayerId::One
        {
            return false;
        }

        if history.windows(2).any(|w| w[1].player != next_after(&w[0])) {
            return false;
        }

        match game.status() {
            MatchStatus::AwaitingMove(player) => {
                let expected = history.last().map_or(PlayerId::One, next_after);
                !game.board().is_terminal() && player == expected
            }
            MatchStatus::GameOver(_) => game.board().is_terminal(),
        }
    }

    fn description() -> &'static str {
        "Turns follow the extra-turn rule and the match ends only on a full board"
    }
}
