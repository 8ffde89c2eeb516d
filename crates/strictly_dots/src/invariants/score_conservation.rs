//! Score conservation: scores are always recomputable from box owners.

use super::super::{Match, PlayerId};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: each player's score equals the boxes they own, so the scores
/// sum to the number of completed boxes.
pub struct ScoreConservationInvariant;

impl Invariant<Match> for ScoreConservationInvariant {
    fn holds(game: &Match) -> bool {
        PlayerId::iter().all(|id| {
            game.player(id).score() as usize == game.board().boxes_owned_by(id)
        })
    }

    fn description() -> &'static str {
        "Player scores match the boxes they own on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    #[test]
    fn test_scores_track_completions() {
        let game = Match::replay(
            3,
            &[
                Move::horizontal(0, 0),
                Move::horizontal(1, 0),
                Move::vertical(0, 0),
                Move::vertical(0, 1),
            ],
        )
        .unwrap();
        assert!(ScoreConservationInvariant::holds(&game));
        assert_eq!(game.score(PlayerId::Two), 1);
    }

    #[test]
    fn test_inflated_score_violates() {
        let mut game = Match::new(3).unwrap();
        game.players[0].add_score(1);
        assert!(!ScoreConservationInvariant::holds(&game));
    }
}
