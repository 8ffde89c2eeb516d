//! Completion invariant: a box is complete exactly when all four sides are drawn.

use super::super::Match;
use super::Invariant;

/// Invariant: `completed` iff all four bounding slots are placed.
///
/// Checked for every box, so a box can never be awarded early or be left
/// unawarded once closed.
pub struct CompletionInvariant;

impl Invariant<Match> for CompletionInvariant {
    fn holds(game: &Match) -> bool {
        let board = game.board();
        board
            .boxes()
            .all(|cell| cell.is_completed() == (board.sides_placed(cell.row, cell.col) == 4))
    }

    fn description() -> &'static str {
        "A box is completed exactly when all four sides are placed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, PlayerId};

    #[test]
    fn test_empty_match_holds() {
        let game = Match::new(4).unwrap();
        assert!(CompletionInvariant::holds(&game));
    }

    #[test]
    fn test_holds_through_completion() {
        let mut game = Match::new(4).unwrap();
        for mv in [
            Move::horizontal(0, 0),
            Move::horizontal(1, 0),
            Move::vertical(0, 0),
            Move::vertical(0, 1),
        ] {
            game.submit_move(mv).unwrap();
            assert!(CompletionInvariant::holds(&game));
        }
        assert!(game.board().box_cell(0, 0).unwrap().is_completed());
    }

    #[test]
    fn test_unawarded_closed_box_violates() {
        let mut game = Match::new(2).unwrap();
        for mv in game.board().legal_moves() {
            game.board.place(mv, PlayerId::One).unwrap();
        }
        game.board.boxes[0] = None;
        assert!(!CompletionInvariant::holds(&game));
    }
}
