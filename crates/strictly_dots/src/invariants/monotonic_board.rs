//! Monotonic board invariant: lines are never overwritten or removed.

use super::super::{Board, Match};
use super::Invariant;

/// Invariant: replaying the move history onto an empty board reproduces the
/// current board exactly.
///
/// Every recorded move must have been legal when it was played, must close
/// the recorded number of boxes, and nothing may be drawn outside the
/// history.
pub struct MonotonicBoardInvariant;

impl Invariant<Match> for MonotonicBoardInvariant {
    fn holds(game: &Match) -> bool {
        let mut reconstructed = Board::with_grid(game.board().grid_size());

        for played in game.history() {
            match reconstructed.place(played.mv, played.player) {
                Ok(completed) if completed.len() == played.completed => {}
                _ => return false,
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Lines are monotonic (history replays to the current board)"
    }
}
