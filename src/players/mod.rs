//! Participants: the sources of moves for each seat.

mod ai;
mod human;

pub use ai::AiPlayer;
pub use human::{ConsoleInput, HumanPlayer};

use anyhow::Result;
use strictly_dots::{Match, Move};

/// Something that can take a seat at the table.
pub trait Participant {
    /// Chooses the next move for the active seat.
    ///
    /// Returns `Ok(None)` when the participant gives up the match.
    fn choose_move(&mut self, game: &Match) -> Result<Option<Move>>;

    /// Returns the participant's display name.
    fn name(&self) -> &str;

    /// Called when the engine rejects a move this participant chose.
    fn move_rejected(&mut self, _mv: Move, _reason: &str) {}
}
