//! Winner determination for a finished board.

use super::super::{Outcome, PlayerId};
use tracing::instrument;

/// Decides the outcome from final scores.
///
/// The player with the strictly higher score wins; equal scores are a draw.
#[instrument]
pub fn decide_outcome(player_one: u32, player_two: u32) -> Outcome {
    match player_one.cmp(&player_two) {
        std::cmp::Ordering::Greater => Outcome::Winner(PlayerId::One),
        std::cmp::Ordering::Less => Outcome::Winner(PlayerId::Two),
        std::cmp::Ordering::Equal => Outcome::Draw,
    }
}
